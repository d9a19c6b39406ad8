//! Glyph ramp used for intensity-to-character mapping.

/// Density ramp (37 levels).
/// Ordered from densest (`@`) to sparsest (blank). The tail of spaces keeps
/// the darkest tenth of the range empty so shadows read as background.
pub const CHAR_RAMP: [char; 37] = [
    '@', '#', 'W', '$', '9', '8', '7', '6', '5', '4', '3', '2', '1', '0', '?', '!', 'a', 'b',
    'c', ';', ':', '+', '=', '-', ',', '.', '_', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ',
    ' ',
];

/// Number of glyphs in [`CHAR_RAMP`].
pub const RAMP_LEN: usize = CHAR_RAMP.len();

/// Glyph at `index`, clamped to the last entry.
#[inline]
pub fn glyph(index: usize) -> char {
    CHAR_RAMP[index.min(RAMP_LEN - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(RAMP_LEN, 37);
        assert_eq!(CHAR_RAMP[0], '@');
        assert_eq!(CHAR_RAMP[RAMP_LEN - 1], ' ');
    }

    #[test]
    fn test_ramp_spaces_only_at_tail() {
        let first_space = CHAR_RAMP.iter().position(|&c| c == ' ').unwrap();
        assert!(CHAR_RAMP[first_space..].iter().all(|&c| c == ' '));
        assert!(CHAR_RAMP[..first_space].iter().all(|c| !c.is_whitespace()));
    }

    #[test]
    fn test_glyph_clamps() {
        assert_eq!(glyph(0), '@');
        assert_eq!(glyph(1000), ' ');
    }
}
