//! Output grid size for aspect-correct terminal rendering.

/// Height-to-width ratio of a terminal glyph cell.
///
/// Monospace cells are taller than they are wide, so the row count is divided
/// by this factor to keep a square source region square on screen.
pub const CHAR_ASPECT_RATIO: f64 = 1.65;

/// Errors from dimension calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    #[error("Invalid dimension: source {source_cols}x{source_rows}, target width {target_columns}")]
    InvalidDimension {
        source_rows: u32,
        source_cols: u32,
        target_columns: u32,
    },
}

/// Number of output rows for a grid `target_columns` wide.
///
/// `round((source_rows / source_cols) / 1.65 * target_columns)`, never less
/// than 1.
///
/// # Errors
/// Returns `DimensionError::InvalidDimension` if any input is zero.
///
/// # Example
/// ```
/// use iascii::ascii::target_rows;
/// // A 1.65:1 source maps to a square character grid
/// assert_eq!(target_rows(165, 100, 100).unwrap(), 100);
/// ```
pub fn target_rows(
    source_rows: u32,
    source_cols: u32,
    target_columns: u32,
) -> Result<u32, DimensionError> {
    if source_rows == 0 || source_cols == 0 || target_columns == 0 {
        return Err(DimensionError::InvalidDimension {
            source_rows,
            source_cols,
            target_columns,
        });
    }

    let ratio = source_rows as f64 / source_cols as f64 / CHAR_ASPECT_RATIO;
    let rows = (ratio * target_columns as f64).round();
    Ok((rows as u32).max(1))
}
