//! Unit tests for the ASCII rendering pipeline.
//!
//! These tests verify the properties the renderer guarantees:
//! - Ramp index range and monotonicity
//! - Intensity direction (white is dense, black is blank)
//! - Aspect-corrected target rows
//! - Line and glyph counts in both output modes
//! - A single reset token per color frame

use iascii::ascii::*;
use iascii::frame::{Frame, Pixel};

/// Horizontal gradient, left dark, right bright.
fn gradient(width: u32, height: u32) -> Frame {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _y in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1).max(1)) as u8;
            data.extend_from_slice(&[v, v / 2, 255 - v]);
        }
    }
    Frame::rgb(data, width, height).unwrap()
}

fn strip_escapes(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip up to and including the final 'm'
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

// ==================== Luminance Mapping Tests ====================

#[test]
fn test_ramp_index_in_range_for_all_intensities() {
    for v in 0..=255u8 {
        let idx = ramp_index(v as f32, RAMP_LEN);
        assert!(idx < RAMP_LEN, "intensity {} gave index {}", v, idx);
    }
}

#[test]
fn test_ramp_index_monotonically_non_increasing() {
    let mut prev = ramp_index(0.0, RAMP_LEN);
    for v in 1..=255u8 {
        let idx = ramp_index(v as f32, RAMP_LEN);
        assert!(idx <= prev, "index rose from {} to {} at {}", prev, idx, v);
        prev = idx;
    }
}

#[test]
fn test_black_is_last_entry_and_white_is_first() {
    assert_eq!(pixel_glyph(Pixel::Gray(0)), CHAR_RAMP[RAMP_LEN - 1]);
    assert_eq!(pixel_glyph(Pixel::Gray(255)), CHAR_RAMP[0]);
    assert_eq!(pixel_index(Pixel::Gray(0)), RAMP_LEN - 1);
    assert_eq!(pixel_index(Pixel::Gray(255)), 0);
}

#[test]
fn test_rgb_luminance_respects_channel_semantics() {
    // Same bytes, different channel meaning: green weighs most
    let green = pixel_index(Pixel::Rgb { r: 0, g: 200, b: 0 });
    let blue = pixel_index(Pixel::Rgb { r: 0, g: 0, b: 200 });
    assert!(green < blue, "green should map to a denser glyph than blue");
}

// ==================== Dimension Tests ====================

#[test]
fn test_target_rows_square_character_grid() {
    assert_eq!(target_rows(165, 100, 100), Ok(100));
}

#[test]
fn test_target_rows_scales_with_columns() {
    let small = target_rows(480, 640, 40).unwrap();
    let large = target_rows(480, 640, 160).unwrap();
    assert_eq!(small, 18);
    assert_eq!(large, 73);
}

#[test]
fn test_target_rows_zero_inputs() {
    assert!(matches!(
        target_rows(480, 0, 70),
        Err(DimensionError::InvalidDimension { .. })
    ));
    assert!(matches!(
        target_rows(480, 640, 0),
        Err(DimensionError::InvalidDimension { .. })
    ));
}

// ==================== Renderer Tests ====================

#[test]
fn test_single_pixel_mid_gray() {
    let frame = Frame::gray(vec![128], 1, 1).unwrap();
    let config = RenderConfig {
        columns: 1,
        color: false,
    };
    let text = render(&frame, &config);
    assert_eq!(text, format!("{}\n", CHAR_RAMP[18]));
}

#[test]
fn test_line_count_equals_rows_both_modes() {
    for (w, h) in [(1, 1), (7, 3), (40, 12)] {
        let frame = gradient(w, h);
        for color in [false, true] {
            let config = RenderConfig { columns: w, color };
            let text = render(&frame, &config);
            assert_eq!(line_count(&text), h as usize, "{}x{} color={}", w, h, color);
        }
    }
}

#[test]
fn test_glyph_count_per_line_equals_columns() {
    let frame = gradient(25, 4);
    let gray = render(
        &frame,
        &RenderConfig {
            columns: 25,
            color: false,
        },
    );
    assert!(gray.lines().all(|l| l.chars().count() == 25));

    let color = render(
        &frame,
        &RenderConfig {
            columns: 25,
            color: true,
        },
    );
    let stripped = strip_escapes(&color);
    assert_eq!(stripped.lines().count(), 4);
    assert!(stripped.lines().all(|l| l.chars().count() == 25));
    assert!(color.lines().next().unwrap().len() > 25);
}

#[test]
fn test_color_and_gray_agree_on_glyphs() {
    let frame = gradient(30, 5);
    let gray = render(
        &frame,
        &RenderConfig {
            columns: 30,
            color: false,
        },
    );
    let color = render(
        &frame,
        &RenderConfig {
            columns: 30,
            color: true,
        },
    );
    assert_eq!(strip_escapes(&color), gray);
}

#[test]
fn test_color_and_gray_agree_on_every_red_green_mix() {
    // One row per red value, green stepping across the row
    let width = 86;
    let mut data = Vec::with_capacity(256 * width * 3);
    for r in 0..=255u8 {
        for g in (0..=255u8).step_by(3) {
            data.extend_from_slice(&[r, g, 0]);
        }
    }
    let frame = Frame::rgb(data, width as u32, 256).unwrap();

    let gray = render(
        &frame,
        &RenderConfig {
            columns: width as u32,
            color: false,
        },
    );
    let color = render(
        &frame,
        &RenderConfig {
            columns: width as u32,
            color: true,
        },
    );
    assert_eq!(strip_escapes(&color), gray);
}

#[test]
fn test_color_mode_single_reset_at_end() {
    for (w, h) in [(1, 1), (16, 9), (64, 20)] {
        let frame = gradient(w, h);
        let text = render(&frame, &RenderConfig { columns: w, color: true });
        assert_eq!(text.matches(RESET).count(), 1);
        assert!(text.ends_with(RESET));
    }
}

#[test]
fn test_gray_mode_has_no_escapes() {
    let frame = gradient(10, 3);
    let text = render(
        &frame,
        &RenderConfig {
            columns: 10,
            color: false,
        },
    );
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_color_mode_escape_carries_pixel_rgb() {
    let frame = Frame::rgb(vec![10, 20, 30, 200, 100, 50], 2, 1).unwrap();
    let text = render(&frame, &RenderConfig { columns: 2, color: true });
    assert!(text.starts_with("\x1b[38;2;10;20;30m"));
    assert!(text.contains("\x1b[38;2;200;100;50m"));
}

#[test]
fn test_render_returns_fresh_string_each_call() {
    let config = RenderConfig {
        columns: 2,
        color: false,
    };
    let a = render(&Frame::gray(vec![255, 255], 2, 1).unwrap(), &config);
    let b = render(&Frame::gray(vec![0, 0], 2, 1).unwrap(), &config);
    assert_eq!(a, "@@\n");
    assert_eq!(b, "  \n");
}

#[test]
fn test_encode_matches_renderer_token() {
    let frame = Frame::gray(vec![255], 1, 1).unwrap();
    let text = render(&frame, &RenderConfig { columns: 1, color: true });
    assert_eq!(text, format!("{}\n{}", encode(255, 255, 255, '@'), RESET));
}
