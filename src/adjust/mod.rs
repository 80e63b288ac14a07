//! Pre-watermark image adjustments.
//!
//! One adjustment can be applied to the input image before it is
//! watermarked. The result overwrites the input file; no backup is kept.
//!
//! | Adjustment | Parameter | Pixel transform                                   |
//! |------------|-----------|---------------------------------------------------|
//! | Brightness | -1..=1    | `v < 0`: `c * (1 + v)`, else `c + (255 - c) * v`  |
//! | Contrast   | -1..=1    | `(v + 1) / (1 - v) * (c - 127) + 127`             |
//! | Greyscale  | -         | `0.2126 R + 0.7152 G + 0.0722 B`                  |
//! | Invert     | -         | mirror horizontally and vertically                |
//!
//! Alpha is never modified.

use image::{imageops, DynamicImage, Rgba, RgbaImage};
use std::path::Path;

use crate::constants::{ADJUSTMENT_MAX, ADJUSTMENT_MIN};
use crate::error::ProcessingError;
use crate::image_io::{load_image, save_image};

/// The adjustments offered to the user, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentKind {
    Brightness,
    Contrast,
    Greyscale,
    Invert,
}

impl AdjustmentKind {
    /// All kinds, in the order they are offered to the user.
    pub const ALL: [AdjustmentKind; 4] = [
        AdjustmentKind::Brightness,
        AdjustmentKind::Contrast,
        AdjustmentKind::Greyscale,
        AdjustmentKind::Invert,
    ];

    /// Label shown in the selection prompt and in the confirmation message.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Brightness => "adjust brightness",
            Self::Contrast => "adjust contrast",
            Self::Greyscale => "make image b&w",
            Self::Invert => "invert image",
        }
    }

    /// Prompt asking for the numeric parameter, if this kind takes one.
    pub fn value_prompt(&self) -> Option<&'static str> {
        match self {
            Self::Brightness => {
                Some("Type your value between -1 (max dark) and 1 (max bright)")
            }
            Self::Contrast => Some("Type your value between -1 (min) and 1 (max)"),
            Self::Greyscale | Self::Invert => None,
        }
    }

    /// Build the adjustment. `value` is clamped to -1..=1 and ignored by
    /// kinds without a parameter.
    pub fn with_value(self, value: f32) -> Adjustment {
        match self {
            Self::Brightness => Adjustment::Brightness(clamp_value(value)),
            Self::Contrast => Adjustment::Contrast(clamp_value(value)),
            Self::Greyscale => Adjustment::Greyscale,
            Self::Invert => Adjustment::Invert,
        }
    }
}

/// A fully specified adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    Brightness(f32),
    Contrast(f32),
    Greyscale,
    Invert,
}

impl Adjustment {
    pub fn kind(&self) -> AdjustmentKind {
        match self {
            Self::Brightness(_) => AdjustmentKind::Brightness,
            Self::Contrast(_) => AdjustmentKind::Contrast,
            Self::Greyscale => AdjustmentKind::Greyscale,
            Self::Invert => AdjustmentKind::Invert,
        }
    }

    /// Apply the adjustment to an image in place.
    pub fn apply(&self, image: &mut RgbaImage) {
        match *self {
            Self::Brightness(value) => {
                let value = clamp_value(value);
                map_channels(image, |c| brighten_channel(c, value));
            }
            Self::Contrast(value) => {
                let value = clamp_value(value);
                map_channels(image, |c| contrast_channel(c, value));
            }
            Self::Greyscale => {
                for pixel in image.pixels_mut() {
                    let Rgba([r, g, b, a]) = *pixel;
                    let grey = (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) as u8;
                    *pixel = Rgba([grey, grey, grey, a]);
                }
            }
            Self::Invert => {
                imageops::flip_horizontal_in_place(image);
                imageops::flip_vertical_in_place(image);
            }
        }
    }
}

/// Clamp a brightness/contrast value to -1..=1.
///
/// NaN has no meaningful position in the range and maps to 0 (no change).
pub fn clamp_value(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(ADJUSTMENT_MIN, ADJUSTMENT_MAX)
}

/// Parse a value typed by the user and clamp it to -1..=1.
pub fn parse_value(input: &str) -> Result<f32, ProcessingError> {
    let trimmed = input.trim();
    match trimmed.parse::<f32>() {
        Ok(value) if !value.is_nan() => Ok(clamp_value(value)),
        _ => Err(ProcessingError::InvalidValue(trimmed.to_string())),
    }
}

/// Apply `f` to the color channels of every pixel, leaving alpha alone.
fn map_channels(image: &mut RgbaImage, f: impl Fn(u8) -> u8) {
    for pixel in image.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        *pixel = Rgba([f(r), f(g), f(b), a]);
    }
}

fn brighten_channel(channel: u8, value: f32) -> u8 {
    let c = channel as f32;
    let adjusted = if value < 0.0 {
        c * (1.0 + value)
    } else {
        c + (255.0 - c) * value
    };
    adjusted.clamp(0.0, 255.0) as u8
}

fn contrast_channel(channel: u8, value: f32) -> u8 {
    let centered = channel as f32 - 127.0;

    // At +1 the factor is infinite: every channel is pushed to an extreme
    if value >= ADJUSTMENT_MAX {
        return match centered {
            d if d > 0.0 => 255,
            d if d < 0.0 => 0,
            _ => 127,
        };
    }

    let factor = (value + 1.0) / (1.0 - value);
    (factor * centered + 127.0).floor().clamp(0.0, 255.0) as u8
}

/// Load the image at `path`, apply `adjustment`, and write it back to the
/// same path.
pub fn adjust_file(
    path: &Path,
    adjustment: &Adjustment,
    jpeg_quality: u8,
) -> Result<(), ProcessingError> {
    let image = load_image(path)?;
    let mut rgba = image.to_rgba8();

    adjustment.apply(&mut rgba);

    save_image(&DynamicImage::ImageRgba8(rgba), path, jpeg_quality)?;

    tracing::info!(
        path = %path.display(),
        adjustment = adjustment.kind().label(),
        "Adjustment applied"
    );

    Ok(())
}
