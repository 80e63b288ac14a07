//! Position calculation for watermark placement.
//!
//! Watermarks are always centered on the target image. When the watermark is
//! larger than the image the returned coordinates are negative and the
//! compositor clips whatever falls outside.
//!
//! # Example
//!
//! ```
//! use watermark_manager::watermark::position::{
//!     calculate_centered, ImageDimensions, PlacementPosition, WatermarkDimensions,
//! };
//!
//! let image = ImageDimensions { width: 800, height: 600 };
//! let watermark = WatermarkDimensions { width: 100, height: 50 };
//!
//! let pos = calculate_centered(&image, &watermark);
//! assert_eq!(pos, PlacementPosition::new(350, 275));
//! ```

/// Dimensions of the target image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Dimensions of the watermark to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatermarkDimensions {
    pub width: u32,
    pub height: u32,
}

/// Top-left corner where a watermark is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPosition {
    pub x: i32,
    pub y: i32,
}

impl PlacementPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Calculate the position that centers the watermark on the image.
///
/// The offset is `(image - watermark) / 2` rounded to the nearest pixel, with
/// halves rounded up (so `45.5` becomes `46` and `-25.5` becomes `-25`).
pub fn calculate_centered(
    image: &ImageDimensions,
    watermark: &WatermarkDimensions,
) -> PlacementPosition {
    let img_w = image.width as i64;
    let img_h = image.height as i64;
    let wm_w = watermark.width as i64;
    let wm_h = watermark.height as i64;

    PlacementPosition::new(
        centered_offset(img_w, wm_w),
        centered_offset(img_h, wm_h),
    )
}

fn centered_offset(image: i64, watermark: i64) -> i32 {
    (image - watermark + 1).div_euclid(2) as i32
}

/// Check whether any part of a watermark placed at `position` is visible.
pub fn is_visible(
    position: &PlacementPosition,
    image: &ImageDimensions,
    watermark: &WatermarkDimensions,
) -> bool {
    let x_end = position.x as i64 + watermark.width as i64;
    let y_end = position.y as i64 + watermark.height as i64;

    x_end > 0
        && y_end > 0
        && (position.x as i64) < image.width as i64
        && (position.y as i64) < image.height as i64
}
