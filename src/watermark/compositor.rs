//! Watermark compositor for blending watermarks onto images.
//!
//! This module handles alpha blending of watermark images onto target images
//! at calculated positions.
//!
//! # Features
//!
//! - Porter-Duff "over" blending with an extra opacity factor
//! - Clipping of watermarks that extend past the image edges
//! - Centered placement helper
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use watermark_manager::watermark::compositor::apply_centered;
//!
//! let mut target = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
//! let logo = RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 255]));
//!
//! apply_centered(&mut target, &logo, 0.5).unwrap();
//! assert!(target.get_pixel(50, 50)[0] > 100);
//! ```

use super::position::{
    calculate_centered, is_visible, ImageDimensions, PlacementPosition, WatermarkDimensions,
};
use super::WatermarkError;
use image::{Rgba, RgbaImage};

/// A watermark layer to be composited onto an image.
#[derive(Clone)]
pub struct WatermarkLayer {
    /// The watermark image (RGBA).
    pub image: RgbaImage,
    /// Position where the watermark's top-left corner is placed.
    pub position: PlacementPosition,
    /// Opacity to apply (0.0 to 1.0). Applied on top of image's alpha channel.
    pub opacity: f32,
}

impl std::fmt::Debug for WatermarkLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatermarkLayer")
            .field("dimensions", &(self.image.width(), self.image.height()))
            .field("position", &self.position)
            .field("opacity", &self.opacity)
            .finish()
    }
}

/// Create a layer that centers `watermark` on an image of `image_dims`.
pub fn create_centered_layer(
    watermark: RgbaImage,
    image_dims: &ImageDimensions,
    opacity: f32,
) -> WatermarkLayer {
    let wm_dims = WatermarkDimensions {
        width: watermark.width(),
        height: watermark.height(),
    };

    WatermarkLayer {
        position: calculate_centered(image_dims, &wm_dims),
        image: watermark,
        opacity,
    }
}

/// Blend `watermark` onto the center of `target`.
///
/// Fails when either image is empty or the opacity is outside 0.0..=1.0.
pub fn apply_centered(
    target: &mut RgbaImage,
    watermark: &RgbaImage,
    opacity: f32,
) -> Result<(), WatermarkError> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(WatermarkError::ConfigError(format!(
            "opacity must be between 0.0 and 1.0, got {}",
            opacity
        )));
    }
    if target.width() == 0 || target.height() == 0 {
        return Err(WatermarkError::CompositeError(
            "target image has no pixels".to_string(),
        ));
    }
    if watermark.width() == 0 || watermark.height() == 0 {
        return Err(WatermarkError::CompositeError(
            "watermark image has no pixels".to_string(),
        ));
    }

    let image_dims = ImageDimensions {
        width: target.width(),
        height: target.height(),
    };

    let layer = create_centered_layer(watermark.clone(), &image_dims, opacity);
    blend_layer(target, &layer);
    Ok(())
}

/// Blend a single watermark layer onto the target image.
pub fn blend_layer(target: &mut RgbaImage, layer: &WatermarkLayer) {
    let image_dims = ImageDimensions {
        width: target.width(),
        height: target.height(),
    };
    let wm_dims = WatermarkDimensions {
        width: layer.image.width(),
        height: layer.image.height(),
    };
    if !is_visible(&layer.position, &image_dims, &wm_dims) {
        return;
    }

    let target_width = target.width() as i32;
    let target_height = target.height() as i32;

    let wm_width = layer.image.width() as i32;
    let wm_height = layer.image.height() as i32;

    // Calculate the visible region (clamp to target bounds)
    let x_start = layer.position.x.max(0);
    let y_start = layer.position.y.max(0);
    let x_end = (layer.position.x + wm_width).min(target_width);
    let y_end = (layer.position.y + wm_height).min(target_height);

    for ty in y_start..y_end {
        for tx in x_start..x_end {
            let wx = (tx - layer.position.x) as u32;
            let wy = (ty - layer.position.y) as u32;

            let wm_pixel = layer.image.get_pixel(wx, wy);
            let target_pixel = target.get_pixel(tx as u32, ty as u32);

            let blended = blend_pixels(*target_pixel, *wm_pixel, layer.opacity);
            target.put_pixel(tx as u32, ty as u32, blended);
        }
    }
}

/// Blend two pixels using alpha compositing with additional opacity.
///
/// Uses the "over" operator: result = foreground + background * (1 - foreground.alpha)
pub(crate) fn blend_pixels(background: Rgba<u8>, foreground: Rgba<u8>, opacity: f32) -> Rgba<u8> {
    let fg_alpha = (foreground[3] as f32 / 255.0) * opacity.clamp(0.0, 1.0);
    let bg_alpha = background[3] as f32 / 255.0;

    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);

    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let fg_f = fg as f32 / 255.0;
        let bg_f = bg as f32 / 255.0;
        let result = (fg_f * fg_alpha + bg_f * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        (result * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend_channel(foreground[0], background[0]),
        blend_channel(foreground[1], background[1]),
        blend_channel(foreground[2], background[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}
