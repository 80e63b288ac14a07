//! Watermark processor for applying watermarks to images.
//!
//! This module provides the high-level API used by the interactive session:
//! decode the input, render or load the watermark, composite it at the
//! center, and encode the result to the output path.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use watermark_manager::watermark::{Watermark, WatermarkProcessor};
//!
//! let processor = WatermarkProcessor::default();
//! processor
//!     .watermark_file(
//!         Path::new("./img/test.jpg"),
//!         Path::new("./img/test-with-watermark.jpg"),
//!         &Watermark::Text("Hello".to_string()),
//!     )
//!     .unwrap();
//! ```

use super::{
    apply_centered, parse_hex_color, render_text, ImageWatermarkConfig, TextRenderOptions,
    TextWatermarkConfig, WatermarkError, WatermarkKind,
};
use crate::config::Config;
use crate::constants::DEFAULT_JPEG_QUALITY;
use crate::error::ProcessingError;
use crate::image_io::{load_image, output_format, save_image};
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// A watermark chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Watermark {
    /// Literal text, rendered at the center of the image
    Text(String),
    /// Path of an image blended over the center of the input
    Image(PathBuf),
}

impl Watermark {
    pub fn kind(&self) -> WatermarkKind {
        match self {
            Self::Text(_) => WatermarkKind::Text,
            Self::Image(_) => WatermarkKind::Image,
        }
    }
}

/// Watermark processor holding the styling for both watermark kinds.
#[derive(Debug, Clone)]
pub struct WatermarkProcessor {
    text: TextWatermarkConfig,
    image: ImageWatermarkConfig,
    jpeg_quality: u8,
}

impl Default for WatermarkProcessor {
    fn default() -> Self {
        Self::new(
            TextWatermarkConfig::default(),
            ImageWatermarkConfig::default(),
            DEFAULT_JPEG_QUALITY,
        )
    }
}

impl WatermarkProcessor {
    pub fn new(text: TextWatermarkConfig, image: ImageWatermarkConfig, jpeg_quality: u8) -> Self {
        Self {
            text,
            image,
            jpeg_quality,
        }
    }

    /// Build a processor from the application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.text_watermark.clone(),
            config.image_watermark.clone(),
            config.output.jpeg_quality,
        )
    }

    /// Render `text` and composite it at the center of `image`.
    ///
    /// Lines wrap at the image width. Blank text leaves the image unchanged.
    pub fn apply_text(
        &self,
        image: &DynamicImage,
        text: &str,
    ) -> Result<DynamicImage, WatermarkError> {
        if text.trim().is_empty() {
            return Ok(image.clone());
        }

        let options = TextRenderOptions {
            text: text.to_string(),
            font_size: self.text.font_size as f32,
            color: parse_hex_color(&self.text.color)?,
            opacity: self.text.opacity,
            max_width: Some(image.width()),
        };
        let rendered = render_text(&options)?;

        let mut target = image.to_rgba8();
        // Opacity is already baked into the rendered alpha
        apply_centered(&mut target, &rendered, 1.0)?;

        Ok(DynamicImage::ImageRgba8(target))
    }

    /// Composite `watermark` at the center of `image` using the configured
    /// opacity.
    pub fn apply_image(
        &self,
        image: &DynamicImage,
        watermark: &DynamicImage,
    ) -> Result<DynamicImage, WatermarkError> {
        let mut target = image.to_rgba8();
        apply_centered(&mut target, &watermark.to_rgba8(), self.image.opacity)?;

        Ok(DynamicImage::ImageRgba8(target))
    }

    /// Watermark the image at `input` and write the result to `output`.
    ///
    /// The output format follows the output extension. Nothing is written
    /// when any step fails.
    pub fn watermark_file(
        &self,
        input: &Path,
        output: &Path,
        watermark: &Watermark,
    ) -> Result<(), ProcessingError> {
        // Fail before decoding anything if the output can't be encoded
        output_format(output)?;

        let image = load_image(input)?;

        let result = match watermark {
            Watermark::Text(text) => self.apply_text(&image, text)?,
            Watermark::Image(path) => {
                let mark = load_image(path)
                    .map_err(|e| WatermarkError::DecodeError(e.to_string()))?;
                self.apply_image(&image, &mark)?
            }
        };

        save_image(&result, output, self.jpeg_quality)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            kind = watermark.kind().label(),
            "Watermark applied"
        );

        Ok(())
    }
}
