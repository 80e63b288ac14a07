//! Watermark configuration types.
//!
//! This module defines the styling applied to watermarks:
//! - Text watermarks: font size, color and opacity
//! - Image watermarks: blend opacity
//!
//! Both are always placed at the center of the target image.

use crate::constants::{
    DEFAULT_FONT_SIZE, DEFAULT_IMAGE_OPACITY, DEFAULT_TEXT_COLOR, DEFAULT_TEXT_OPACITY,
};
use serde::{Deserialize, Serialize};

// Default values
fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

fn default_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

fn default_text_opacity() -> f32 {
    DEFAULT_TEXT_OPACITY
}

fn default_image_opacity() -> f32 {
    DEFAULT_IMAGE_OPACITY
}

/// Kind of watermark the user can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatermarkKind {
    Text,
    Image,
}

impl WatermarkKind {
    /// All kinds, in the order they are offered to the user.
    pub const ALL: [WatermarkKind; 2] = [WatermarkKind::Text, WatermarkKind::Image];

    /// Label shown in the selection prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text watermark",
            Self::Image => "Image watermark",
        }
    }
}

/// Text watermark configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextWatermarkConfig {
    /// Font size in pixels (default: 32)
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Text color as hex string (default: "#FFFFFF")
    #[serde(default = "default_color")]
    pub color: String,

    /// Opacity from 0.0 (transparent) to 1.0 (opaque) (default: 1.0)
    #[serde(default = "default_text_opacity")]
    pub opacity: f32,
}

impl Default for TextWatermarkConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            color: default_color(),
            opacity: default_text_opacity(),
        }
    }
}

/// Image watermark configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageWatermarkConfig {
    /// Opacity from 0.0 (transparent) to 1.0 (opaque) (default: 0.5)
    #[serde(default = "default_image_opacity")]
    pub opacity: f32,
}

impl Default for ImageWatermarkConfig {
    fn default() -> Self {
        Self {
            opacity: default_image_opacity(),
        }
    }
}
