//! Watermark module for applying text and image watermarks to images.
//!
//! # Features
//!
//! - **Text watermarks** rendered with an embedded font, word-wrapped to the
//!   image width and centered
//! - **Image watermarks** alpha-blended over the center of the image
//! - Styling (font size, color, opacity) from the `text_watermark` and
//!   `image_watermark` configuration sections
//!
//! # Configuration Example
//!
//! ```yaml
//! text_watermark:
//!   font_size: 32
//!   color: "#FFFFFF"
//!   opacity: 1.0
//! image_watermark:
//!   opacity: 0.5
//! ```

pub mod compositor;
pub mod config;
pub mod error;
pub mod position;
pub mod processor;
pub mod text_renderer;

// Re-export main types for convenience
pub use compositor::{apply_centered, blend_layer, create_centered_layer, WatermarkLayer};
pub use config::{ImageWatermarkConfig, TextWatermarkConfig, WatermarkKind};
pub use error::WatermarkError;
pub use position::{
    calculate_centered, is_visible, ImageDimensions, PlacementPosition, WatermarkDimensions,
};
pub use processor::{Watermark, WatermarkProcessor};
pub use text_renderer::{
    measure_text, parse_hex_color, render_text, wrap_text, Color, TextRenderOptions,
};
