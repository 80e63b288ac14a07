//! Text watermark rendering.
//!
//! This module renders text watermarks to RGBA images that can be
//! composited onto target images.
//!
//! # Features
//!
//! - Hex color parsing (#RGB and #RRGGBB formats)
//! - Configurable font size and opacity
//! - Word wrapping to a maximum width, each line centered
//! - Embedded default font (no external dependencies)
//!
//! # Example
//!
//! ```
//! use watermark_manager::watermark::text_renderer::{
//!     parse_hex_color, render_text, TextRenderOptions,
//! };
//!
//! let options = TextRenderOptions {
//!     text: "Copyright 2025".to_string(),
//!     font_size: 32.0,
//!     color: parse_hex_color("#FFFFFF").unwrap(),
//!     opacity: 1.0,
//!     max_width: Some(400),
//! };
//!
//! let image = render_text(&options).unwrap();
//! assert!(image.width() <= 400);
//! ```

use super::WatermarkError;
use ab_glyph::{Font, FontRef, PxScale, PxScaleFont, ScaleFont};
use image::{Rgba, RgbaImage};
use std::sync::OnceLock;

/// Default embedded font, parsed on first use.
static DEFAULT_FONT: OnceLock<Result<FontRef<'static>, String>> = OnceLock::new();

/// Embedded font data (DejaVu Sans Mono, Bitstream Vera license).
const EMBEDDED_FONT_DATA: &[u8] = include_bytes!("fonts/DejaVuSansMono.ttf");

/// Padding added around rendered text, in pixels.
const TEXT_PADDING: u32 = 2;

/// Get the default font, initializing it lazily.
fn get_default_font() -> Result<&'static FontRef<'static>, WatermarkError> {
    DEFAULT_FONT
        .get_or_init(|| FontRef::try_from_slice(EMBEDDED_FONT_DATA).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| WatermarkError::RenderError(format!("Failed to load embedded font: {}", e)))
}

/// Parsed RGB color from hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White color.
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }
}

/// Options for text rendering.
#[derive(Debug, Clone)]
pub struct TextRenderOptions {
    /// The text to render. Explicit newlines start a new line.
    pub text: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text color (RGB).
    pub color: Color,
    /// Opacity (0.0 to 1.0).
    pub opacity: f32,
    /// Wrap words onto new lines past this width. None disables wrapping.
    pub max_width: Option<u32>,
}

impl Default for TextRenderOptions {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: 32.0,
            color: Color::white(),
            opacity: 1.0,
            max_width: None,
        }
    }
}

/// Parse a hex color string into RGB components.
///
/// Supports both #RGB and #RRGGBB formats.
///
/// # Examples
///
/// ```
/// use watermark_manager::watermark::text_renderer::{parse_hex_color, Color};
///
/// assert_eq!(parse_hex_color("#FFF").unwrap(), Color::new(255, 255, 255));
/// assert_eq!(parse_hex_color("#FF0000").unwrap(), Color::new(255, 0, 0));
/// ```
pub fn parse_hex_color(hex: &str) -> Result<Color, WatermarkError> {
    let hex = hex
        .strip_prefix('#')
        .ok_or_else(|| WatermarkError::ConfigError("Color must start with '#'".to_string()))?;

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WatermarkError::ConfigError(format!(
            "Invalid hex digit in color '#{}'",
            hex
        )));
    }

    let component = |digits: &str| {
        u8::from_str_radix(digits, 16)
            .map_err(|_| WatermarkError::ConfigError("Invalid hex digit".to_string()))
    };

    match hex.len() {
        3 => {
            // #RGB: each digit is doubled, 0xF -> 0xFF, 0xA -> 0xAA
            let r = component(&hex[0..1])?;
            let g = component(&hex[1..2])?;
            let b = component(&hex[2..3])?;
            Ok(Color::new(r * 17, g * 17, b * 17))
        }
        6 => Ok(Color::new(
            component(&hex[0..2])?,
            component(&hex[2..4])?,
            component(&hex[4..6])?,
        )),
        _ => Err(WatermarkError::ConfigError(format!(
            "Color must be #RGB or #RRGGBB format, got {} characters",
            hex.len()
        ))),
    }
}

/// Width in pixels of a single line, including kerning.
fn line_width(scaled_font: &PxScaleFont<&FontRef<'_>>, text: &str) -> f32 {
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);
        if let Some(prev) = prev_glyph {
            width += scaled_font.kern(prev, glyph_id);
        }
        width += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width
}

/// Calculate the dimensions of a single rendered line.
///
/// Returns (width, height) in pixels.
pub fn measure_text(text: &str, font_size: f32) -> Result<(u32, u32), WatermarkError> {
    let font = get_default_font()?;
    let scaled_font = font.as_scaled(PxScale::from(font_size));

    let width = line_width(&scaled_font, text);
    let height = scaled_font.height();

    Ok((
        width.ceil() as u32 + TEXT_PADDING,
        height.ceil() as u32 + TEXT_PADDING,
    ))
}

/// Split text into lines no wider than `max_width`.
///
/// Explicit newlines are kept. A single word wider than `max_width` gets a
/// line of its own rather than being broken.
pub fn wrap_text(text: &str, font_size: f32, max_width: u32) -> Result<Vec<String>, WatermarkError> {
    let font = get_default_font()?;
    let scaled_font = font.as_scaled(PxScale::from(font_size));
    let limit = max_width.saturating_sub(TEXT_PADDING) as f32;

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{} {}", current, word);
            if line_width(&scaled_font, &candidate) <= limit {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        lines.push(current);
    }

    Ok(lines)
}

/// Render text to an RGBA image.
///
/// Creates a new image with transparent background containing the rendered
/// text. Lines are centered horizontally within the image.
pub fn render_text(options: &TextRenderOptions) -> Result<RgbaImage, WatermarkError> {
    if options.text.trim().is_empty() {
        return Err(WatermarkError::RenderError(
            "Cannot render empty text".to_string(),
        ));
    }
    if !(options.font_size.is_finite() && options.font_size > 0.0) {
        return Err(WatermarkError::ConfigError(format!(
            "Font size must be positive, got {}",
            options.font_size
        )));
    }

    let font = get_default_font()?;
    let scale = PxScale::from(options.font_size);
    let scaled_font = font.as_scaled(scale);

    let lines = match options.max_width {
        Some(max_width) => wrap_text(&options.text, options.font_size, max_width)?,
        None => options.text.lines().map(str::to_string).collect(),
    };

    let line_height = scaled_font.height() + scaled_font.line_gap();
    let widths: Vec<f32> = lines
        .iter()
        .map(|line| line_width(&scaled_font, line))
        .collect();
    let content_width = widths.iter().cloned().fold(0.0f32, f32::max);

    let canvas_width = content_width.ceil() as u32 + TEXT_PADDING;
    let canvas_height = (line_height * lines.len() as f32).ceil() as u32 + TEXT_PADDING;

    let mut image = RgbaImage::new(canvas_width.max(1), canvas_height.max(1));

    let alpha = (options.opacity.clamp(0.0, 1.0) * 255.0) as u8;
    let ascent = scaled_font.ascent();
    let offset = (TEXT_PADDING / 2) as f32;

    for (index, (line, width)) in lines.iter().zip(widths.iter()).enumerate() {
        let baseline_y = offset + ascent + line_height * index as f32;
        let mut cursor_x = offset + ((content_width - width) / 2.0).floor();
        let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

        for c in line.chars() {
            let glyph_id = scaled_font.glyph_id(c);

            if let Some(prev) = prev_glyph {
                cursor_x += scaled_font.kern(prev, glyph_id);
            }

            let glyph =
                glyph_id.with_scale_and_position(scale, ab_glyph::point(cursor_x, baseline_y));

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();

                outlined.draw(|px, py, coverage| {
                    let x = px as i32 + bounds.min.x as i32;
                    let y = py as i32 + bounds.min.y as i32;

                    if x >= 0 && y >= 0 && x < image.width() as i32 && y < image.height() as i32 {
                        let pixel_alpha = (coverage.clamp(0.0, 1.0) * alpha as f32) as u8;
                        let pixel = Rgba([
                            options.color.r,
                            options.color.g,
                            options.color.b,
                            pixel_alpha,
                        ]);

                        // Blend with existing pixel (for overlapping anti-aliased edges)
                        let existing = *image.get_pixel(x as u32, y as u32);
                        let blended = super::compositor::blend_pixels(existing, pixel, 1.0);
                        image.put_pixel(x as u32, y as u32, blended);
                    }
                });
            }

            cursor_x += scaled_font.h_advance(glyph_id);
            prev_glyph = Some(glyph_id);
        }
    }

    Ok(image)
}
