//! Image file input/output
//!
//! Handles the disk side of every operation: read → decode and
//! encode → write. Encoding happens fully in memory before the file is
//! touched, so a failed encode never leaves a partial output behind.

use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageFormat, ImageOutputFormat};
use std::io::Cursor;
use std::path::Path;

use crate::error::ProcessingError;

/// Read and decode the image at `path`.
///
/// The format is detected from the file contents, not the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage, ProcessingError> {
    let data = std::fs::read(path).map_err(|source| ProcessingError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    decode_image(&data).map_err(|message| ProcessingError::Decode {
        path: path.to_path_buf(),
        message,
    })
}

/// Decode image data into a DynamicImage
fn decode_image(data: &[u8]) -> Result<DynamicImage, String> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .decode()
        .map_err(|e| e.to_string())
}

/// Determine the output format from the file extension.
///
/// Only formats with an encoder compiled in are accepted.
pub fn output_format(path: &Path) -> Result<ImageFormat, ProcessingError> {
    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Gif)) => Ok(format),
        _ => Err(ProcessingError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Encode an image into memory.
///
/// JPEG has no alpha channel, so the image is flattened to RGB first.
pub fn encode_image(
    image: &DynamicImage,
    format: ImageFormat,
    jpeg_quality: u8,
) -> Result<Vec<u8>, String> {
    let mut buffer = Cursor::new(Vec::new());

    match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8())
            .write_to(&mut buffer, ImageOutputFormat::Jpeg(jpeg_quality.clamp(1, 100))),
        other => image.write_to(&mut buffer, other),
    }
    .map_err(|e| e.to_string())?;

    Ok(buffer.into_inner())
}

/// Encode `image` in the format implied by `path` and write it there.
///
/// Existing files are overwritten.
pub fn save_image(
    image: &DynamicImage,
    path: &Path,
    jpeg_quality: u8,
) -> Result<(), ProcessingError> {
    let format = output_format(path)?;

    let data = encode_image(image, format, jpeg_quality).map_err(|message| {
        ProcessingError::Encode {
            path: path.to_path_buf(),
            message,
        }
    })?;

    std::fs::write(path, data).map_err(|e| ProcessingError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Image written"
    );

    Ok(())
}
