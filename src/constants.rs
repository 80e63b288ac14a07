// Constants module - centralized default values for configuration
//
// This module defines all default values used throughout the codebase.
// Every configuration field falls back to one of these when it is absent
// from the YAML file (or when no file is given at all).

// =============================================================================
// Filesystem defaults
// =============================================================================

/// Directory that input images are read from and output images written to
pub const DEFAULT_IMAGE_DIR: &str = "./img";

/// File name offered when asking which image to mark
pub const DEFAULT_INPUT_IMAGE: &str = "test.jpg";

/// File name offered when asking for an image watermark
pub const DEFAULT_WATERMARK_IMAGE: &str = "logo.png";

/// Suffix inserted before the extension of the output file
pub const DEFAULT_OUTPUT_SUFFIX: &str = "-with-watermark";

// =============================================================================
// Encoding defaults
// =============================================================================

/// JPEG quality used for every write (1-100)
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

// =============================================================================
// Watermark defaults
// =============================================================================

/// Font size of text watermarks in pixels
pub const DEFAULT_FONT_SIZE: u32 = 32;

/// Color of text watermarks
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";

/// Opacity of text watermarks (fully opaque)
pub const DEFAULT_TEXT_OPACITY: f32 = 1.0;

/// Opacity of image watermarks
pub const DEFAULT_IMAGE_OPACITY: f32 = 0.5;

// =============================================================================
// Adjustment limits
// =============================================================================

/// Lower bound of brightness and contrast values
pub const ADJUSTMENT_MIN: f32 = -1.0;

/// Upper bound of brightness and contrast values
pub const ADJUSTMENT_MAX: f32 = 1.0;

// =============================================================================
// Logging defaults
// =============================================================================

/// Log level used when neither RUST_LOG nor the config file set one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// =============================================================================
// User-facing messages
// =============================================================================

/// Printed whenever an image operation fails
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong... Try again!";

/// Printed after a watermark has been written
pub const SUCCESS_MESSAGE: &str = "Success!";
