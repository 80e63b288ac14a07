// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::constants::{
    DEFAULT_IMAGE_DIR, DEFAULT_INPUT_IMAGE, DEFAULT_JPEG_QUALITY, DEFAULT_LOG_LEVEL,
    DEFAULT_OUTPUT_SUFFIX, DEFAULT_WATERMARK_IMAGE,
};
use crate::watermark::{parse_hex_color, ImageWatermarkConfig, TextWatermarkConfig};

/// Top-level application configuration.
///
/// Every section is optional; an empty file (or no file at all) yields the
/// same behaviour as [`Config::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding input images; outputs are written next to them
    pub image_dir: PathBuf,
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
    pub text_watermark: TextWatermarkConfig,
    pub image_watermark: ImageWatermarkConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            defaults: DefaultsConfig::default(),
            output: OutputConfig::default(),
            text_watermark: TextWatermarkConfig::default(),
            image_watermark: ImageWatermarkConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// File names pre-filled in the interactive prompts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DefaultsConfig {
    pub input_image: String,
    pub watermark_image: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            input_image: DEFAULT_INPUT_IMAGE.to_string(),
            watermark_image: DEFAULT_WATERMARK_IMAGE.to_string(),
        }
    }
}

/// Output naming and encoding settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Inserted between the base name and the extension (default: "-with-watermark")
    pub suffix: String,
    /// JPEG quality for every write, 1-100 (default: 100)
    pub jpeg_quality: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines (default)
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, String> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| e.to_string())?;

        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                )
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        if substituted.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&substituted).map_err(|e| e.to_string())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.image_dir.as_os_str().is_empty() {
            return Err("image_dir cannot be empty".to_string());
        }

        if self.defaults.input_image.trim().is_empty() {
            return Err("defaults.input_image cannot be empty".to_string());
        }
        if self.defaults.watermark_image.trim().is_empty() {
            return Err("defaults.watermark_image cannot be empty".to_string());
        }

        // The suffix is what keeps the output from overwriting the input
        let suffix = &self.output.suffix;
        if suffix.is_empty() {
            return Err("output.suffix cannot be empty".to_string());
        }
        if suffix.contains('.') || suffix.contains('/') || suffix.contains('\\') {
            return Err(format!(
                "output.suffix '{}' must not contain '.', '/' or '\\'",
                suffix
            ));
        }

        if !(1..=100).contains(&self.output.jpeg_quality) {
            return Err(format!(
                "output.jpeg_quality must be between 1 and 100, got {}",
                self.output.jpeg_quality
            ));
        }

        let text = &self.text_watermark;
        if text.font_size == 0 {
            return Err("text_watermark.font_size must be greater than 0".to_string());
        }
        if !(0.0..=1.0).contains(&text.opacity) {
            return Err(format!(
                "text_watermark.opacity must be between 0.0 and 1.0, got {}",
                text.opacity
            ));
        }
        parse_hex_color(&text.color).map_err(|e| format!("text_watermark.color: {}", e))?;

        if !(0.0..=1.0).contains(&self.image_watermark.opacity) {
            return Err(format!(
                "image_watermark.opacity must be between 0.0 and 1.0, got {}",
                self.image_watermark.opacity
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err("logging.level cannot be empty".to_string());
        }

        Ok(())
    }

    /// Resolve a file name typed by the user against the image directory.
    ///
    /// Returns `None` for names that would leave the directory: absolute
    /// paths, drive prefixes and `..` components.
    pub fn resolve_image_path(&self, file_name: &str) -> Option<PathBuf> {
        let relative = Path::new(file_name);
        let stays_inside = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

        stays_inside.then(|| self.image_dir.join(relative))
    }
}
