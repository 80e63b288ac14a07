// Configuration module unit tests

use std::path::PathBuf;
use watermark_manager::config::*;

#[test]
fn test_empty_yaml_gives_defaults() {
    let config = Config::from_yaml_with_env("").expect("Empty config should load");

    assert_eq!(config.image_dir, PathBuf::from("./img"));
    assert_eq!(config.defaults.input_image, "test.jpg");
    assert_eq!(config.defaults.watermark_image, "logo.png");
    assert_eq!(config.output.suffix, "-with-watermark");
    assert_eq!(config.output.jpeg_quality, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn test_can_deserialize_full_config() {
    let yaml = r##"
image_dir: /srv/pictures
defaults:
  input_image: cat.png
  watermark_image: stamp.png
output:
  suffix: "_marked"
  jpeg_quality: 85
text_watermark:
  font_size: 48
  color: "#FF0000"
  opacity: 0.8
image_watermark:
  opacity: 0.25
logging:
  level: debug
  format: json
"##;
    let config = Config::from_yaml_with_env(yaml).expect("Failed to load config");

    assert_eq!(config.image_dir, PathBuf::from("/srv/pictures"));
    assert_eq!(config.defaults.input_image, "cat.png");
    assert_eq!(config.output.suffix, "_marked");
    assert_eq!(config.output.jpeg_quality, 85);
    assert_eq!(config.text_watermark.font_size, 48);
    assert_eq!(config.text_watermark.color, "#FF0000");
    assert_eq!(config.image_watermark.opacity, 0.25);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_env_substitution_in_image_dir() {
    std::env::set_var("WATERMARK_UNIT_IMAGE_DIR", "/tmp/unit-images");
    let config = Config::from_yaml_with_env("image_dir: ${WATERMARK_UNIT_IMAGE_DIR}\n")
        .expect("Failed to load config");

    assert_eq!(config.image_dir, PathBuf::from("/tmp/unit-images"));
}

#[test]
fn test_validate_rejects_bad_quality() {
    let config = Config::from_yaml_with_env("output:\n  jpeg_quality: 0\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_dotted_suffix() {
    let config = Config::from_yaml_with_env("output:\n  suffix: \".wm\"\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_color() {
    let config = Config::from_yaml_with_env("text_watermark:\n  color: white\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_resolve_image_path() {
    let config = Config {
        image_dir: PathBuf::from("/data/img"),
        ..Config::default()
    };
    assert_eq!(
        config.resolve_image_path("test.jpg"),
        Some(PathBuf::from("/data/img/test.jpg"))
    );
    assert_eq!(config.resolve_image_path("/data/other/test.jpg"), None);
}

#[test]
fn test_from_file_missing() {
    assert!(Config::from_file("/nonexistent/watermark.yaml").is_err());
}
