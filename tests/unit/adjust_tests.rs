// Image adjustment unit tests

use image::{DynamicImage, Rgba, RgbaImage};
use rstest::rstest;
use tempfile::TempDir;
use watermark_manager::adjust::*;
use watermark_manager::error::ProcessingError;
use watermark_manager::image_io::load_image;

#[rstest]
#[case("0.5", 0.5)]
#[case("-0.25", -0.25)]
#[case("3", 1.0)]
#[case("-7.5", -1.0)]
#[case(" 1 ", 1.0)]
fn test_value_is_clamped(#[case] input: &str, #[case] expected: f32) {
    assert_eq!(parse_value(input).unwrap(), expected);
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("NaN")]
fn test_non_numeric_value_rejected(#[case] input: &str) {
    assert!(matches!(
        parse_value(input),
        Err(ProcessingError::InvalidValue(_))
    ));
}

#[test]
fn test_only_brightness_and_contrast_take_values() {
    let with_values: Vec<_> = AdjustmentKind::ALL
        .iter()
        .filter(|k| k.value_prompt().is_some())
        .collect();
    assert_eq!(
        with_values,
        vec![&AdjustmentKind::Brightness, &AdjustmentKind::Contrast]
    );
}

#[test]
fn test_adjust_file_overwrites_in_place() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("grey.png");
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 6, Rgba([200, 10, 10, 255])))
        .save(&path)
        .unwrap();

    adjust_file(&path, &Adjustment::Greyscale, 100).unwrap();

    let result = load_image(&path).unwrap().to_rgba8();
    assert_eq!(result.dimensions(), (8, 6));
    let Rgba([r, g, b, _]) = *result.get_pixel(0, 0);
    assert_eq!(r, g);
    assert_eq!(g, b);
}

#[test]
fn test_adjust_file_corrupt_input_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"not an image").unwrap();

    let result = adjust_file(&path, &Adjustment::Invert, 100);

    assert!(result.is_err());
    assert_eq!(std::fs::read(&path).unwrap(), b"not an image");
}
