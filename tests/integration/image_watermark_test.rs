//! Image watermark end-to-end tests

use super::test_harness::{dimensions, SessionHarness};

#[test]
fn test_image_watermark_keeps_input_dimensions() {
    let harness = SessionHarness::new();
    harness.write_image("test.jpg", 300, 180, [0, 0, 0, 255]);
    harness.write_image("logo.png", 50, 40, [255, 255, 255, 255]);

    // ready, default input, no edit, image watermark, default logo, stop
    let (summary, output) = harness.run(&["y", "", "n", "2", "", "n"]);

    let written = harness.path("test-with-watermark.jpg");
    assert_eq!(dimensions(&written), (300, 180));
    assert_eq!(summary.watermarked, 1);
    assert!(output.contains("Success!"));
}

#[test]
fn test_image_watermark_blends_at_half_opacity() {
    let harness = SessionHarness::new();
    harness.write_image("base.png", 100, 100, [0, 0, 0, 255]);
    harness.write_image("mark.png", 20, 20, [255, 255, 255, 255]);

    harness.run(&["y", "base.png", "n", "Image watermark", "mark.png", "n"]);

    let result = image::open(harness.path("base-with-watermark.png"))
        .unwrap()
        .to_rgba8();
    let center = result.get_pixel(50, 50)[0];
    assert!((120..=136).contains(&center), "center channel was {}", center);
    assert_eq!(result.get_pixel(5, 5)[0], 0);
}

#[test]
fn test_watermark_larger_than_input_is_clipped() {
    let harness = SessionHarness::new();
    harness.write_image("small.png", 30, 30, [0, 0, 0, 255]);
    harness.write_image("big.png", 90, 90, [255, 0, 0, 255]);

    let (summary, _) = harness.run(&["y", "small.png", "n", "2", "big.png", "n"]);

    assert_eq!(summary.watermarked, 1);
    assert_eq!(dimensions(&harness.path("small-with-watermark.png")), (30, 30));
}
