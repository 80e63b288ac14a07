//! Missing files, corrupt images and end of input

use super::test_harness::SessionHarness;
use watermark_manager::config::Config;

#[test]
fn test_declining_at_start_exits() {
    let harness = SessionHarness::new();

    let (summary, output) = harness.run(&["n"]);

    assert_eq!(summary.watermarked, 0);
    assert_eq!(output.matches("Are you ready?").count(), 1);
}

#[test]
fn test_missing_input_shows_start_prompt_again() {
    let harness = SessionHarness::new();

    let (_, output) = harness.run(&["y", "ghost.jpg", "n"]);

    let not_found = output.find("Can't find: ").expect("not-found message missing");
    assert!(output.contains("Sorry!"));
    assert!(output.contains("ghost.jpg"));
    let restart = output.rfind("Are you ready?").unwrap();
    assert!(restart > not_found);
}

#[test]
fn test_both_missing_files_are_reported() {
    let harness = SessionHarness::new();
    harness.write_image("present.png", 20, 20, [0, 0, 0, 255]);

    let (_, output) = harness.run(&["y", "present.png", "n", "2", "absent.png", "n"]);

    assert_eq!(output.matches("Can't find: ").count(), 1);
    assert!(output.contains("absent.png"));
    assert!(!harness.path("present-with-watermark.png").exists());
}

#[test]
fn test_corrupt_input_reports_generic_failure() {
    let harness = SessionHarness::new();
    std::fs::write(harness.path("broken.jpg"), b"definitely not a jpeg").unwrap();

    let (summary, output) = harness.run(&["y", "broken.jpg", "n", "1", "Hello", "n"]);

    assert!(output.contains("Something went wrong... Try again!"));
    assert!(!harness.path("broken-with-watermark.jpg").exists());
    assert_eq!(summary.failures, 1);
    // The session went back to the start prompt
    assert_eq!(output.matches("Are you ready?").count(), 2);
}

#[test]
fn test_unsupported_output_extension_fails_cleanly() {
    let harness = SessionHarness::new();
    // PNG content under an extension we can decode but not encode
    let png = harness.write_image("pic.png", 16, 16, [0, 0, 0, 255]);
    std::fs::rename(&png, harness.path("pic.tiff")).unwrap();

    let (summary, output) = harness.run(&["y", "pic.tiff", "n", "1", "Hi", "n"]);

    assert_eq!(summary.failures, 1);
    assert!(output.contains("Something went wrong... Try again!"));
    assert!(!harness.path("pic-with-watermark.tiff").exists());
}

#[test]
fn test_end_of_input_ends_session() {
    let harness = SessionHarness::new();
    harness.write_image("test.jpg", 20, 20, [0, 0, 0, 255]);

    // Input stops in the middle of the flow
    let (summary, _) = harness.run(&["y", "", "n"]);

    assert_eq!(summary.watermarked, 0);
    assert!(!harness.path("test-with-watermark.jpg").exists());
}

#[test]
fn test_custom_suffix_and_defaults() {
    let harness = SessionHarness::new();
    harness.write_image("cat.png", 40, 40, [0, 0, 0, 255]);
    let mut config: Config = harness.config();
    config.defaults.input_image = "cat.png".to_string();
    config.output.suffix = "_stamped".to_string();

    harness.run_with_config(config, &["y", "", "n", "1", "meow", "n"]);

    assert!(harness.path("cat_stamped.png").is_file());
}

#[test]
fn test_absolute_input_outside_image_dir_is_refused() {
    let harness = SessionHarness::new();
    let outside = tempfile::TempDir::new().unwrap();
    let victim = outside.path().join("victim.png");
    image::RgbaImage::from_pixel(12, 12, image::Rgba([10, 20, 30, 255]))
        .save(&victim)
        .unwrap();
    let before = std::fs::read(&victim).unwrap();
    let typed = victim.display().to_string();

    let (summary, output) = harness.run(&["y", typed.as_str(), "n"]);

    assert_eq!(summary.adjusted, 0);
    assert_eq!(summary.watermarked, 0);
    assert!(output.contains(&format!("Can't find: {}", typed)));
    assert_eq!(std::fs::read(&victim).unwrap(), before);
    assert!(!outside.path().join("victim-with-watermark.png").exists());
}

#[test]
fn test_parent_dir_watermark_name_is_refused() {
    let harness = SessionHarness::new();
    harness.write_image("test.png", 20, 20, [0, 0, 0, 255]);

    let (summary, output) = harness.run(&["y", "test.png", "n", "2", "../logo.png", "n"]);

    assert_eq!(summary.watermarked, 0);
    assert!(output.contains("Can't find: ../logo.png"));
    assert!(!harness.path("test-with-watermark.png").exists());
}
