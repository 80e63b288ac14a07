// Output naming unit tests

use rstest::rstest;
use watermark_manager::constants::DEFAULT_OUTPUT_SUFFIX;
use watermark_manager::naming::derive_output_name;

#[rstest]
#[case("test.jpg", "test-with-watermark.jpg")]
#[case("my.photo.png", "my-with-watermark.photo.png")]
#[case("noext", "noext-with-watermark")]
fn test_default_suffix(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(derive_output_name(input, DEFAULT_OUTPUT_SUFFIX), expected);
}

#[test]
fn test_output_keeps_extension_of_input() {
    let output = derive_output_name("holiday.gif", DEFAULT_OUTPUT_SUFFIX);
    assert!(output.ends_with(".gif"));
    assert!(output.starts_with("holiday"));
}
