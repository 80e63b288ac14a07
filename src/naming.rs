// Output file naming
//
// `photo.jpg` becomes `photo-with-watermark.jpg`. The name is split at its
// first dot, so `photo.v2.jpg` becomes `photo-with-watermark.v2.jpg`. Any
// directory part typed by the user is kept as-is and never split.

/// Insert `suffix` between the base name and the extension of `file_name`.
///
/// Names without a dot get the suffix appended and no extension.
pub fn derive_output_name(file_name: &str, suffix: &str) -> String {
    let (dir, name) = match file_name.rfind(|c: char| c == '/' || c == '\\') {
        Some(idx) => file_name.split_at(idx + 1),
        None => ("", file_name),
    };

    match name.split_once('.') {
        Some((base, ext)) => format!("{}{}{}.{}", dir, base, suffix, ext),
        None => format!("{}{}{}", dir, name, suffix),
    }
}
