// Test utilities for running a scripted session in a temporary image directory

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use watermark_manager::config::Config;
use watermark_manager::session::{Session, SessionSummary, TerminalPrompter};

pub struct SessionHarness {
    pub dir: TempDir,
}

impl SessionHarness {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn config(&self) -> Config {
        Config {
            image_dir: self.dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    /// Write a solid-color image; the format follows the extension.
    pub fn write_image(&self, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
        let path = self.path(name);
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(color)));
        let format = ImageFormat::from_path(&path).expect("Unknown test image format");
        let image = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
            _ => image,
        };
        image
            .save_with_format(&path, format)
            .expect("Failed to write test image");
        path
    }

    /// Run a session answering with `script` (one answer per line) and
    /// return the summary and everything printed to the terminal.
    pub fn run(&self, script: &[&str]) -> (SessionSummary, String) {
        self.run_with_config(self.config(), script)
    }

    pub fn run_with_config(&self, config: Config, script: &[&str]) -> (SessionSummary, String) {
        let mut input = script.join("\n");
        input.push('\n');

        let prompter = TerminalPrompter::new(Cursor::new(input.into_bytes()), Vec::new());
        let mut session = Session::new(config, prompter);
        let summary = session.run().expect("Session failed");

        let output = String::from_utf8(session.into_prompter().into_writer())
            .expect("Session output is not UTF-8");
        (summary, output)
    }
}

pub fn dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).expect("Failed to read output dimensions")
}
