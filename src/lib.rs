// Watermark Manager Library
// Interactive tool that stamps a text or image watermark onto image files

pub mod adjust;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_io;
pub mod logging;
pub mod naming;
pub mod session;
pub mod watermark;
