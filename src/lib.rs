//! # mediasniff Library
//!
//! Media type detection for images and videos. The file name extension is
//! trusted first; magic-byte sniffing over the leading bytes is the
//! fallback. Also plans cache output files and reads resolution and
//! duration of detected media.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod detect;
pub mod output;
pub mod probe;
pub mod scan;
pub mod ui;

pub use crate::core::{is_image, is_video, MediaType};
pub use crate::detect::{detect, detect_path, ByteSource};
