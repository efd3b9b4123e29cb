//! Core domain types

pub mod format;
pub mod media;

pub use format::{bytes_to_human, millis_to_microwave};
pub use media::{is_image, is_video, MediaType};
