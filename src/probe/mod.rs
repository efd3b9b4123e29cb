//! # Media Probing
//!
//! Resolution and duration of detected media. Images are measured with the
//! `image` crate, videos through ffprobe.

pub mod ffprobe;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::MediaType;
use crate::detect;
use crate::ui;

pub use ffprobe::{parse_probe_output, set_ffprobe_path, VideoProbe};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
	pub width: u32,
	pub height: u32,
}

impl Resolution {
	/// Reported for videos whose dimensions could not be read
	pub const ZERO: Resolution = Resolution { width: 0, height: 0 };

	pub fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	pub fn is_zero(&self) -> bool {
		self.width == 0 || self.height == 0
	}
}

impl fmt::Display for Resolution {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}", self.width, self.height)
	}
}

/// Everything known about one media file
#[derive(Debug, Clone, Serialize)]
pub struct MediaInfo {
	pub path: PathBuf,
	pub media_type: MediaType,
	pub size_bytes: u64,
	pub resolution: Option<Resolution>,
	pub duration_ms: Option<u64>,
}

/// Width and height of an image or video.
///
/// An undecodable image is an error. A video ffprobe cannot read yields
/// [`Resolution::ZERO`] instead; this is common with AVI files.
pub fn resolution(path: &Path, media_type: MediaType) -> Result<Resolution> {
	if media_type.is_image() {
		let (width, height) = image::ImageReader::open(path)
			.and_then(|reader| reader.with_guessed_format())
			.map_err(anyhow::Error::from)
			.and_then(|reader| reader.into_dimensions().map_err(anyhow::Error::from))
			.with_context(|| {
				format!(
					"Failed to read image dimensions. File may be corrupted: {}",
					path.display()
				)
			})?;
		return Ok(Resolution::new(width, height));
	}

	if !media_type.is_video() {
		anyhow::bail!("Unsupported file type: {}", path.display());
	}

	Ok(video_info(path).0)
}

/// Video duration in milliseconds. `None` for anything that is not a
/// video, or when ffprobe cannot tell.
pub fn duration_ms(path: &Path) -> Option<u64> {
	match detect::detect_path(path) {
		Ok(media_type) if media_type.is_video() => video_info(path).1,
		_ => None,
	}
}

/// One ffprobe run: dimensions (zero when unreadable) and duration
fn video_info(path: &Path) -> (Resolution, Option<u64>) {
	match ffprobe::probe_video(path) {
		Ok(probe) => (
			Resolution::new(probe.width, probe.height),
			probe.duration_secs.map(|secs| (secs * 1000.0).round() as u64),
		),
		Err(e) => {
			ui::debug(&format!("Unable to probe video: {:#}", e));
			(Resolution::ZERO, None)
		}
	}
}

/// Detect, measure and size a single file
pub fn probe(path: &Path) -> Result<MediaInfo> {
	let metadata = fs::metadata(path)
		.with_context(|| format!("Failed to read metadata: {}", path.display()))?;
	if !metadata.is_file() {
		anyhow::bail!("Not a regular file: {}", path.display());
	}

	let media_type = detect::detect_path(path)
		.with_context(|| format!("Failed to open: {}", path.display()))?;

	let (resolution, duration_ms) = if media_type.is_video() {
		let (resolution, duration_ms) = video_info(path);
		(Some(resolution), duration_ms)
	} else if media_type.is_image() {
		(Some(resolution(path, media_type)?), None)
	} else {
		(None, None)
	};

	Ok(MediaInfo {
		path: path.to_path_buf(),
		media_type,
		size_bytes: metadata.len(),
		resolution,
		duration_ms,
	})
}
