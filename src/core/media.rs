//! Media type classification

use serde::Serialize;
use std::fmt;

/// Container kinds the detector knows about.
///
/// `Unknown` is a normal outcome, not an error: callers decide whether an
/// unrecognized file should be surfaced to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
	Jpeg,
	Png,
	Gif,
	Mp4,
	Mkv,
	Webm,
	Avi,
	#[default]
	Unknown,
}

impl MediaType {
	/// Every variant, `Unknown` last
	pub const ALL: [MediaType; 8] = [
		MediaType::Jpeg,
		MediaType::Png,
		MediaType::Gif,
		MediaType::Mp4,
		MediaType::Mkv,
		MediaType::Webm,
		MediaType::Avi,
		MediaType::Unknown,
	];

	/// Lower-case container name, used as the extension of output files
	pub fn extension(self) -> &'static str {
		match self {
			MediaType::Jpeg => "jpeg",
			MediaType::Png => "png",
			MediaType::Gif => "gif",
			MediaType::Mp4 => "mp4",
			MediaType::Mkv => "mkv",
			MediaType::Webm => "webm",
			MediaType::Avi => "avi",
			MediaType::Unknown => "unknown",
		}
	}

	pub fn is_image(self) -> bool {
		is_image(self)
	}

	pub fn is_video(self) -> bool {
		is_video(self)
	}

	pub fn is_known(self) -> bool {
		self != MediaType::Unknown
	}
}

impl fmt::Display for MediaType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.extension())
	}
}

/// JPEG, PNG and GIF
pub fn is_image(media_type: MediaType) -> bool {
	matches!(media_type, MediaType::Jpeg | MediaType::Png | MediaType::Gif)
}

/// MP4, MKV, WEBM and AVI
pub fn is_video(media_type: MediaType) -> bool {
	matches!(
		media_type,
		MediaType::Mp4 | MediaType::Mkv | MediaType::Webm | MediaType::Avi
	)
}
