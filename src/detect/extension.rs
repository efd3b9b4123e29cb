//! Extension phase: classify by file name suffix

use crate::core::MediaType;

/// Checked in order, first suffix match wins.
const EXTENSIONS: &[(&str, MediaType)] = &[
	(".jpg", MediaType::Jpeg),
	(".jpeg", MediaType::Jpeg),
	(".png", MediaType::Png),
	(".gif", MediaType::Gif),
	(".mp4", MediaType::Mp4),
	(".mkv", MediaType::Mkv),
	(".webm", MediaType::Webm),
	(".avi", MediaType::Avi),
];

/// Classify a file name by its extension, case-insensitively.
pub fn from_extension(filename: &str) -> MediaType {
	let lower = filename.to_lowercase();

	EXTENSIONS
		.iter()
		.find(|(suffix, _)| lower.ends_with(suffix))
		.map(|&(_, media_type)| media_type)
		.unwrap_or(MediaType::Unknown)
}
