//! Output planning: target type, file name and cache location for a
//! processed media file

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::{NamingPolicy, Settings};
use crate::core::MediaType;
use crate::ui;

/// Type the output will have after the conversions enabled in `settings`
pub fn output_media_type(input: MediaType, settings: &Settings) -> MediaType {
	if settings.convert_videos_to_mp4 && input.is_video() {
		return MediaType::Mp4;
	}
	if settings.convert_gif_to_mp4 && input == MediaType::Gif {
		return MediaType::Mp4;
	}
	input
}

/// `<uuid>.<ext>`
pub fn random_filename(media_type: MediaType) -> String {
	format!("{}.{}", Uuid::new_v4(), media_type.extension())
}

/// Name the output file according to the naming policy.
///
/// `Original` keeps `source_name` verbatim and falls back to a random name
/// when there is none.
pub fn output_filename(
	source_name: Option<&str>,
	output_type: MediaType,
	settings: &Settings,
) -> String {
	match settings.naming {
		NamingPolicy::Original => source_name
			.filter(|name| !name.is_empty())
			.map(str::to_string)
			.unwrap_or_else(|| random_filename(output_type)),
		NamingPolicy::Uuid => random_filename(output_type),
		NamingPolicy::Custom => format!("{}.{}", settings.custom_name, output_type.extension()),
	}
}

/// Create a fresh `<cache_dir>/<uuid>/` folder
fn make_cache_uuid_folder(cache_dir: &Path) -> Result<PathBuf> {
	let folder = cache_dir.join(Uuid::new_v4().to_string());
	fs::create_dir_all(&folder)
		.with_context(|| format!("Failed to create cache folder: {}", folder.display()))?;
	Ok(folder)
}

/// Plan where the processed version of `source` goes.
///
/// Creates a unique folder in the cache dir and returns the output path in
/// it together with the output media type. Nothing is written to the path.
pub fn cache_output_file(
	source: &Path,
	input_type: MediaType,
	settings: &Settings,
) -> Result<(PathBuf, MediaType)> {
	let output_type = output_media_type(input_type, settings);
	let source_name = source.file_name().map(|n| n.to_string_lossy());
	let filename = output_filename(source_name.as_deref(), output_type, settings);
	ui::debug(&format!("Created output file '{}'", filename));

	let folder = make_cache_uuid_folder(&settings.cache_dir())?;
	Ok((folder.join(filename), output_type))
}
