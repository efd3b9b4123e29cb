//! Application configuration and constants

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

// === Detection ===
/// Bytes read for signature sniffing. 8 covers most signatures, the RIFF/AVI
/// check needs the chunk tag at offset 8..12.
pub const SIGNATURE_WINDOW: usize = 12;

// === Cache ===
pub const CACHE_DIR_NAME: &str = "mediasniff";
pub const DEFAULT_CUSTOM_NAME: &str = "compressed";

// === Environment ===
pub const ENV_CACHE_DIR: &str = "MEDIASNIFF_CACHE_DIR";
pub const ENV_SETTINGS: &str = "MEDIASNIFF_SETTINGS";
pub const ENV_FFPROBE: &str = "MEDIASNIFF_FFPROBE";

/// How staged output files are named
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NamingPolicy {
	/// Keep the source file name (random name if it has none)
	#[default]
	Original,
	/// Random UUID plus the output extension
	Uuid,
	/// Fixed user-provided name plus the output extension
	Custom,
}

/// User settings, read from a JSON file. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub naming: NamingPolicy,
	pub custom_name: String,
	pub convert_videos_to_mp4: bool,
	pub convert_gif_to_mp4: bool,
	pub cache_dir: Option<PathBuf>,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			naming: NamingPolicy::Original,
			custom_name: DEFAULT_CUSTOM_NAME.to_string(),
			convert_videos_to_mp4: false,
			convert_gif_to_mp4: false,
			cache_dir: None,
		}
	}
}

impl Settings {
	/// Load settings from an explicit file, then `MEDIASNIFF_SETTINGS`,
	/// otherwise defaults.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		if let Some(path) = path {
			return Self::from_file(path);
		}

		if let Ok(env_path) = std::env::var(ENV_SETTINGS) {
			crate::ui::debug(&format!("Using {}: {}", ENV_SETTINGS, env_path));
			return Self::from_file(Path::new(&env_path));
		}

		Ok(Self::default())
	}

	pub fn from_file(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path)
			.with_context(|| format!("Failed to read settings: {}", path.display()))?;
		Self::from_json(&text)
			.with_context(|| format!("Invalid settings file: {}", path.display()))
	}

	pub fn from_json(text: &str) -> Result<Self> {
		serde_json::from_str(text).context("Failed to parse settings JSON")
	}

	/// Cache directory: explicit setting, then `MEDIASNIFF_CACHE_DIR`, then
	/// a folder under the system temp dir.
	pub fn cache_dir(&self) -> PathBuf {
		if let Some(dir) = &self.cache_dir {
			return dir.clone();
		}

		if let Ok(env_path) = std::env::var(ENV_CACHE_DIR) {
			crate::ui::debug(&format!("Using {}: {}", ENV_CACHE_DIR, env_path));
			return PathBuf::from(env_path);
		}

		std::env::temp_dir().join(CACHE_DIR_NAME)
	}
}
