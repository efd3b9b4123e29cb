//! ffprobe wrapper for video dimensions and duration

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use crate::config::ENV_FFPROBE;

static FFPROBE_AVAILABLE: OnceLock<bool> = OnceLock::new();
static CUSTOM_FFPROBE: OnceLock<PathBuf> = OnceLock::new();

pub fn set_ffprobe_path(path: PathBuf) {
	let _ = CUSTOM_FFPROBE.set(path);
}

fn get_ffprobe_binary() -> PathBuf {
	if let Some(custom) = CUSTOM_FFPROBE.get() {
		return custom.clone();
	}
	if let Ok(env_path) = std::env::var(ENV_FFPROBE) {
		return PathBuf::from(env_path);
	}
	PathBuf::from("ffprobe")
}

/// Check if ffprobe can be executed
pub fn is_available() -> bool {
	*FFPROBE_AVAILABLE.get_or_init(|| {
		Command::new(get_ffprobe_binary())
			.arg("-version")
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.status()
			.map(|s| s.success())
			.unwrap_or(false)
	})
}

#[derive(Deserialize)]
struct ProbeFormat {
	duration: Option<String>,
}

#[derive(Deserialize)]
struct ProbeStream {
	codec_type: String,
	width: Option<u32>,
	height: Option<u32>,
}

#[derive(Deserialize)]
struct ProbeOutput {
	#[serde(default)]
	streams: Vec<ProbeStream>,
	format: Option<ProbeFormat>,
}

/// Parsed ffprobe result for the first video stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoProbe {
	pub width: u32,
	pub height: u32,
	pub duration_secs: Option<f64>,
}

/// Run ffprobe on `path`
pub fn probe_video(path: &Path) -> Result<VideoProbe> {
	if !is_available() {
		anyhow::bail!("ffprobe not found in PATH");
	}

	let output = Command::new(get_ffprobe_binary())
		.arg("-v")
		.arg("error")
		.arg("-print_format")
		.arg("json")
		.arg("-show_format")
		.arg("-show_streams")
		.arg(path)
		.output()
		.context("Failed to run ffprobe")?;

	if !output.status.success() {
		anyhow::bail!("ffprobe failed for {}", path.display());
	}

	parse_probe_output(&output.stdout)
}

/// Parse the JSON printed by `ffprobe -print_format json`
pub fn parse_probe_output(json: &[u8]) -> Result<VideoProbe> {
	let probe: ProbeOutput =
		serde_json::from_slice(json).context("Failed to parse ffprobe output")?;

	let video_stream = probe
		.streams
		.iter()
		.find(|s| s.codec_type == "video")
		.context("No video stream found")?;

	let width = video_stream.width.context("Missing width")?;
	let height = video_stream.height.context("Missing height")?;

	let duration_secs = probe
		.format
		.and_then(|f| f.duration)
		.and_then(|d| d.parse::<f64>().ok())
		.filter(|d| d.is_finite() && *d >= 0.0);

	Ok(VideoProbe { width, height, duration_secs })
}
