// Scanner - Collects files from paths and directories and detects their types

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::MediaType;
use crate::detect::detect_path;
use crate::ui;

#[derive(Debug, Clone, Serialize)]
pub struct Detection {
	pub path: PathBuf,
	pub media_type: MediaType,
}

#[derive(Debug, Default)]
pub struct ScanResult {
	pub detections: Vec<Detection>,
	pub errors: Vec<String>,
}

impl ScanResult {
	pub fn count_images(&self) -> usize {
		self.detections.iter().filter(|d| d.media_type.is_image()).count()
	}

	pub fn count_videos(&self) -> usize {
		self.detections.iter().filter(|d| d.media_type.is_video()).count()
	}

	pub fn count_unknown(&self) -> usize {
		self.detections.iter().filter(|d| !d.media_type.is_known()).count()
	}
}

/// Detect every file named by `inputs`. Directories are listed one level
/// deep unless `recursive` is set.
pub fn scan_inputs(inputs: &[PathBuf], recursive: bool) -> ScanResult {
	let mut files = Vec::new();
	let mut errors = Vec::new();
	let mut seen = HashSet::new();

	for input in inputs {
		if input.is_file() {
			collect_file(input, &mut files, &mut seen);
		} else if input.is_dir() {
			let walker = if recursive { WalkDir::new(input) } else { WalkDir::new(input).max_depth(1) };

			for entry in walker.into_iter() {
				match entry {
					Ok(entry) if entry.file_type().is_file() => {
						collect_file(entry.path(), &mut files, &mut seen);
					}
					Ok(_) => {}
					Err(e) => errors.push(format!("Walk '{}': {}", input.display(), e)),
				}
			}
		} else {
			errors.push(format!("Not found: {}", input.display()));
		}
	}

	let results: Vec<Result<Detection, String>> = files
		.into_par_iter()
		.map(|path| match detect_path(&path) {
			Ok(media_type) => Ok(Detection { path, media_type }),
			Err(e) => Err(format!("Open '{}': {}", path.display(), e)),
		})
		.collect();

	let mut detections = Vec::with_capacity(results.len());
	for result in results {
		match result {
			Ok(detection) => detections.push(detection),
			Err(e) => errors.push(e),
		}
	}
	detections.sort_by(|a, b| a.path.cmp(&b.path));

	ui::debug(&format!("Detected {} files, {} errors", detections.len(), errors.len()));

	ScanResult { detections, errors }
}

fn collect_file(path: &Path, files: &mut Vec<PathBuf>, seen: &mut HashSet<PathBuf>) {
	let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
	if seen.insert(canonical.clone()) {
		files.push(canonical);
	}
}
