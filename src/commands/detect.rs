//! Detect command - classify files by extension and signature

use anyhow::Result;
use colored::*;
use std::path::PathBuf;
use std::time::Instant;

use crate::core::MediaType;
use crate::scan::{self, Detection};
use crate::ui;

pub fn run(paths: &[PathBuf], recursive: bool, json: bool, known_only: bool) -> Result<()> {
    let start = Instant::now();

    let mut result = scan::scan_inputs(paths, recursive);
    if known_only {
        result.detections.retain(|d| d.media_type.is_known());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result.detections)?);
        for e in &result.errors {
            ui::error(e);
        }
        return Ok(());
    }

    for detection in &result.detections {
        print_detection(detection);
    }

    for e in &result.errors {
        ui::error(e);
    }

    println!();
    ui::success(&format!(
        "Detected {} files in {:.2}s ({} images, {} videos, {} unknown)",
        result.detections.len(),
        start.elapsed().as_secs_f32(),
        result.count_images(),
        result.count_videos(),
        result.count_unknown()
    ));

    Ok(())
}

fn print_detection(detection: &Detection) {
    let label = format!("{:<7}", detection.media_type.to_string());
    let label = match detection.media_type {
        MediaType::Unknown => label.dimmed(),
        t if t.is_image() => label.bright_green(),
        _ => label.bright_cyan(),
    };
    println!("  {} {}", label, ui::path_link(&detection.path, 60));
}
