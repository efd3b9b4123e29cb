//! Info command - type, size, resolution and duration of one file

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::core::{bytes_to_human, millis_to_microwave};
use crate::probe;
use crate::ui;

pub fn run(file: &Path, json: bool) -> Result<()> {
    let info = probe::probe(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    ui::header(&ui::path_link(&info.path, 60));
    println!("  {} {}", "Type:".bright_blue(), info.media_type);
    println!("  {} {}", "Size:".bright_blue(), bytes_to_human(info.size_bytes));

    match info.resolution {
        Some(res) if res.is_zero() => {
            println!("  {} {}", "Resolution:".bright_blue(), "unavailable".dimmed())
        }
        Some(res) => println!("  {} {}", "Resolution:".bright_blue(), res),
        None => {}
    }

    if let Some(ms) = info.duration_ms {
        println!("  {} {}", "Duration:".bright_blue(), millis_to_microwave(ms));
    }

    if !info.media_type.is_known() {
        ui::warn("Unsupported file type");
    }

    Ok(())
}
