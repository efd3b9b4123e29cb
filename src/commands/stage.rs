//! Stage command - plan the cache output file for a media file

use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};

use crate::config::{NamingPolicy, Settings};
use crate::detect;
use crate::output;
use crate::ui;

pub fn run(
    file: &Path,
    mut settings: Settings,
    cache_dir: Option<PathBuf>,
    naming: Option<NamingPolicy>,
    name: Option<String>,
) -> Result<()> {
    if let Some(dir) = cache_dir {
        settings.cache_dir = Some(dir);
    }
    if let Some(naming) = naming {
        settings.naming = naming;
    }
    if let Some(name) = name {
        settings.custom_name = name;
    }

    let input_type = detect::detect_path(file)
        .with_context(|| format!("Failed to open: {}", file.display()))?;

    if !input_type.is_known() {
        anyhow::bail!("Unsupported file type: {}", file.display());
    }

    let (output_path, output_type) = output::cache_output_file(file, input_type, &settings)?;

    ui::info(&format!("Input type: {}", input_type));
    if output_type != input_type {
        ui::info(&format!("Converting {} → {}", input_type, output_type.to_string().yellow()));
    }
    ui::success(&format!("Output: {}", output_path.display()));

    Ok(())
}
