//! mediasniff - media type detection
//!
//! Command-line front end: detect file types, inspect a file, or plan a
//! cache output file for it.

use anyhow::Result;
use clap::{CommandFactory, Parser};

use mediasniff::cli::{Cli, Command};
use mediasniff::commands;
use mediasniff::config::Settings;
use mediasniff::probe;
use mediasniff::ui::{self, Log};

fn main() {
	if let Err(e) = run() {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);
	if let Some(path) = cli.ffprobe {
		probe::set_ffprobe_path(path);
	}

	match cli.command {
		Command::Detect { paths, recursive, json, known_only } => {
			commands::detect::run(&paths, recursive, json, known_only)
		}
		Command::Info { file, json } => commands::info::run(&file, json),
		Command::Stage { file, cache_dir, naming, name } => {
			let settings = Settings::load(cli.settings.as_deref())?;
			commands::stage::run(&file, settings, cache_dir, naming, name)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::error(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
			Ok(())
		}
	}
}
