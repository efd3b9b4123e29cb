use clap::builder::styling::{AnsiColor, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::NamingPolicy;

fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().bold())
		.usage(AnsiColor::Blue.on_default().bold())
		.literal(AnsiColor::Blue.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
		.valid(AnsiColor::Blue.on_default())
		.invalid(AnsiColor::Red.on_default())
}

#[derive(Parser, Debug)]
#[command(
	name = "mediasniff",
	author,
	version,
	about = "Media type detection by extension and file signature",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {detect}  {detect_args}     {detect_desc}
  {bin} {detect}  {json_args}  {json_desc}
  {bin} {info}    {info_args}          {info_desc}
  {bin} {stage}   {stage_args}  {stage_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "mediasniff".bright_blue(),
		detect = "detect".yellow(),
		detect_args = "./media/ -r",
		detect_desc = "Detect all files recursively".dimmed(),
		json_args = "clip.bin --json",
		json_desc = "Machine-readable output".dimmed(),
		info = "info".yellow(),
		info_args = "movie.mkv",
		info_desc = "Resolution, size, duration".dimmed(),
		stage = "stage".yellow(),
		stage_args = "cat.gif -n uuid",
		stage_desc = "Plan a cache output file".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Settings file (JSON)
	#[arg(short = 's', long = "settings", global = true, value_name = "FILE")]
	pub settings: Option<PathBuf>,

	/// Path to the ffprobe binary
	#[arg(long = "ffprobe", global = true, value_name = "PATH")]
	pub ffprobe: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Detect the media type of files
	Detect {
		/// Files or directories
		#[arg(value_name = "PATH", required = true)]
		paths: Vec<PathBuf>,

		/// Descend into subdirectories
		#[arg(short = 'r', long = "recursive")]
		recursive: bool,

		/// Print results as JSON
		#[arg(long = "json")]
		json: bool,

		/// Hide files of unknown type
		#[arg(short = 'k', long = "known-only")]
		known_only: bool,
	},

	/// Show type, size, resolution and duration of a file
	Info {
		/// File to inspect
		#[arg(value_name = "FILE")]
		file: PathBuf,

		/// Print result as JSON
		#[arg(long = "json")]
		json: bool,
	},

	/// Plan the cache output file for a media file
	Stage {
		/// Source media file
		#[arg(value_name = "FILE")]
		file: PathBuf,

		/// Cache directory (overrides settings)
		#[arg(short = 'c', long = "cache-dir", value_name = "DIR")]
		cache_dir: Option<PathBuf>,

		/// Output naming: original, uuid, custom
		#[arg(short = 'n', long = "naming")]
		naming: Option<NamingPolicy>,

		/// Name used with `--naming custom`
		#[arg(long = "name", value_name = "NAME")]
		name: Option<String>,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
