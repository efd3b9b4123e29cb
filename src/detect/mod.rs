//! # Media Type Detection
//!
//! Two-phase classification: the file name extension is trusted first, and
//! the leading bytes are sniffed only when the extension says nothing.
//! The byte source is opened lazily so the cheap path never touches I/O.

pub mod extension;
pub mod signature;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::core::MediaType;
use crate::ui;

pub use extension::from_extension;
pub use signature::{from_signature, match_signature, read_window, signature_hex};

/// "Read up to N bytes from the current position".
///
/// Implementations fill as much of `buf` as they can and return the count.
/// Errors and end of input both end the read early; they never propagate.
pub trait ByteSource {
	fn read_prefix(&mut self, buf: &mut [u8]) -> usize;
}

impl<R: Read + ?Sized> ByteSource for R {
	fn read_prefix(&mut self, buf: &mut [u8]) -> usize {
		let mut filled = 0;
		while filled < buf.len() {
			match self.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => {
					ui::debug(&format!("Signature read stopped early: {}", e));
					break;
				}
			}
		}
		filled
	}
}

/// Classify a resource from its optional file name, falling back to the
/// bytes produced by `open`.
///
/// `open` is called at most once, and only when the extension is missing or
/// unrecognized. The source is dropped before returning.
pub fn detect<S, F>(filename: Option<&str>, open: F) -> MediaType
where
	S: ByteSource,
	F: FnOnce() -> S,
{
	if let Some(name) = filename {
		let media_type = from_extension(name);
		if media_type.is_known() {
			ui::debug(&format!("Found filetype from extension: {}", media_type));
			return media_type;
		}
	}

	ui::debug("Unable to find filetype from extension, trying file signature");
	let mut source = open();
	from_signature(&mut source)
}

/// Classify a file on disk. The file is opened only if its name is not
/// enough; failing to open it is the only error.
///
/// Names that are not valid UTF-8 are still matched by extension, with the
/// invalid bytes replaced.
pub fn detect_path(path: &Path) -> io::Result<MediaType> {
	let filename = path.file_name().map(|n| n.to_string_lossy());
	let mut open_error = None;

	let media_type = detect(filename.as_deref(), || -> Box<dyn Read> {
		match File::open(path) {
			Ok(file) => Box::new(file),
			Err(e) => {
				open_error = Some(e);
				Box::new(io::empty())
			}
		}
	});

	match open_error {
		Some(e) => Err(e),
		None => Ok(media_type),
	}
}
