//! Signature phase: classify by leading magic bytes

use std::fmt::Write as _;

use super::ByteSource;
use crate::config::SIGNATURE_WINDOW;
use crate::core::MediaType;

/// Expected bytes at a fixed offset from the start of the file
struct Magic {
	offset: usize,
	bytes: &'static [u8],
}

impl Magic {
	const fn at(offset: usize, bytes: &'static [u8]) -> Self {
		Self { offset, bytes }
	}

	/// A window too short to hold the pattern never matches.
	fn matches(&self, window: &[u8]) -> bool {
		window
			.get(self.offset..self.offset + self.bytes.len())
			.is_some_and(|slice| slice == self.bytes)
	}
}

/// Checked in order, every magic of a rule must match.
///
/// MKV and WEBM share the EBML header `1A 45 DF A3`; without an extension
/// there is nothing to tell them apart, so it is reported as MKV.
const SIGNATURES: &[(&[Magic], MediaType)] = &[
	(&[Magic::at(0, &[0xFF, 0xD8, 0xFF])], MediaType::Jpeg),
	(
		&[Magic::at(0, &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])],
		MediaType::Png,
	),
	(&[Magic::at(0, b"GIF8")], MediaType::Gif),
	(&[Magic::at(4, b"ftyp")], MediaType::Mp4),
	(&[Magic::at(0, &[0x1A, 0x45, 0xDF, 0xA3])], MediaType::Mkv),
	(&[Magic::at(0, b"RIFF"), Magic::at(8, b"AVI ")], MediaType::Avi),
];

/// Read the signature window from the start of `source`. May be shorter
/// than [`SIGNATURE_WINDOW`] for tiny or unreadable files.
pub fn read_window<S: ByteSource + ?Sized>(source: &mut S) -> Vec<u8> {
	let mut window = vec![0u8; SIGNATURE_WINDOW];
	let n = source.read_prefix(&mut window);
	window.truncate(n);
	window
}

/// Classify an already-read window of leading bytes.
pub fn match_signature(window: &[u8]) -> MediaType {
	SIGNATURES
		.iter()
		.find(|(magics, _)| magics.iter().all(|magic| magic.matches(window)))
		.map(|&(_, media_type)| media_type)
		.unwrap_or(MediaType::Unknown)
}

/// Read the leading bytes of `source` and classify them.
pub fn from_signature<S: ByteSource + ?Sized>(source: &mut S) -> MediaType {
	let window = read_window(source);
	let media_type = match_signature(&window);

	if media_type.is_known() {
		crate::ui::debug(&format!(
			"Found filetype from signature {}: {}",
			signature_hex(&window),
			media_type
		));
	} else {
		crate::ui::debug(&format!(
			"Unable to find filetype from signature {}",
			signature_hex(&window)
		));
	}

	media_type
}

/// Uppercase hex rendering, e.g. `[0x89, 0x50]` -> `"8950"`.
pub fn signature_hex(bytes: &[u8]) -> String {
	bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, byte| {
		let _ = write!(out, "{:02X}", byte);
		out
	})
}
