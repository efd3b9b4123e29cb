// Resolution and ffprobe output parsing

use image::{ImageBuffer, Rgb};

use mediasniff::probe::{self, parse_probe_output, Resolution};
use mediasniff::MediaType;

#[test]
fn image_resolution_from_generated_png() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("pixel.png");
	ImageBuffer::from_pixel(7, 3, Rgb([255u8, 0, 0])).save(&path).unwrap();

	let res = probe::resolution(&path, MediaType::Png).unwrap();
	assert_eq!(res, Resolution::new(7, 3));
	assert_eq!(res.to_string(), "7x3");
}

#[test]
fn corrupt_image_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("broken.png");
	std::fs::write(&path, b"not a png at all").unwrap();
	assert!(probe::resolution(&path, MediaType::Png).is_err());
}

#[test]
fn unreadable_video_has_zero_resolution() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("garbage.avi");
	std::fs::write(&path, b"RIFF....AVI LIST").unwrap();
	assert_eq!(probe::resolution(&path, MediaType::Avi).unwrap(), Resolution::ZERO);
}

#[test]
fn probe_combines_type_size_and_resolution() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("upload");
	ImageBuffer::from_pixel(4, 5, Rgb([0u8, 0, 255]))
		.save_with_format(&path, image::ImageFormat::Png)
		.unwrap();

	let info = probe::probe(&path).unwrap();
	assert_eq!(info.media_type, MediaType::Png);
	assert_eq!(info.resolution, Some(Resolution::new(4, 5)));
	assert_eq!(info.size_bytes, std::fs::metadata(&path).unwrap().len());
	assert_eq!(info.duration_ms, None);
}

#[test]
fn probe_unknown_file_has_no_resolution() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("notes.txt");
	std::fs::write(&path, b"hello").unwrap();

	let info = probe::probe(&path).unwrap();
	assert_eq!(info.media_type, MediaType::Unknown);
	assert_eq!(info.resolution, None);
	assert_eq!(info.size_bytes, 5);
}

#[test]
fn parse_ffprobe_json() {
	let json = br#"{
		"streams": [
			{ "codec_type": "audio" },
			{ "codec_type": "video", "width": 1920, "height": 1080, "r_frame_rate": "30/1" }
		],
		"format": { "duration": "12.345000" }
	}"#;

	let parsed = parse_probe_output(json).unwrap();
	assert_eq!(parsed.width, 1920);
	assert_eq!(parsed.height, 1080);
	assert_eq!(parsed.duration_secs, Some(12.345));
}

#[test]
fn parse_ffprobe_json_without_video_stream() {
	let json = br#"{ "streams": [ { "codec_type": "audio" } ], "format": {} }"#;
	assert!(parse_probe_output(json).is_err());
	assert!(parse_probe_output(b"not json").is_err());
}

#[test]
fn parse_ffprobe_json_bad_duration() {
	let json = br#"{
		"streams": [ { "codec_type": "video", "width": 640, "height": 480 } ],
		"format": { "duration": "N/A" }
	}"#;
	let parsed = parse_probe_output(json).unwrap();
	assert_eq!(parsed.duration_secs, None);
}

#[test]
fn duration_only_for_videos() {
	let dir = tempfile::tempdir().unwrap();

	let image_path = dir.path().join("still.png");
	ImageBuffer::from_pixel(2, 2, Rgb([0u8, 255, 0])).save(&image_path).unwrap();
	assert_eq!(probe::duration_ms(&image_path), None);

	let garbage = dir.path().join("garbage.bin");
	std::fs::write(&garbage, b"\x00\x01\x02 nothing to see").unwrap();
	assert_eq!(probe::duration_ms(&garbage), None);

	let broken_video = dir.path().join("broken.mkv");
	std::fs::write(&broken_video, b"\x1A\x45\xDF\xA3 truncated").unwrap();
	assert_eq!(probe::duration_ms(&broken_video), None);

	assert_eq!(probe::duration_ms(&dir.path().join("missing.bin")), None);
}
