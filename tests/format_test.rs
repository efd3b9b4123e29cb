// Human-readable size and duration formatting

use mediasniff::core::{bytes_to_human, millis_to_microwave};

#[test]
fn bytes_below_one_kibibyte() {
	assert_eq!(bytes_to_human(0), "0 B");
	assert_eq!(bytes_to_human(1), "1 B");
	assert_eq!(bytes_to_human(1023), "1023 B");
}

#[test]
fn bytes_with_binary_units() {
	assert_eq!(bytes_to_human(1024), "1.0 KiB");
	assert_eq!(bytes_to_human(1536), "1.5 KiB");
	assert_eq!(bytes_to_human(1_048_576), "1.0 MiB");
	assert_eq!(bytes_to_human(5 * 1024 * 1024 + 512 * 1024), "5.5 MiB");
	assert_eq!(bytes_to_human(1 << 30), "1.0 GiB");
	assert_eq!(bytes_to_human(1 << 40), "1.0 TiB");
}

#[test]
fn bytes_beyond_tebibytes_stay_in_tib() {
	assert_eq!(bytes_to_human(1 << 50), "1024.0 TiB");
	assert!(bytes_to_human(u64::MAX).ends_with(" TiB"));
}

#[test]
fn durations_under_an_hour_omit_hours() {
	assert_eq!(millis_to_microwave(0), "00:00");
	assert_eq!(millis_to_microwave(999), "00:00");
	assert_eq!(millis_to_microwave(5_000), "00:05");
	assert_eq!(millis_to_microwave(65_000), "01:05");
	assert_eq!(millis_to_microwave(3_599_999), "59:59");
}

#[test]
fn durations_with_hours() {
	assert_eq!(millis_to_microwave(3_600_000), "01:00:00");
	assert_eq!(millis_to_microwave(3_725_000), "01:02:05");
	assert_eq!(millis_to_microwave(36_000_000), "10:00:00");
}
