//! Human-readable sizes and durations

const SIZE_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Format a byte count with binary units, e.g. `1536` -> `"1.5 KiB"`.
///
/// Anything at or above 1 PiB stays in TiB.
pub fn bytes_to_human(bytes: u64) -> String {
	if bytes < 1024 {
		return format!("{} {}", bytes, SIZE_UNITS[0]);
	}

	let mut value = bytes as f64;
	let mut unit = 0;
	while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
		value /= 1024.0;
		unit += 1;
	}
	format!("{:.1} {}", value, SIZE_UNITS[unit])
}

/// Format milliseconds as a microwave-style clock: `MM:SS`, or `HH:MM:SS`
/// once there is at least one hour.
///
/// The hour field is taken modulo 60 like the other two, so it wraps past
/// 59 hours.
pub fn millis_to_microwave(millis: u64) -> String {
	let mut remainder = millis / 1000;
	let mut fields = Vec::with_capacity(3);

	for position in 0..3 {
		let unit = remainder % 60;
		remainder /= 60;
		if position == 2 && unit == 0 {
			break;
		}
		fields.push(format!("{:02}", unit));
	}

	fields.reverse();
	fields.join(":")
}
