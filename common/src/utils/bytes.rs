const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
const STEP: f64 = 1024.0;

/// Formats a byte count with two decimals in binary units.
///
/// The value is promoted only while it is strictly greater than 1024, so exactly
/// 1024 bytes stays `"1024.00 B"`.
pub fn format_bytes(bytes: u64) -> String {
    let mut size: f64 = bytes as f64;
    let mut unit: usize = 0;
    while size > STEP && unit < UNITS.len() - 1 {
        size /= STEP;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}
