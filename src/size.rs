//! Human-readable byte sizes

const UNITS: [&str; 8] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB"];

/// Format a size in bytes using binary (1024) steps and two decimals.
///
/// `214` becomes `"214.00 B"`, `1536` becomes `"1.50 KB"`.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut level = 0;
    while size >= 1024.0 && level < UNITS.len() - 1 {
        size /= 1024.0;
        level += 1;
    }
    format!("{:.2} {}", size, UNITS[level])
}
