//! Human-readable size formatting.
//!
//! Input sizes are kilobytes (`du -k`). Scaling uses a 1024 divisor with
//! two decimal places above the KB range, matching classic `du`/`ls -h`
//! binary units.

const KB_PER_MB: f64 = 1024.0;
const KB_PER_GB: f64 = 1024.0 * 1024.0;
const KB_PER_TB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Format a kilobyte count as a short human-readable string.
#[allow(clippy::cast_precision_loss)]
pub fn human_size(size_kb: u64) -> String {
    if size_kb < 1024 {
        format!("{size_kb} KB")
    } else if (size_kb as f64) < KB_PER_GB {
        format!("{:.2} MB", size_kb as f64 / KB_PER_MB)
    } else if (size_kb as f64) < KB_PER_TB {
        format!("{:.2} GB", size_kb as f64 / KB_PER_GB)
    } else {
        format!("{:.2} TB", size_kb as f64 / KB_PER_TB)
    }
}
