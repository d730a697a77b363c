//! Formatting utilities for terminal output

/// Width of the row label column for a board of `size` rows
#[must_use]
pub fn label_width(size: usize) -> usize {
    size.saturating_sub(1).to_string().len()
}

/// Column numbers printed above the board, one per cell
///
/// Columns past 9 only show their last digit so every cell stays two
/// characters wide.
#[must_use]
pub fn column_header(size: usize) -> String {
    let digits: Vec<String> = (0..size).map(|col| (col % 10).to_string()).collect();
    format!("{} {}", " ".repeat(label_width(size)), digits.join(" "))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
