//! Table formatting utilities for CLI output.

use sliceby_core::{DataPanelRows, SliceByAggregation, SliceByInfo, SliceKey};

/// Widest a rendered cell may get before it is truncated.
const MAX_CELL_WIDTH: usize = 24;

/// Truncates a string to a maximum length, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use sliceby_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Render a JSON cell for table display.
///
/// Strings are shown without quotes and `null` as `--`.
pub fn format_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "--".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn key_kind(key: &SliceKey) -> &'static str {
    match key {
        SliceKey::Number(_) => "number",
        SliceKey::Label(_) => "label",
    }
}

/// Join rendered lines, ending every line with a newline.
fn finish(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Render a slice-by summary with one line per slice.
pub fn render_info(info: &SliceByInfo) -> String {
    let mut lines = vec![
        format!("Slice-by {} ({})", info.id, info.kind),
        format!("{} slice(s)", info.n_slices),
    ];
    if !info.is_consistent() {
        lines.push(format!(
            "warning: server reported {} slices but sent {} keys",
            info.n_slices,
            info.slice_keys.len()
        ));
    }

    if !info.slice_keys.is_empty() {
        lines.push(String::new());
        lines.push(format!("{:<6} {:<6} Key", "#", "Kind"));
        lines.extend(
            info.slice_keys
                .iter()
                .enumerate()
                .map(|(position, key)| format!("{:<6} {:<6} {}", position, key_kind(key), key)),
        );
    }
    finish(&lines)
}

fn pad_cell(text: &str) -> String {
    format!("{:<w$}", truncate_string(text, MAX_CELL_WIDTH), w = MAX_CELL_WIDTH)
}

/// Render a row window as a fixed-width table.
pub fn render_rows(rows: &DataPanelRows) -> String {
    if rows.column_infos.is_empty() {
        return finish(&[format!(
            "No columns returned ({} total rows).",
            rows.full_length
        )]);
    }

    let header: Vec<String> = rows.column_infos.iter().map(|c| pad_cell(&c.name)).collect();
    let mut lines = vec![
        header.join(" ").trim_end().to_string(),
        "-".repeat((MAX_CELL_WIDTH + 1) * rows.column_infos.len() - 1),
    ];

    for row in &rows.rows {
        let cells: Vec<String> = row.iter().map(|cell| pad_cell(&format_cell(cell))).collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }

    lines.push(String::new());
    lines.push(format!("Showing {} of {} row(s)", rows.len(), rows.full_length));
    finish(&lines)
}

/// Render aggregation results as `name: value` lines.
pub fn render_aggregation(result: &SliceByAggregation) -> String {
    if result.is_empty() {
        return "No aggregation results.\n".to_string();
    }

    let lines: Vec<String> = result
        .iter()
        .map(|(name, value)| format!("{name}: {}", format_cell(value)))
        .collect();
    finish(&lines)
}
