//! Plain-text rendering of session snapshots.

use lcdsim_core::{Command, CommandRecord, DebugLevel};
use lcdsim_session::SessionSnapshot;

/// Render the emulated panel with a box border and cursor position.
pub fn render_panel(snapshot: &SessionSnapshot) -> String {
    let cols = snapshot.dimensions.cols as usize;
    let horizontal = "─".repeat(cols);

    let mut out = String::new();
    out.push_str(&format!("┌{horizontal}┐\n"));
    for line in &snapshot.lines {
        out.push_str(&format!("│{line}│\n"));
    }
    out.push_str(&format!("└{horizontal}┘\n"));
    out.push_str(&format!(
        "cursor at ({}, {})",
        snapshot.cursor.row, snapshot.cursor.col
    ));
    out
}

/// Render the debug log, one line per entry.
pub fn render_debug_log(snapshot: &SessionSnapshot) -> String {
    let mut out = String::from("Debug Infos\n");
    if snapshot.debug.is_empty() {
        out.push_str("  (no debug messages received)");
        return out;
    }

    let lines: Vec<String> = snapshot
        .debug
        .iter()
        .map(|record| format!("  {}", render_debug_entry(record)))
        .collect();
    out.push_str(&lines.join("\n"));
    out
}

/// Render the display-command log, one line per entry.
pub fn render_display_log(snapshot: &SessionSnapshot) -> String {
    let mut out = String::from("Display Commands\n");
    if snapshot.display.is_empty() {
        out.push_str("  (no display commands received)");
        return out;
    }

    let lines: Vec<String> = snapshot
        .display
        .iter()
        .map(|record| {
            format!(
                "  {} {}",
                record.received_at.format("%H:%M:%S"),
                record.command.name()
            )
        })
        .collect();
    out.push_str(&lines.join("\n"));
    out
}

fn render_debug_entry(record: &CommandRecord) -> String {
    let time = record.received_at.format("%H:%M:%S");
    match &record.command {
        Command::DebugText { text, level } => {
            let marker = match level {
                DebugLevel::Normal => "",
                DebugLevel::Error => "✘ ",
                DebugLevel::Ok => "✔ ",
            };
            format!("{time} {marker}{text}")
        }
        Command::DebugNumber {
            label,
            value,
            format,
        } => format!("{time} {label} = {}", format.render(*value)),
        // Only debug commands reach the debug log
        other => format!("{time} {}", other.name()),
    }
}
