use colored::Colorize;

use crate::inspect::InspectRow;
use crate::summary::{render as render_summary_line, ConversionSummary};

/// Render inspection rows for terminal output.
pub fn render_inspection(rows: &[InspectRow]) -> String {
    let mut out = Vec::new();
    for row in rows {
        let line = match (&row.error, row.kind.as_str()) {
            (Some(err), _) => format!("line {:>4} INVALID {err}: {}", row.line, row.text)
                .red()
                .to_string(),
            (None, "remark") => format!("line {:>4} REMARK  {}", row.line, row.text)
                .dimmed()
                .to_string(),
            (None, kind) => {
                let label = format!(
                    "line {:>4} {:<7} {} {}",
                    row.line,
                    kind.to_uppercase(),
                    row.action.as_deref().unwrap_or("-"),
                    row.network.as_deref().unwrap_or("-"),
                );
                if kind == "any" {
                    label.yellow().to_string()
                } else {
                    label.green().to_string()
                }
            }
        };
        out.push(line);
    }
    out.join("\n")
}

/// Render the count of convertible and invalid statements.
pub fn render_inspection_totals(rows: &[InspectRow]) -> String {
    let invalid = rows.iter().filter(|row| row.is_error()).count();
    let text = format!("inspect_summary statements={} invalid={invalid}", rows.len());
    if invalid > 0 {
        text.red().to_string()
    } else {
        text.cyan().to_string()
    }
}

/// Render the post-conversion summary line.
pub fn render_summary(summary: &ConversionSummary) -> String {
    render_summary_line(summary).cyan().to_string()
}
