use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::prefix_list::PrefixListLine;

/// Errors that can occur while writing prefix-list output.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write output file.
    #[error("failed to write prefix-list file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render prefix-list lines as text, one newline-terminated line each.
pub fn render(lines: &[PrefixListLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// Render prefix-list lines and write them to `path` in a single write.
pub fn write_file(lines: &[PrefixListLine], path: &Path) -> Result<(), WriteError> {
    fs::write(path, render(lines))?;
    Ok(())
}
