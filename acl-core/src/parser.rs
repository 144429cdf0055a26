use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while reading an ACL source.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Failed to read the input file (including non-UTF-8 content).
    #[error("failed to read ACL file: {0}")]
    Io(#[from] std::io::Error),
    /// The input had no lines, so there is no ACL name line to strip.
    #[error("ACL source is empty; expected a name line before the statements")]
    MissingHeader,
}

/// One ACL statement with its 1-based line number in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AclLine {
    pub number: usize,
    pub text: String,
}

impl AclLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Number bare statements consecutively from line 1.
    pub fn numbered<I, S>(lines: I) -> Vec<AclLine>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(idx, text)| AclLine::new(idx + 1, text))
            .collect()
    }
}

/// A standard ACL split into its name line and statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AclSource {
    /// The first line of the source, e.g. `ip access-list standard EDGE`.
    pub header: String,
    /// Remaining non-blank lines, trimmed, in source order.
    pub statements: Vec<AclLine>,
}

/// Split ACL text into a header and statements.
///
/// Statement lines are trimmed of surrounding whitespace. Blank lines are
/// dropped but still count towards line numbers.
pub fn parse(text: &str) -> Result<AclSource, ParseError> {
    let mut lines = text.lines().enumerate();
    let (_, header) = lines.next().ok_or(ParseError::MissingHeader)?;

    let statements = lines
        .filter_map(|(idx, raw)| {
            let trimmed = raw.trim();
            (!trimmed.is_empty()).then(|| AclLine::new(idx + 1, trimmed))
        })
        .collect();

    Ok(AclSource {
        header: header.trim().to_string(),
        statements,
    })
}

/// Read and split an ACL file.
pub fn parse_file(path: &Path) -> Result<AclSource, ParseError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}
