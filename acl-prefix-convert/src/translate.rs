//! ACL statement to prefix-list translation.
//!
//! The translator walks ACL statements in source order and emits one
//! prefix-list line per statement:
//!
//! - `<action> ... any` becomes `ip prefix-list NAME seq N <action> 0.0.0.0/0 le 32`
//! - `<action> <address> <wildcard>` becomes the same with the CIDR network
//! - `remark ...` lines are copied through and take no sequence number
//!
//! The sequence counter is an explicit [`Sequence`] value. Each call to
//! [`translate_statement`] takes the current value and returns the next one,
//! so a run never shares counter state with another run.

use std::fmt::{self, Display, Formatter};

use acl_core::{
    classify, AclLine, AclStatement, ActionPolicy, Ipv4Prefix, PrefixListEntry, PrefixListLine,
    StatementError,
};
use thiserror::Error;
use tracing::debug;

/// First sequence number of a prefix-list.
pub const DEFAULT_START_SEQ: u32 = 10;
/// Gap between consecutive sequence numbers.
pub const DEFAULT_SEQ_STEP: u32 = 5;

/// Errors that abort a translation run.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A statement could not be classified.
    #[error("line {line}: {source}: `{text}`")]
    Line {
        line: usize,
        text: String,
        source: StatementError,
    },
    /// The counter ran past `u32::MAX` before the last rule.
    #[error("line {line}: sequence number would exceed {}", u32::MAX)]
    SequenceOverflow { line: usize },
    /// The prefix-list name cannot appear in a router statement.
    #[error("invalid prefix-list name '{0}': must be non-empty and contain no whitespace")]
    InvalidName(String),
    /// A zero step would repeat sequence numbers.
    #[error("sequence step must be at least 1")]
    ZeroStep,
}

/// A validated prefix-list name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixListName(String);

impl PrefixListName {
    pub fn new(name: &str) -> Result<Self, TranslateError> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(TranslateError::InvalidName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PrefixListName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The next sequence number to hand out, plus the step between numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    next: Option<u32>,
    step: u32,
}

impl Sequence {
    pub fn new(start: u32, step: u32) -> Result<Self, TranslateError> {
        if step == 0 {
            return Err(TranslateError::ZeroStep);
        }
        Ok(Self {
            next: Some(start),
            step,
        })
    }

    /// The number the next rule will receive; `None` once exhausted.
    pub fn peek(&self) -> Option<u32> {
        self.next
    }

    fn advance(self) -> Self {
        Self {
            next: self.next.and_then(|n| n.checked_add(self.step)),
            step: self.step,
        }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self {
            next: Some(DEFAULT_START_SEQ),
            step: DEFAULT_SEQ_STEP,
        }
    }
}

/// Parameters of one translation run.
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub name: PrefixListName,
    pub sequence: Sequence,
    pub policy: ActionPolicy,
}

impl TranslateOptions {
    pub fn new(name: PrefixListName) -> Self {
        Self {
            name,
            sequence: Sequence::default(),
            policy: ActionPolicy::default(),
        }
    }
}

/// Translate ACL statements into prefix-list lines, in order.
///
/// Stops at the first statement that cannot be translated; nothing is
/// returned for a failed run.
pub fn translate(
    lines: &[AclLine],
    options: &TranslateOptions,
) -> Result<Vec<PrefixListLine>, TranslateError> {
    let mut seq = options.sequence;
    let mut out = Vec::with_capacity(lines.len());

    for line in lines {
        let (emitted, next) = translate_statement(line, &options.name, options.policy, seq)?;
        debug!(line = line.number, seq = ?emitted.seq(), "{}", emitted);
        out.push(emitted);
        seq = next;
    }

    Ok(out)
}

/// Translate one statement using sequence number `seq`.
///
/// Returns the emitted line and the sequence to use for the following
/// statement. Remarks return `seq` unchanged.
pub fn translate_statement(
    line: &AclLine,
    name: &PrefixListName,
    policy: ActionPolicy,
    seq: Sequence,
) -> Result<(PrefixListLine, Sequence), TranslateError> {
    let statement = classify(&line.text, policy).map_err(|source| TranslateError::Line {
        line: line.number,
        text: line.text.clone(),
        source,
    })?;

    let (action, prefix) = match statement {
        AclStatement::Remark => return Ok((PrefixListLine::Remark(line.text.clone()), seq)),
        AclStatement::Any { action } => (action, Ipv4Prefix::any()),
        AclStatement::Network {
            action,
            address,
            prefix,
        } => {
            if prefix.truncated_from(address) {
                debug!(
                    line = line.number,
                    "address {address} has host bits set; using network {prefix}"
                );
            }
            (action, prefix)
        }
    };

    let number = seq
        .peek()
        .ok_or(TranslateError::SequenceOverflow { line: line.number })?;
    let entry = PrefixListEntry::new(name.as_str(), number, action, prefix);
    Ok((PrefixListLine::Entry(entry), seq.advance()))
}
