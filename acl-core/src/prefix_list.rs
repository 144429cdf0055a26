use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::statement::Action;
use crate::wildcard::Ipv4Prefix;

/// Upper bound used for the `le` clause of every generated entry.
pub const MAX_PREFIX_LEN: u8 = 32;

/// A sequenced `ip prefix-list` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixListEntry {
    pub name: String,
    pub seq: u32,
    pub action: Action,
    pub prefix: Ipv4Prefix,
    pub le: u8,
}

impl PrefixListEntry {
    /// Build an entry matching `prefix` and every longer prefix inside it.
    pub fn new(name: impl Into<String>, seq: u32, action: Action, prefix: Ipv4Prefix) -> Self {
        Self {
            name: name.into(),
            seq,
            action,
            prefix,
            le: MAX_PREFIX_LEN,
        }
    }
}

impl Display for PrefixListEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ip prefix-list {} seq {} {} {} le {}",
            self.name, self.seq, self.action, self.prefix, self.le
        )
    }
}

/// One line of prefix-list output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PrefixListLine {
    Entry(PrefixListEntry),
    /// A remark copied verbatim from the ACL.
    Remark(String),
}

impl PrefixListLine {
    pub fn seq(&self) -> Option<u32> {
        match self {
            PrefixListLine::Entry(entry) => Some(entry.seq),
            PrefixListLine::Remark(_) => None,
        }
    }
}

impl Display for PrefixListLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PrefixListLine::Entry(entry) => entry.fmt(f),
            PrefixListLine::Remark(text) => f.write_str(text),
        }
    }
}
