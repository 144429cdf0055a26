use std::fmt::{self, Display, Formatter};
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::wildcard::{Ipv4Prefix, WildcardError};

const ANY: &str = "any";
const REMARK: &str = "remark";

/// Errors raised while classifying a single ACL statement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    /// The line had no tokens at all.
    #[error("empty statement")]
    Empty,
    /// A positional field required by the statement shape was absent.
    #[error("missing {0}")]
    MissingField(&'static str),
    /// Token 0 was neither `permit` nor `deny` under the strict policy.
    #[error("unknown action '{0}', expected permit or deny")]
    UnknownAction(String),
    /// The address field was not a dotted-quad IPv4 address.
    #[error("invalid IPv4 address '{0}'")]
    InvalidAddress(String),
    /// The wildcard field was not a dotted-quad IPv4 mask.
    #[error("invalid wildcard mask '{0}'")]
    InvalidMask(String),
    /// The wildcard field parsed but is not an inverted subnet mask.
    #[error(transparent)]
    Wildcard(#[from] WildcardError),
}

/// How token 0 of a rule line is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPolicy {
    /// Only `permit` and `deny` are accepted.
    #[default]
    Strict,
    /// Token 0 is used verbatim, whatever it is.
    Lenient,
}

/// The action of a rule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Permit,
    Deny,
    /// Any other keyword, only produced by [`ActionPolicy::Lenient`].
    Other(String),
}

impl Action {
    /// Parse token 0 of a rule line according to `policy`.
    pub fn parse(token: &str, policy: ActionPolicy) -> Result<Self, StatementError> {
        match (token, policy) {
            ("permit", _) => Ok(Action::Permit),
            ("deny", _) => Ok(Action::Deny),
            (other, ActionPolicy::Lenient) => Ok(Action::Other(other.to_string())),
            (other, ActionPolicy::Strict) => {
                Err(StatementError::UnknownAction(other.to_string()))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Permit => "permit",
            Action::Deny => "deny",
            Action::Other(token) => token,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A classified ACL statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AclStatement {
    /// A rule carrying the `any` keyword; always matches `0.0.0.0/0`.
    Any { action: Action },
    /// A comment line, carried through untouched.
    Remark,
    /// An `address wildcard` rule.
    Network {
        action: Action,
        address: Ipv4Addr,
        prefix: Ipv4Prefix,
    },
}

impl AclStatement {
    pub fn action(&self) -> Option<&Action> {
        match self {
            AclStatement::Any { action } | AclStatement::Network { action, .. } => Some(action),
            AclStatement::Remark => None,
        }
    }

    /// The network this statement matches, if it is a rule.
    pub fn prefix(&self) -> Option<Ipv4Prefix> {
        match self {
            AclStatement::Any { .. } => Some(Ipv4Prefix::any()),
            AclStatement::Network { prefix, .. } => Some(*prefix),
            AclStatement::Remark => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AclStatement::Any { .. } => "any",
            AclStatement::Remark => "remark",
            AclStatement::Network { .. } => "network",
        }
    }
}

/// Classify one ACL statement line.
///
/// A line starting with `remark` is a bare comment. Otherwise a whole-token
/// `any` anywhere on the line makes it a match-all rule, then a `remark`
/// token anywhere makes it a comment, and any remaining line must be
/// `<action> <address> <wildcard> [...]`. Tokens after the wildcard are
/// ignored.
pub fn classify(text: &str, policy: ActionPolicy) -> Result<AclStatement, StatementError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Err(StatementError::Empty);
    };

    if *first == REMARK {
        return Ok(AclStatement::Remark);
    }

    if tokens.contains(&ANY) {
        let action = Action::parse(first, policy)?;
        return Ok(AclStatement::Any { action });
    }

    if tokens.contains(&REMARK) {
        return Ok(AclStatement::Remark);
    }

    let action = Action::parse(first, policy)?;

    let raw_address = tokens.get(1).ok_or(StatementError::MissingField("address"))?;
    let raw_mask = tokens
        .get(2)
        .ok_or(StatementError::MissingField("wildcard mask"))?;

    let address: Ipv4Addr = raw_address
        .parse()
        .map_err(|_| StatementError::InvalidAddress(raw_address.to_string()))?;
    let wildcard: Ipv4Addr = raw_mask
        .parse()
        .map_err(|_| StatementError::InvalidMask(raw_mask.to_string()))?;
    let prefix = Ipv4Prefix::from_wildcard(address, wildcard)?;

    Ok(AclStatement::Network {
        action,
        address,
        prefix,
    })
}
