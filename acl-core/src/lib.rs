//! Standard ACL parsing and prefix-list primitives used by higher-level tools.

pub mod parser;
pub mod prefix_list;
pub mod statement;
pub mod wildcard;
pub mod writer;

pub use parser::{parse, parse_file, AclLine, AclSource, ParseError};
pub use prefix_list::{PrefixListEntry, PrefixListLine, MAX_PREFIX_LEN};
pub use statement::{classify, AclStatement, Action, ActionPolicy, StatementError};
pub use wildcard::{prefix_len_from_wildcard, Ipv4Prefix, WildcardError};
pub use writer::{render, write_file, WriteError};
