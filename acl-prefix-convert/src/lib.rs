//! Standard ACL to IPv4 prefix-list conversion.
//!
//! Router configurations often express the same set of networks twice: once
//! as a standard access-list for packet filtering and once as a prefix-list
//! for route filtering. This library turns the former into the latter.
//!
//! # Architecture
//!
//! - [`translate`] — statement-by-statement translation with an explicit
//!   sequence counter
//! - [`settings`] — TOML settings (sequence start/step, action policy)
//! - [`inspect`] — per-line classification for diagnostics
//! - [`summary`] — post-conversion counts
//! - [`report`] — terminal rendering
//!
//! # Examples
//!
//! ```
//! use acl_core::parse;
//! use acl_prefix_convert::translate::{translate, PrefixListName, TranslateOptions};
//!
//! let source = parse("EDGE\npermit 192.168.1.0 0.0.0.255\n").unwrap();
//! let options = TranslateOptions::new(PrefixListName::new("PL-EDGE").unwrap());
//! let lines = translate(&source.statements, &options).unwrap();
//! assert_eq!(
//!     lines[0].to_string(),
//!     "ip prefix-list PL-EDGE seq 10 permit 192.168.1.0/24 le 32"
//! );
//! ```
//!
//! # Built on acl-core
//!
//! Parsing, wildcard arithmetic, and the prefix-list text format live in
//! `acl-core`; this crate owns sequencing, settings, and reporting.

pub mod inspect;
pub mod report;
pub mod settings;
pub mod summary;
pub mod translate;
