use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "acl-prefix-convert")]
#[command(about = "Convert standard router ACLs into IPv4 prefix-lists")]
pub struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert an ACL file into a prefix-list file.
    Convert(ConvertArgs),
    /// Show how each ACL statement would be converted.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: AclInput,
    /// Name of the generated prefix-list.
    #[arg(short = 'p', long = "prefix-list", visible_alias = "prefixlist")]
    pub prefix_list: String,
    /// Output file path. Defaults to a file named after the prefix-list.
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,
    /// Print the prefix-list instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
    /// Optional settings TOML file (start_seq, seq_step, action_policy).
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Override the first sequence number.
    #[arg(long)]
    pub start: Option<u32>,
    /// Override the sequence number increment.
    #[arg(long)]
    pub step: Option<u32>,
    /// Use the first token of every rule line as its action, even if it is not permit/deny.
    #[arg(long)]
    pub lenient: bool,
    /// Summary output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Do not print the conversion summary.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: AclInput,
    /// Accept any first token as the action.
    #[arg(long)]
    pub lenient: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// The ACL file, given positionally or with `-f/--filename`.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct AclInput {
    /// ACL file; the first line is the ACL name and is skipped.
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// ACL file, as a flag.
    #[arg(short = 'f', long = "filename", value_name = "FILE")]
    filename: Option<PathBuf>,
}

impl AclInput {
    pub fn path(&self) -> Result<&Path> {
        self.input
            .as_deref()
            .or(self.filename.as_deref())
            .context("missing ACL file")
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
