//! The `convert` subcommand.
//!
//! Reads the ACL, resolves settings, translates every statement, and only
//! then writes the prefix-list. A run that fails anywhere before the write
//! leaves the destination untouched.

use std::path::PathBuf;

use acl_core::{parse_file, render, write_file, ActionPolicy};
use anyhow::{bail, Context, Result};
use tracing::info;

use crate::cli::{ConvertArgs, OutputFormat};
use crate::path_guard::ensure_writable_destination;
use acl_prefix_convert::report::render_summary;
use acl_prefix_convert::settings::{default_settings, load_settings, Settings};
use acl_prefix_convert::summary::summarize;
use acl_prefix_convert::translate::{translate, PrefixListName, Sequence, TranslateOptions};

/// Execute the `convert` subcommand.
///
/// # Errors
///
/// Returns error if:
/// - The prefix-list name is empty or contains whitespace
/// - The settings file cannot be read, parsed, or validated
/// - The destination would overwrite the input or its directory is missing
/// - The ACL file cannot be read or has no name line
/// - Any statement cannot be translated (the message names the line)
/// - The output file cannot be written
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let input = args.input.path()?.to_path_buf();
    let name = PrefixListName::new(&args.prefix_list)?;
    let settings = resolve_settings(&args)?;
    let options = TranslateOptions {
        sequence: Sequence::new(settings.start_seq, settings.seq_step)?,
        policy: settings.action_policy,
        name,
    };

    let output = if args.stdout {
        None
    } else {
        let path = destination(&args, &options.name)?;
        ensure_writable_destination(&path, &input)?;
        Some(path)
    };

    let source = parse_file(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    info!(header = %source.header, statements = source.statements.len(), "read ACL");

    let lines = translate(&source.statements, &options)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    match &output {
        Some(path) => {
            write_file(&lines, path)
                .with_context(|| format!("failed to write prefix-list {}", path.display()))?;
            info!(entries = lines.len(), output = %path.display(), "wrote prefix-list");
        }
        None => print!("{}", render(&lines)),
    }

    if args.quiet {
        return Ok(());
    }
    let summary = summarize(&lines);
    // Keep stdout clean for the prefix-list itself when printing it.
    match (args.format, args.stdout) {
        (OutputFormat::Text, false) => println!("{}", render_summary(&summary)),
        (OutputFormat::Text, true) => eprintln!("{}", render_summary(&summary)),
        (OutputFormat::Json, false) => println!("{}", serde_json::to_string_pretty(&summary)?),
        (OutputFormat::Json, true) => eprintln!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

/// Settings precedence: CLI flags, then `--settings` file, then embedded defaults.
fn resolve_settings(args: &ConvertArgs) -> Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => default_settings(),
    };
    if let Some(start) = args.start {
        if start == 0 {
            bail!("--start must be at least 1");
        }
        settings.start_seq = start;
    }
    if let Some(step) = args.step {
        if step == 0 {
            bail!("--step must be at least 1");
        }
        settings.seq_step = step;
    }
    if args.lenient {
        settings.action_policy = ActionPolicy::Lenient;
    }
    Ok(settings)
}

fn destination(args: &ConvertArgs, name: &PrefixListName) -> Result<PathBuf> {
    if let Some(path) = &args.output {
        return Ok(path.clone());
    }
    if name.as_str().contains(['/', '\\']) {
        bail!(
            "prefix-list name '{}' contains a path separator; pass --output explicitly",
            name
        );
    }
    Ok(PathBuf::from(name.as_str()))
}
