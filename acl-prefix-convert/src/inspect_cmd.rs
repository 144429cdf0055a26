use acl_core::{parse_file, ActionPolicy};
use acl_prefix_convert::inspect::inspect_statements;
use acl_prefix_convert::report::{render_inspection, render_inspection_totals};
use anyhow::{bail, Context, Result};

use crate::cli::{InspectArgs, OutputFormat};

pub fn run_inspect(args: InspectArgs) -> Result<()> {
    let input = args.input.path()?;
    let source =
        parse_file(input).with_context(|| format!("failed to read {}", input.display()))?;
    let policy = if args.lenient {
        ActionPolicy::Lenient
    } else {
        ActionPolicy::Strict
    };
    let rows = inspect_statements(&source.statements, policy);

    match args.format {
        OutputFormat::Text => {
            println!("acl {}", source.header);
            if !rows.is_empty() {
                println!("{}", render_inspection(&rows));
            }
            println!("{}", render_inspection_totals(&rows));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    let invalid = rows.iter().filter(|row| row.is_error()).count();
    if invalid > 0 {
        bail!("{invalid} statement(s) cannot be converted");
    }
    Ok(())
}
