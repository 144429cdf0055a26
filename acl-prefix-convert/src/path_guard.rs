use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Refuse destinations that would clobber the ACL being read or that are
/// directories.
pub fn ensure_writable_destination(output: &Path, input: &Path) -> Result<()> {
    if output.is_dir() {
        bail!("output {} is a directory", output.display());
    }

    let out_resolved = resolve(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;
    let in_resolved = resolve(input)
        .with_context(|| format!("failed to resolve input path {}", input.display()))?;

    if out_resolved == in_resolved {
        bail!(
            "refusing to overwrite source file: output {} matches input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

/// Resolve `path` to an absolute form comparable with another resolved path.
///
/// A path that does not exist yet is resolved through its parent directory,
/// which must exist for the later write to succeed anyway.
fn resolve(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    let file_name = path
        .file_name()
        .with_context(|| format!("{} has no file name", path.display()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().context("current_dir")?,
    };
    let parent = parent
        .canonicalize()
        .with_context(|| format!("directory {} does not exist", parent.display()))?;

    Ok(parent.join(file_name))
}
