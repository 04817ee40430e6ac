//! Whole-file reads and writes for source files

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::core::error::Result;

/// Read a file as UTF-8. Invalid UTF-8 is reported as an IO error.
pub fn read_source(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Replace a file's content.
///
/// With `atomic`, the text goes to a temporary file in the same directory
/// which is then renamed over the original, so an interrupted run never
/// leaves a truncated source behind. The original permissions are kept.
/// Symlinks are followed: the link's target is replaced, not the link.
pub fn write_source(path: &Path, text: &str, atomic: bool) -> Result<()> {
    if !atomic {
        fs::write(path, text)?;
        return Ok(());
    }

    let path = fs::canonicalize(path)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&path).ok().map(|meta| meta.permissions());

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(text.as_bytes())?;
    temp.as_file().sync_all()?;
    if let Some(permissions) = permissions {
        temp.as_file().set_permissions(permissions)?;
    }
    temp.persist(&path)?;
    Ok(())
}
