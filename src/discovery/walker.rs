use std::path::{Path, PathBuf};

use crate::core::error::{ApifixError, Result};

/// Lazily yields every file under a root whose name ends with one of the
/// target extensions. Consumed by a single pass; build a new one to walk again.
pub struct SourceWalker {
    walk: ignore::Walk,
    suffixes: Vec<String>,
}

impl SourceWalker {
    pub fn new<P: AsRef<Path>>(root: P, extensions: &[String]) -> Result<Self> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(ApifixError::FileNotFound(root.display().to_string()));
        }
        if extensions.is_empty() {
            return Err(ApifixError::InvalidArgument(
                "At least one file extension is required".to_string(),
            ));
        }

        let mut builder = ignore::WalkBuilder::new(root);
        // Plain recursive walk: hidden and ignored files are sources too
        builder.standard_filters(false);

        Ok(Self {
            walk: builder.build(),
            suffixes: extensions.iter().map(|ext| format!(".{ext}")).collect(),
        })
    }
}

impl Iterator for SourceWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };

            let path = entry.path();
            if path.is_file() && has_target_extension(path, &self.suffixes) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}

/// Suffix check on the file name, case-sensitive
pub fn has_target_extension(path: &Path, suffixes: &[String]) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())))
}
