// lesson-lint/src/discover.rs

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::error::{LintError, Result};

/// Build a GlobSet from exclude patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p).map_err(|source| LintError::Glob { pattern: p.clone(), source })?);
    }
    b.build().map_err(|source| LintError::Glob { pattern: patterns.join(","), source })
}

fn is_lesson_file(path: &Path) -> bool {
    path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.ends_with(".json"))
}

/// What a walk found: lesson files, sorted, plus directories it could not
/// read. An unreadable directory only hides its own subtree.
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    pub unreadable: Vec<walkdir::Error>,
}

/// Every `*.json` file under `root` at any depth, sorted by path. Files whose
/// root-relative path matches one of `exclude` are left out. Symlinks are not
/// followed; one that points at a directory is never a lesson file.
pub fn lesson_files(root: &Path, exclude: &[String]) -> Result<Discovery> {
    if !root.is_dir() { return Err(LintError::MissingRoot(root.to_path_buf())); }
    let excluded = build_globset(exclude)?;

    let mut found = Discovery::default();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "skipping unreadable path");
                found.unreadable.push(e);
                continue;
            }
        };
        let p = entry.path();
        if entry.file_type().is_dir() || !is_lesson_file(p) { continue; }
        if entry.path_is_symlink() && p.is_dir() { continue; }
        let rel = p.strip_prefix(root).unwrap_or(p);
        if excluded.is_match(rel) {
            trace!(path = %rel.display(), "excluded");
            continue;
        }
        found.files.push(p.to_path_buf());
    }
    found.files.sort();
    debug!(root = %root.display(), count = found.files.len(), unreadable = found.unreadable.len(), "discovered lesson files");
    Ok(found)
}
