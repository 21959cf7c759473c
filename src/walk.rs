use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Build a directory walker that visits every entry under `path`.
///
/// Ignore files and hidden-file filtering are disabled: a scanned tree is
/// counted exactly as it sits on disk. Entries are sorted by file name so two
/// walks of the same tree yield the same order.
pub fn walk(path: &Path) -> ignore::Walk {
    WalkBuilder::new(path)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
}

/// Check whether a file has the given extension (exact, case-sensitive).
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}

/// Collect every regular file under `root` with extension `ext`.
///
/// Walk errors (unreadable directories, broken entries) are reported as
/// warnings and skipped. A missing root yields an empty list.
pub fn files_with_extension(root: &Path, ext: &str) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in walk(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if has_extension(entry.path(), ext) {
            files.push(entry.into_path());
        }
    }
    files
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
