//! File scanner: walks a source or test tree and summarizes each file.
//!
//! Every file with the language's extension is read once, its declared
//! types and methods are extracted, and its non-blank lines counted.
//! Unreadable files are reported and left out; they never abort a scan.

pub mod extract;

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::walk;
use extract::{count_non_blank_lines, extract_methods, extract_types};

/// Source language conventions used to locate and name files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// File extension without the dot.
    pub extension: &'static str,
    /// Directory under `src/main` and `src/test` holding the sources.
    pub source_dir: &'static str,
}

pub const JAVA: Language = Language {
    extension: "java",
    source_dir: "java",
};

/// Structural summary of one scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    /// Path relative to the scanned root.
    #[serde(rename = "path")]
    pub relative_path: String,
    #[serde(rename = "full_path")]
    pub absolute_path: String,
    #[serde(rename = "classes")]
    pub types: Vec<String>,
    pub methods: Vec<String>,
    #[serde(rename = "lines_of_code")]
    pub line_count: usize,
}

impl FileSummary {
    /// Summarize already-read file content.
    pub fn from_content(relative_path: String, absolute_path: String, content: &str) -> Self {
        FileSummary {
            relative_path,
            absolute_path,
            types: extract_types(content),
            methods: extract_methods(content),
            line_count: count_non_blank_lines(content),
        }
    }
}

fn summarize_file(path: &Path, root: &Path) -> Result<FileSummary, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    let relative = path.strip_prefix(root).unwrap_or(path);
    Ok(FileSummary::from_content(
        relative.display().to_string(),
        path.display().to_string(),
        &content,
    ))
}

/// Scan every `lang` file under `root`.
///
/// A missing root is not an error: it simply has no files.
pub fn scan(root: &Path, lang: &Language) -> Vec<FileSummary> {
    let mut summaries = Vec::new();
    for path in walk::files_with_extension(root, lang.extension) {
        match summarize_file(&path, root) {
            Ok(summary) => summaries.push(summary),
            Err(err) => {
                eprintln!("warning: {}: {err}", path.display());
            }
        }
    }
    summaries
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
