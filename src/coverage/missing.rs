//! Missing-test detection by naming convention.
//!
//! A source type `Foo` counts as tested when some test type is named
//! `FooTest` or `FooTests` (or plainly `Foo`). Matching is by simple name
//! only: packages are not compared.

use std::collections::HashSet;

use super::data::MissingTestEntry;
use crate::scan::{FileSummary, Language};

/// Strip one trailing `Tests` or `Test` suffix, longest first, case-sensitive.
///
/// A type literally named `Test` strips to the empty string.
pub fn strip_test_suffix(name: &str) -> &str {
    name.strip_suffix("Tests")
        .or_else(|| name.strip_suffix("Test"))
        .unwrap_or(name)
}

/// Conventional test file name for a source type.
pub fn suggested_test_file(type_name: &str, lang: &Language) -> String {
    format!("{type_name}Test.{}", lang.extension)
}

/// List every source type occurrence without a matching test type.
///
/// Entries follow source file order, then declaration order within a file.
/// A name declared in several files yields one entry per declaration.
pub fn find_missing(
    source_files: &[FileSummary],
    test_files: &[FileSummary],
    lang: &Language,
) -> Vec<MissingTestEntry> {
    let covered: HashSet<&str> = test_files
        .iter()
        .flat_map(|f| f.types.iter())
        .map(|t| strip_test_suffix(t))
        .collect();

    source_files
        .iter()
        .flat_map(|f| f.types.iter().map(move |t| (f, t)))
        .filter(|(_, t)| !covered.contains(t.as_str()))
        .map(|(f, t)| MissingTestEntry {
            source_type_name: t.clone(),
            source_file_path: f.relative_path.clone(),
            suggested_test_file_name: suggested_test_file(t, lang),
        })
        .collect()
}

#[cfg(test)]
#[path = "missing_test.rs"]
mod tests;
