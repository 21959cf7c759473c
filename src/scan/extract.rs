//! Shallow structural extraction of type and method names.
//!
//! Two regular expressions stand in for a parser. They are knowingly loose:
//! `class` is matched anywhere (even at the end of a longer word), generic
//! return types such as `List<String>` defeat the method pattern, and text in
//! comments or string literals is matched like code. Coverage numbers are
//! defined relative to exactly these patterns, so they must not be tightened.

use std::sync::LazyLock;

use regex::Regex;

/// Optional `public`, optional `abstract`, then `class` or `interface` and
/// the declared name.
static TYPE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:public\s+)?(?:abstract\s+)?(?:class|interface)\s+(\w+)")
        .unwrap() // safe: literal pattern
});

/// Visibility keyword, optional `static`, any number of further tokens
/// (return type, modifiers), then `name(args) {`.
static METHOD_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:public|private|protected)\s+(?:static\s+)?(?:\w+\s+)*(\w+)\s*\([^)]*\)\s*\{")
        .unwrap() // safe: literal pattern
});

fn captures(re: &Regex, text: &str) -> Vec<String> {
    re.captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Every declared class or interface name, in textual order.
pub fn extract_types(text: &str) -> Vec<String> {
    captures(&TYPE_DECL, text)
}

/// Every method name matched by the declaration pattern, in textual order.
pub fn extract_methods(text: &str) -> Vec<String> {
    captures(&METHOD_DECL, text)
}

/// Count lines that are not empty after trimming whitespace.
pub fn count_non_blank_lines(text: &str) -> usize {
    text.lines().filter(|l| !l.trim().is_empty()).count()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
