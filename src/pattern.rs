//! Glob pattern matching against single path segments.

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use std::path::Path;
use tracing::debug;

/// A glob expression compiled once, compared only against the final path
/// segment (file or directory name), never the full path.
#[derive(Debug, Clone)]
pub struct NamePattern {
    text: String,
    matcher: GlobMatcher,
}

impl NamePattern {
    /// Compile `pattern`. An invalid glob is a hard error reported before
    /// any traversal starts.
    pub fn new(pattern: &str) -> Result<Self> {
        let matcher = Glob::new(pattern)
            .with_context(|| format!("{pattern}: invalid glob pattern"))?
            .compile_matcher();
        Ok(Self {
            text: pattern.to_string(),
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Compare the pattern against the final segment of `path`.
    pub fn matches_name(&self, path: &Path) -> bool {
        match path.file_name() {
            Some(name) if self.matcher.is_match(name) => {
                debug!("found {}", path.display());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn matches_final_segment_only() {
        let p = NamePattern::new("*.bak").unwrap();
        assert!(p.matches_name(Path::new("dir/sub/file.bak")));
        assert!(!p.matches_name(Path::new("file.bak/other.txt")));
    }

    #[test]
    fn star_does_not_see_parent_components() {
        // "a*" must not match "deep/apple"'s ancestors leaking in
        let p = NamePattern::new("a*").unwrap();
        assert!(p.matches_name(Path::new("x/y/apple")));
        assert!(!p.matches_name(Path::new("apple/banana")));
    }

    #[test]
    fn question_mark_and_brackets() {
        let p = NamePattern::new("file?.tx[ts]").unwrap();
        assert!(p.matches_name(Path::new("file1.txt")));
        assert!(p.matches_name(Path::new("fileA.txs")));
        assert!(!p.matches_name(Path::new("file12.txt")));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let p = NamePattern::new("*.BAK").unwrap();
        assert!(!p.matches_name(Path::new("x.bak")));
        assert!(p.matches_name(Path::new("x.BAK")));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(NamePattern::new("[unclosed").is_err());
    }

    #[test]
    fn root_path_has_no_name() {
        let p = NamePattern::new("*").unwrap();
        assert!(!p.matches_name(Path::new("/")));
    }
}
