//! Orchestration: precondition checks, then the copy pass, then the prune
//! pass, strictly in that order.

use crate::copy::PatternCopyWalker;
use crate::pattern::NamePattern;
use crate::prune::EmptyPruneWalker;
use crate::walk;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Counters reported after both passes complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Files whose name matched the pattern.
    pub matched: u64,
    /// Empty directories removed from the destination.
    pub pruned: u64,
}

/// Copy pattern-matched files from `source` into a mirrored tree under
/// `dest`, then prune directories that received nothing.
///
/// Fails fast — with no side effects — if `source` is not a directory or
/// `dest` already exists. Past those checks the walkers absorb per-node
/// errors and the run completes; an `Err` from here is the last-resort
/// path, not a designed control-flow branch.
pub fn run(
    pattern: &NamePattern,
    source: &Path,
    dest: &Path,
    follow_links: bool,
) -> Result<Summary> {
    anyhow::ensure!(source.is_dir(), "{}: not a directory", source.display());
    anyhow::ensure!(
        !dest.exists(),
        "{}: already exists, aborting",
        dest.display()
    );

    let mut copier = PatternCopyWalker::new(pattern, source, dest);
    walk::walk(source, follow_links, &mut copier);
    let matched = copier.match_count();
    info!(
        "walked source tree {}: {} files matched pattern {}",
        source.display(),
        matched,
        pattern.as_str()
    );

    // Pruning decisions depend on the complete, final state of the
    // destination tree, so this pass must not start earlier.
    let mut pruner = EmptyPruneWalker::new();
    walk::walk(dest, false, &mut pruner);
    let pruned = pruner.pruned_count();
    info!(
        "walked destination tree {}: removed {} empty directories",
        dest.display(),
        pruned
    );

    Ok(Summary { matched, pruned })
}
