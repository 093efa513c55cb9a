//! Prune pass: delete destination directories that ended up empty.

use crate::walk::TreeVisitor;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Visitor for the destination tree. Runs after the copy pass and removes
/// every directory that is empty when its post-visit fires. Children close
/// before parents, so emptiness cascades bottom-up — a directory whose only
/// content was a just-deleted subdirectory is deleted in the same walk. The
/// destination root itself is removed if nothing under it survived.
#[derive(Debug, Default)]
pub struct EmptyPruneWalker {
    pruned: u64,
}

impl EmptyPruneWalker {
    pub fn new() -> Self {
        EmptyPruneWalker::default()
    }

    /// Directories removed so far.
    pub fn pruned_count(&self) -> u64 {
        self.pruned
    }
}

impl TreeVisitor for EmptyPruneWalker {
    fn post_visit_dir(&mut self, dir: &Path, _subtree_errored: bool) {
        debug!("cleanup: deleting {} if empty", dir.display());
        // remove_dir refuses non-empty directories; that failure is the
        // normal case wherever a copied file landed, so it is ignored.
        if fs::remove_dir(dir).is_ok() {
            self.pruned += 1;
        }
    }

    fn visit_file_failed(&mut self, err: &walkdir::Error) {
        debug!("cleanup: unable to read entry: {}", err);
    }
}
