//! Depth-first traversal with visitor callbacks.
//!
//! `walkdir` yields a flat pre-order stream; the driver here turns that into
//! the pre-visit / file-visit / post-visit protocol the two walkers need,
//! including a post-order callback per directory and a skip-subtree
//! directive.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directive returned by visitor callbacks to steer further descent.
/// There is no abort variant: per-node errors are absorbed by the visitor
/// and the walk always runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitOutcome {
    /// Keep traversing.
    Continue,
    /// Do not descend further under the directory this node belongs to.
    SkipSubtree,
}

/// Callbacks fired during a walk. Implementations handle their own
/// filesystem errors; nothing a callback does can stop the traversal short
/// of the process itself failing.
pub trait TreeVisitor {
    /// Called for a directory before any of its children. Returning
    /// `SkipSubtree` prevents the descent; `post_visit_dir` is then not
    /// called for it either.
    fn pre_visit_dir(&mut self, dir: &Path) -> VisitOutcome {
        let _ = dir;
        VisitOutcome::Continue
    }

    /// Called for every non-directory entry. Returning `SkipSubtree`
    /// abandons the rest of the containing directory.
    fn visit_file(&mut self, file: &Path) -> VisitOutcome {
        let _ = file;
        VisitOutcome::Continue
    }

    /// Called for a directory after all of its children have been visited.
    /// `subtree_errored` is true when an entry directly under `dir` could
    /// not be read.
    fn post_visit_dir(&mut self, dir: &Path, subtree_errored: bool) {
        let _ = (dir, subtree_errored);
    }

    /// Called for entries that could not be read (permission failure,
    /// symlink loop). Traversal continues afterwards.
    fn visit_file_failed(&mut self, err: &walkdir::Error) {
        let _ = err;
    }
}

struct DirFrame {
    path: PathBuf,
    errored: bool,
}

/// Walk `root` depth-first, driving `visitor`.
///
/// Directories still being traversed are kept on a stack of open frames;
/// whenever the yielded depth falls back, the frames above it are closed
/// and their `post_visit_dir` fires — children before parents, so the
/// post-order invariant holds all the way up to the root.
pub fn walk<V: TreeVisitor>(root: &Path, follow_links: bool, visitor: &mut V) {
    let mut it = WalkDir::new(root).follow_links(follow_links).into_iter();
    let mut stack: Vec<DirFrame> = Vec::new();

    while let Some(item) = it.next() {
        match item {
            Ok(entry) => {
                close_frames(&mut stack, entry.depth(), visitor);
                if entry.file_type().is_dir() {
                    match visitor.pre_visit_dir(entry.path()) {
                        VisitOutcome::Continue => stack.push(DirFrame {
                            path: entry.path().to_path_buf(),
                            errored: false,
                        }),
                        VisitOutcome::SkipSubtree => it.skip_current_dir(),
                    }
                } else if visitor.visit_file(entry.path()) == VisitOutcome::SkipSubtree {
                    it.skip_current_dir();
                }
            }
            Err(err) => {
                let depth = err.depth();
                close_frames(&mut stack, depth, visitor);
                visitor.visit_file_failed(&err);
                // An unreadable entry taints its parent frame so the
                // parent's post-visit knows the subtree is incomplete.
                if depth > 0 {
                    if let Some(frame) = stack.get_mut(depth - 1) {
                        frame.errored = true;
                    }
                }
            }
        }
    }

    close_frames(&mut stack, 0, visitor);
}

fn close_frames<V: TreeVisitor>(stack: &mut Vec<DirFrame>, depth: usize, visitor: &mut V) {
    while stack.len() > depth {
        let Some(frame) = stack.pop() else { break };
        visitor.post_visit_dir(&frame.path, frame.errored);
    }
}
