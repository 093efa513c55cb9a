//! Copy pass: mirror directories and copy pattern-matched files.

use crate::pattern::NamePattern;
use crate::walk::{TreeVisitor, VisitOutcome};
use filetime::FileTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Visitor for the source tree. Every directory is mirrored into the
/// destination (so matched descendants have somewhere to land); every file
/// whose name matches the pattern is copied unless its destination path
/// already exists. Per-node failures are logged and absorbed — one bad
/// entry never stops the siblings from being processed.
pub struct PatternCopyWalker<'a> {
    pattern: &'a NamePattern,
    source: &'a Path,
    dest: &'a Path,
    matches: u64,
}

impl<'a> PatternCopyWalker<'a> {
    pub fn new(pattern: &'a NamePattern, source: &'a Path, dest: &'a Path) -> Self {
        PatternCopyWalker {
            pattern,
            source,
            dest,
            matches: 0,
        }
    }

    /// Files whose name matched the pattern, counted once each whether or
    /// not the copy actually ran.
    pub fn match_count(&self) -> u64 {
        self.matches
    }

    /// Relativize against the source root, resolve against the destination
    /// root.
    fn dest_path(&self, path: &Path) -> PathBuf {
        let rel = path.strip_prefix(self.source).unwrap_or(path);
        self.dest.join(rel)
    }

    fn copy_file(&self, file: &Path, target: &Path) -> io::Result<()> {
        fs::copy(file, target)?;
        let meta = file.metadata()?;
        filetime::set_file_mtime(target, FileTime::from_last_modification_time(&meta))
    }
}

impl TreeVisitor for PatternCopyWalker<'_> {
    fn pre_visit_dir(&mut self, dir: &Path) -> VisitOutcome {
        debug!("entering {}", dir.display());
        // The match is evaluated on directory names too, but only for the
        // debug trail: directories are mirrored unconditionally so they can
        // receive matched descendants.
        self.pattern.matches_name(dir);

        let target = self.dest_path(dir);
        match fs::create_dir(&target) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => {
                error!("unable to create {}: {}", target.display(), e);
                return VisitOutcome::SkipSubtree;
            }
        }
        if let Ok(meta) = dir.metadata() {
            let _ = fs::set_permissions(&target, meta.permissions());
        }
        VisitOutcome::Continue
    }

    fn visit_file(&mut self, file: &Path) -> VisitOutcome {
        debug!("visiting {}", file.display());
        if self.pattern.matches_name(file) {
            self.matches += 1;
            let target = self.dest_path(file);
            // An existing destination counts as already synced: a partial
            // re-run only fills gaps and never overwrites.
            if !target.exists() {
                match self.copy_file(file, &target) {
                    Ok(()) => debug!("copied {}", target.display()),
                    Err(e) => error!("unable to copy {}: {}", file.display(), e),
                }
            }
        }
        VisitOutcome::Continue
    }

    fn post_visit_dir(&mut self, dir: &Path, subtree_errored: bool) {
        if subtree_errored {
            return;
        }
        // Writing children disturbs the mtime the directory got at creation
        // time, so the source mtime is reapplied once the subtree is done.
        // Cosmetic: failure here does not affect copy correctness.
        let target = self.dest_path(dir);
        let restored = dir.metadata().and_then(|meta| {
            filetime::set_file_mtime(&target, FileTime::from_last_modification_time(&meta))
        });
        match restored {
            Ok(()) => debug!("restored mtime for {}", target.display()),
            Err(e) => debug!("unable to restore mtime for {}: {}", target.display(), e),
        }
    }

    fn visit_file_failed(&mut self, err: &walkdir::Error) {
        if err.loop_ancestor().is_some() {
            debug!("cycle detected: {}", err);
        } else {
            debug!("unable to read entry: {}", err);
        }
    }
}
