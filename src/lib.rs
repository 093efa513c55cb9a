#![forbid(unsafe_code)]
//! GlobCopy — recursively copy files whose names match a glob pattern into a
//! mirrored directory tree, then prune destination directories left empty.

pub mod cli;
pub mod copy;
pub mod pattern;
pub mod prune;
pub mod run;
pub mod walk;
