//! Filesystem capability for husk.
//!
//! The navigator commands are driven by exactly three operations: list
//! a directory, test whether a path is a directory, and join a path
//! component onto a base. `Vfs` captures that seam. `HostVfs` is the
//! real thing over `std::fs`; `MemoryVfs` backs the unit tests.

mod host;
mod memory;

pub use host::HostVfs;
pub use memory::MemoryVfs;

use husk_types::Result;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsEntry {
    /// Entry name (no path components).
    pub name: String,
    pub kind: EntryKind,
}

/// The host capability the navigator commands run against.
///
/// Listing order is whatever the backing store yields; callers must not
/// assume it is sorted.
pub trait Vfs {
    /// List the direct entries of a directory.
    fn readdir(&self, path: &str) -> Result<Vec<VfsEntry>>;

    /// Whether `path` names an existing directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Join one entry name onto a base directory path.
    fn join(&self, base: &str, name: &str) -> String {
        if base.ends_with('/') {
            format!("{base}{name}")
        } else {
            format!("{base}/{name}")
        }
    }
}
