//! Host filesystem implementation.
//!
//! Thin adapter over `std::fs`. Entries are returned in the order the
//! OS yields them (`read_dir` order), deliberately unsorted.

use std::path::Path;

use husk_types::{HuskError, Result};

use crate::{EntryKind, Vfs, VfsEntry};

/// The real filesystem, addressed by absolute paths.
#[derive(Debug, Default)]
pub struct HostVfs;

impl HostVfs {
    pub fn new() -> Self {
        Self
    }
}

impl Vfs for HostVfs {
    fn readdir(&self, path: &str) -> Result<Vec<VfsEntry>> {
        let iter = std::fs::read_dir(path)
            .map_err(|e| HuskError::Vfs(format!("cannot list {path}: {e}")))?;
        let mut entries = Vec::new();
        for dent in iter {
            let dent = dent.map_err(|e| HuskError::Vfs(format!("cannot list {path}: {e}")))?;
            let kind = match dent.file_type() {
                Ok(ft) if ft.is_dir() => EntryKind::Directory,
                Ok(_) => EntryKind::File,
                Err(e) => {
                    return Err(HuskError::Vfs(format!("cannot list {path}: {e}")));
                },
            };
            entries.push(VfsEntry {
                name: dent.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(entries)
    }

    fn is_dir(&self, path: &str) -> bool {
        std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    fn join(&self, base: &str, name: &str) -> String {
        Path::new(base).join(name).to_string_lossy().into_owned()
    }
}
