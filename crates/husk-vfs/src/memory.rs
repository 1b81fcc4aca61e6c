//! In-memory VFS backing the unit tests.
//!
//! Files here carry no contents; the navigator only ever asks what a
//! directory holds. The whole tree is one flat `BTreeMap` keyed by
//! canonical absolute path, so a listing is a prefix scan and comes
//! back name-sorted for free.

use std::collections::BTreeMap;

use husk_types::{HuskError, Result};

use crate::{EntryKind, Vfs, VfsEntry};

/// A contentless directory tree held entirely in memory.
#[derive(Debug)]
pub struct MemoryVfs {
    nodes: BTreeMap<String, EntryKind>,
}

impl MemoryVfs {
    /// An empty tree: just the root directory.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_string(), EntryKind::Directory);
        Self { nodes }
    }

    /// Create a directory, along with any missing ancestors.
    pub fn mkdir(&mut self, path: &str) -> Result<()> {
        let mut built = String::new();
        for seg in path.split('/').filter(|s| !s.is_empty()) {
            built.push('/');
            built.push_str(seg);
            if self.nodes.get(&built) == Some(&EntryKind::File) {
                return Err(HuskError::Vfs(format!("not a directory: {built}")));
            }
            self.nodes.insert(built.clone(), EntryKind::Directory);
        }
        Ok(())
    }

    /// Register a file. Its directory must already exist.
    pub fn touch(&mut self, path: &str) -> Result<()> {
        let path = canonical(path);
        let dir = match path.rsplit_once('/') {
            Some(("", _)) | None => "/",
            Some((dir, _)) => dir,
        };
        if !self.is_dir(dir) {
            return Err(HuskError::Vfs(format!("no such directory: {dir}")));
        }
        self.nodes.insert(path, EntryKind::File);
        Ok(())
    }

    /// Whether anything, file or directory, lives at `path`.
    pub fn exists(&self, path: &str) -> bool {
        self.nodes.contains_key(&canonical(path))
    }
}

impl Default for MemoryVfs {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical form of a path: absolute, single slashes between segments,
/// no trailing slash. The empty-segment filter handles leading, doubled,
/// and trailing slashes in one go; the root alone stays `/`.
fn canonical(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    for seg in path.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(seg);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

impl Vfs for MemoryVfs {
    fn readdir(&self, path: &str) -> Result<Vec<VfsEntry>> {
        let path = canonical(path);
        match self.nodes.get(&path) {
            Some(EntryKind::Directory) => {},
            Some(EntryKind::File) => {
                return Err(HuskError::Vfs(format!("not a directory: {path}")));
            },
            None => {
                return Err(HuskError::Vfs(format!("no such directory: {path}")));
            },
        }
        let prefix = if path == "/" { path } else { format!("{path}/") };
        // A direct child is a key that extends the prefix by exactly one
        // segment. Keys are sorted, so so are the listed names.
        let children = self
            .nodes
            .iter()
            .filter_map(|(key, kind)| {
                let name = key.strip_prefix(&prefix)?;
                (!name.is_empty() && !name.contains('/')).then(|| VfsEntry {
                    name: name.to_string(),
                    kind: *kind,
                })
            })
            .collect();
        Ok(children)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.nodes.get(&canonical(path)) == Some(&EntryKind::Directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// /etc/hosts, /etc/husk/ (dir), /readme.md
    fn sample() -> MemoryVfs {
        let mut vfs = MemoryVfs::new();
        vfs.mkdir("/etc/husk").unwrap();
        vfs.touch("/etc/hosts").unwrap();
        vfs.touch("/readme.md").unwrap();
        vfs
    }

    #[test]
    fn fresh_tree_is_an_empty_root() {
        let vfs = MemoryVfs::new();
        assert!(vfs.is_dir("/"));
        assert!(vfs.readdir("/").unwrap().is_empty());
    }

    #[test]
    fn mkdir_fills_in_missing_ancestors() {
        let vfs = sample();
        assert!(vfs.is_dir("/etc"));
        assert!(vfs.is_dir("/etc/husk"));
    }

    #[test]
    fn mkdir_twice_is_idempotent() {
        let mut vfs = sample();
        vfs.mkdir("/etc/husk").unwrap();
        assert!(vfs.is_dir("/etc/husk"));
    }

    #[test]
    fn mkdir_through_a_file_fails() {
        let mut vfs = sample();
        assert!(vfs.mkdir("/etc/hosts/sub").is_err());
        assert!(!vfs.exists("/etc/hosts/sub"));
    }

    #[test]
    fn touch_requires_its_directory() {
        let mut vfs = MemoryVfs::new();
        assert!(vfs.touch("/var/log/husk.log").is_err());
        vfs.mkdir("/var/log").unwrap();
        vfs.touch("/var/log/husk.log").unwrap();
        assert!(vfs.exists("/var/log/husk.log"));
        assert!(!vfs.is_dir("/var/log/husk.log"));
    }

    #[test]
    fn touch_at_the_root_works() {
        let mut vfs = MemoryVfs::new();
        vfs.touch("/top.txt").unwrap();
        assert!(vfs.exists("/top.txt"));
    }

    #[test]
    fn readdir_yields_direct_children_name_sorted() {
        let vfs = sample();
        let root: Vec<String> = vfs
            .readdir("/")
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(root, ["etc", "readme.md"]);

        let etc = vfs.readdir("/etc").unwrap();
        assert_eq!(etc[0].name, "hosts");
        assert_eq!(etc[0].kind, EntryKind::File);
        assert_eq!(etc[1].name, "husk");
        assert_eq!(etc[1].kind, EntryKind::Directory);
    }

    #[test]
    fn readdir_never_yields_grandchildren() {
        let vfs = sample();
        let root = vfs.readdir("/").unwrap();
        assert!(root.iter().all(|e| !e.name.contains('/')));
        assert_eq!(root.len(), 2);
    }

    #[test]
    fn readdir_rejects_missing_path_and_files() {
        let vfs = sample();
        assert!(vfs.readdir("/ghost").is_err());
        assert!(vfs.readdir("/readme.md").is_err());
    }

    #[test]
    fn stray_slashes_are_tolerated() {
        let mut vfs = MemoryVfs::new();
        vfs.mkdir("/dir/").unwrap();
        vfs.touch("//dir//note").unwrap();
        assert!(vfs.exists("/dir/note"));
        assert!(vfs.is_dir("dir"));
    }

    #[test]
    fn names_may_contain_spaces() {
        let mut vfs = MemoryVfs::new();
        vfs.touch("/file with spaces.txt").unwrap();
        assert!(vfs.exists("/file with spaces.txt"));
    }

    #[test]
    fn join_appends_one_segment() {
        let vfs = MemoryVfs::new();
        assert_eq!(vfs.join("/", "etc"), "/etc");
        assert_eq!(vfs.join("/etc", "husk"), "/etc/husk");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn canonical_is_a_fixed_point(raw in "[a-z0-9._/]{0,40}") {
                let once = canonical(&raw);
                prop_assert_eq!(canonical(&once), once.clone());
                prop_assert!(once.starts_with('/'), "not absolute: {once}");
                prop_assert!(!once.contains("//"), "doubled slash: {once}");
                if once != "/" {
                    prop_assert!(!once.ends_with('/'), "trailing slash: {once}");
                }
            }

            #[test]
            fn mkdir_makes_every_ancestor_a_directory(
                parts in proptest::collection::vec("[a-z]{1,6}", 1..5),
            ) {
                let mut vfs = MemoryVfs::new();
                vfs.mkdir(&format!("/{}", parts.join("/"))).unwrap();
                let mut so_far = String::new();
                for part in &parts {
                    so_far.push('/');
                    so_far.push_str(part);
                    prop_assert!(vfs.is_dir(&so_far), "not a directory: {so_far}");
                }
            }

            #[test]
            fn touched_file_shows_up_in_its_listing(
                dir in "[a-z]{1,6}",
                file in "[a-z]{1,6}",
            ) {
                let mut vfs = MemoryVfs::new();
                vfs.mkdir(&format!("/{dir}")).unwrap();
                vfs.touch(&format!("/{dir}/{file}")).unwrap();
                let listed = vfs.readdir(&format!("/{dir}")).unwrap();
                prop_assert!(listed.iter().any(|e| e.name == file));
            }
        }
    }
}
