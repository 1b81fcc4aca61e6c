//! Navigator command handlers: ls, cd, whoami, tree, find, clear.
//!
//! Handlers are stateless over the session cursor and the `Vfs`
//! capability. User-input and host-IO problems are written to the
//! console and never escape as `Err`; an `Err` from a handler means
//! only that the audit log could not be persisted.
//!
//! Logging is deliberately asymmetric: a failed `ls` logs nothing,
//! while `tree` and `find` log their completion entry even when parts
//! of the walk errored. `cd` logs the attempt even when the target did
//! not exist. These rules are emulated behavior; do not unify them.

use husk_audit::AuditLog;
use husk_types::Result;
use husk_vfs::{EntryKind, Vfs};

use crate::console::Console;
use crate::session::Session;

/// List the direct entries of the cursor directory, host order.
pub fn ls(
    session: &Session,
    vfs: &dyn Vfs,
    out: &mut dyn Console,
    audit: &mut AuditLog,
) -> Result<()> {
    match vfs.readdir(&session.cwd) {
        Ok(entries) => {
            for entry in &entries {
                out.write_line(&entry.name);
            }
            audit.record("ls", false)?;
        },
        // Success-only logging: a failed listing leaves no audit entry.
        Err(e) => out.write_line(&format!("Error: {e}")),
    }
    Ok(())
}

/// Move the cursor. `..` walks the textual parent unconditionally;
/// anything else must name an existing directory under the cursor.
pub fn cd(
    session: &mut Session,
    vfs: &dyn Vfs,
    out: &mut dyn Console,
    audit: &mut AuditLog,
    args: &[&str],
) -> Result<()> {
    let Some(&target) = args.first() else {
        out.write_line("cd: missing operand");
        return Ok(());
    };
    if target == ".." || target == "../" {
        // No existence check and no sandbox floor: repeated `..` can
        // leave the mounted directory entirely.
        session.cwd = textual_parent(&session.cwd);
    } else {
        let candidate = vfs.join(&session.cwd, target);
        if vfs.is_dir(&candidate) {
            session.cwd = candidate;
        } else {
            out.write_line(&format!("cd: no such file or directory: {target}"));
        }
    }
    // The attempt is logged even when the target did not exist.
    audit.record(&format!("cd {target}"), false)
}

/// Print the configured user name.
pub fn whoami(session: &Session, out: &mut dyn Console, audit: &mut AuditLog) -> Result<()> {
    out.write_line(&session.user);
    audit.record("whoami", false)
}

/// Work item for the explicit tree walk stack.
///
/// `Expand` lists a directory and queues its entries; `Entry` emits one
/// listed entry and, for directories, queues its expansion. Pushing a
/// directory's entries in reverse keeps pop order equal to listing
/// order, so the walk is pre-order with each subtree visited before the
/// next sibling.
enum WalkItem {
    Expand { dir: String, depth: usize },
    Entry {
        path: String,
        name: String,
        kind: EntryKind,
        depth: usize,
    },
}

/// Pre-order tree listing from the cursor, two extra spaces per level.
pub fn tree(
    session: &Session,
    vfs: &dyn Vfs,
    out: &mut dyn Console,
    audit: &mut AuditLog,
) -> Result<()> {
    let mut stack = vec![WalkItem::Expand {
        dir: session.cwd.clone(),
        depth: 0,
    }];
    while let Some(item) = stack.pop() {
        match item {
            WalkItem::Expand { dir, depth } => match vfs.readdir(&dir) {
                Ok(entries) => {
                    for entry in entries.iter().rev() {
                        stack.push(WalkItem::Entry {
                            path: vfs.join(&dir, &entry.name),
                            name: entry.name.clone(),
                            kind: entry.kind,
                            depth,
                        });
                    }
                },
                // Abort this subtree only; siblings stay on the stack.
                Err(e) => out.write_line(&format!("Error: {e}")),
            },
            WalkItem::Entry {
                path,
                name,
                kind,
                depth,
            } => {
                out.write_line(&format!("{}{name}", " ".repeat(depth)));
                if kind == EntryKind::Directory {
                    stack.push(WalkItem::Expand {
                        dir: path,
                        depth: depth + 2,
                    });
                }
            },
        }
    }
    // One completion entry regardless of subtree errors.
    audit.record("tree", false)
}

/// Work item for the find walk; same shape as `WalkItem` minus depth.
enum FindItem {
    Expand(String),
    Entry {
        path: String,
        name: String,
        kind: EntryKind,
    },
}

/// Exact-name search beneath the cursor, pre-order.
///
/// Descent continues into every subdirectory, matching ones included.
pub fn find(
    session: &Session,
    vfs: &dyn Vfs,
    out: &mut dyn Console,
    audit: &mut AuditLog,
    args: &[&str],
) -> Result<()> {
    let Some(&query) = args.first() else {
        out.write_line("find: missing operand");
        return Ok(());
    };
    let mut stack = vec![FindItem::Expand(session.cwd.clone())];
    while let Some(item) = stack.pop() {
        match item {
            FindItem::Expand(dir) => match vfs.readdir(&dir) {
                Ok(entries) => {
                    for entry in entries.iter().rev() {
                        stack.push(FindItem::Entry {
                            path: vfs.join(&dir, &entry.name),
                            name: entry.name.clone(),
                            kind: entry.kind,
                        });
                    }
                },
                Err(e) => out.write_line(&format!("Error: {e}")),
            },
            FindItem::Entry { path, name, kind } => {
                if name == query {
                    out.write_line(&format!("Found: {path}"));
                }
                if kind == EntryKind::Directory {
                    stack.push(FindItem::Expand(path));
                }
            },
        }
    }
    audit.record(&format!("find {query}"), false)
}

/// Wipe the visible transcript. The cursor and filesystem are untouched.
pub fn clear(out: &mut dyn Console, audit: &mut AuditLog) -> Result<()> {
    out.clear();
    audit.record("clear", false)
}

/// Textual parent of a path, dirname-style: no filesystem access, floor
/// at `/`.
fn textual_parent(path: &str) -> String {
    match path.rfind('/') {
        Some(0) => "/".to_string(),
        Some(i) => path[..i].to_string(),
        None => String::new(),
    }
}
