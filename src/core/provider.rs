//! Filesystem access behind a trait, so the pipeline can be exercised
//! against anything that can list names and stat paths.
//!
//! [OsProvider] is the real implementation over `std::fs`. It resolves
//! symlink targets once at stat time; nothing downstream touches the
//! filesystem again for an entry.

use crate::core::entry::{Entry, EntryKind, EntryMeta, LinkTarget};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Raw attributes for one path, as returned by [FsProvider::stat].
#[derive(Debug, Clone)]
pub struct RawAttrs {
    pub kind: EntryKind,
    pub meta: EntryMeta,
    pub link_target: Option<PathBuf>,
}

impl RawAttrs {
    /// Converts provider output into the entry model.
    pub fn into_entry(self, name: String) -> Entry {
        Entry::new(name, self.kind, Some(self.meta), self.link_target)
    }
}

/// The filesystem surface the pipeline depends on.
pub trait FsProvider {
    /// Lists the child names of a directory, in filesystem read order.
    fn list_children(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Stats one path without following symlinks.
    fn stat(&self, path: &Path) -> io::Result<RawAttrs>;
}

/// [FsProvider] over the real filesystem.
pub struct OsProvider;

impl FsProvider for OsProvider {
    fn list_children(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::with_capacity(64);
        for entry in fs::read_dir(dir)? {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn stat(&self, path: &Path) -> io::Result<RawAttrs> {
        let md = fs::symlink_metadata(path)?;
        let file_type = md.file_type();

        let (kind, link_target) = if file_type.is_symlink() {
            // Resolve the target once; a failing resolve marks the link
            // as dangling rather than failing the entry.
            let target = match fs::metadata(path) {
                Ok(target_md) if target_md.is_dir() => LinkTarget::Dir,
                Ok(_) => LinkTarget::File,
                Err(_) => LinkTarget::Broken,
            };
            (
                EntryKind::Symlink { target },
                fs::read_link(path).ok(),
            )
        } else if file_type.is_dir() {
            (EntryKind::Dir, None)
        } else {
            (EntryKind::File, None)
        };

        Ok(RawAttrs {
            kind,
            meta: meta_from(&md),
            link_target,
        })
    }
}

#[cfg(unix)]
fn meta_from(md: &fs::Metadata) -> EntryMeta {
    use std::os::unix::fs::MetadataExt;
    EntryMeta {
        size: md.len(),
        modified: md.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        mode: md.mode(),
        nlink: md.nlink(),
        uid: md.uid(),
        gid: md.gid(),
    }
}

#[cfg(not(unix))]
fn meta_from(md: &fs::Metadata) -> EntryMeta {
    EntryMeta {
        size: md.len(),
        modified: md.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        mode: if md.permissions().readonly() { 0o444 } else { 0o644 },
        nlink: 1,
        uid: 0,
        gid: 0,
    }
}
