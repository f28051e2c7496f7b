//! Entry collection and filtering.
//!
//! Turns the raw names of a directory read into the subset of [Entry]
//! values eligible for display. Visibility and type rules come from the
//! [ListingRequest]; a failing stat degrades the entry instead of
//! dropping it.

use crate::core::entry::Entry;
use crate::core::provider::FsProvider;
use crate::core::request::{ListingRequest, TypeFilter};

use std::io;
use std::path::Path;

/// Reads one directory through the provider and applies the visibility
/// and type rules.
///
/// Only the directory read itself is fallible here; per-entry stat
/// failures produce degraded entries and the listing continues.
pub fn collect_entries(
    fs: &dyn FsProvider,
    dir: &Path,
    request: &ListingRequest,
) -> io::Result<Vec<Entry>> {
    let names = fs.list_children(dir)?;
    let mut entries = Vec::with_capacity(names.len());

    for name in names {
        // Excluded unconditionally, independent of the visibility mode.
        if name.is_empty() || name == "." || name == ".." {
            continue;
        }
        if !request.show_hidden() && name.starts_with('.') {
            continue;
        }

        let entry = match fs.stat(&dir.join(&name)) {
            Ok(attrs) => attrs.into_entry(name),
            Err(_) => Entry::degraded(name),
        };

        let keep = match request.type_filter {
            TypeFilter::All => true,
            TypeFilter::DirsOnly => entry.is_dir(),
            TypeFilter::FilesOnly => !entry.is_dir(),
        };
        if keep {
            entries.push(entry);
        }
    }

    Ok(entries)
}
