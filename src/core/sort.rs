//! Ordering of collected entries.
//!
//! Comparator defaults follow conventional listing-tool behavior: name
//! sorts ascending, while time and size sort newest-first and
//! largest-first. The reverse flag inverts whichever comparator is
//! active. Grouped requests partition into directories and files, sort
//! each half on its own, and concatenate.

use crate::core::entry::Entry;
use crate::core::request::{Grouping, ListingRequest, SortKey};

use std::cmp::Ordering;
use std::time::SystemTime;

/// Produces the totally ordered sequence for one listing run.
pub fn sort_entries(entries: Vec<Entry>, request: &ListingRequest) -> Vec<Entry> {
    match request.grouping {
        Grouping::Mixed => order(entries, request),
        Grouping::DirsFirst => {
            let (dirs, files) = partition(entries);
            let mut out = order(dirs, request);
            out.extend(order(files, request));
            out
        }
        Grouping::FilesFirst => {
            let (dirs, files) = partition(entries);
            let mut out = order(files, request);
            out.extend(order(dirs, request));
            out
        }
    }
}

/// Splits into (directories, everything else). Symlinks resolving to a
/// directory land in the directory half, same as in the type filter.
fn partition(entries: Vec<Entry>) -> (Vec<Entry>, Vec<Entry>) {
    entries.into_iter().partition(Entry::is_dir)
}

fn order(mut entries: Vec<Entry>, request: &ListingRequest) -> Vec<Entry> {
    match request.sort_key {
        SortKey::Unsorted => {
            // Filesystem read order; the reverse flag still applies.
            if request.reverse {
                entries.reverse();
            }
        }
        key => entries.sort_by(|a, b| {
            let ord = compare(key, a, b);
            if request.reverse { ord.reverse() } else { ord }
        }),
    }
    entries
}

fn compare(key: SortKey, a: &Entry, b: &Entry) -> Ordering {
    match key {
        SortKey::Name => a.name().cmp(b.name()),
        // Newest first; degraded entries sort as oldest. Name breaks ties
        // so equal timestamps still order deterministically.
        SortKey::Time => modified_or_epoch(b)
            .cmp(&modified_or_epoch(a))
            .then_with(|| a.name().cmp(b.name())),
        // Largest first; degraded entries sort as empty.
        SortKey::Size => size_or_zero(b)
            .cmp(&size_or_zero(a))
            .then_with(|| a.name().cmp(b.name())),
        SortKey::Unsorted => Ordering::Equal,
    }
}

fn modified_or_epoch(entry: &Entry) -> SystemTime {
    entry.modified().unwrap_or(SystemTime::UNIX_EPOCH)
}

fn size_or_zero(entry: &Entry) -> u64 {
    entry.size().unwrap_or(0)
}
