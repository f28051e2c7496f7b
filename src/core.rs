//! Core pipeline logic for glint.
//!
//! This module contains the non-presentation "engine" pieces:
//! - [entry]: the immutable entry model built from provider output.
//! - [request]: the decoded configuration driving one listing run.
//! - [provider]: the filesystem seam ([FsProvider]) and its `std::fs` implementation.
//! - [filter]: visibility and type filtering, including degraded entries.
//! - [sort]: comparators and dirs-first/files-first grouping.
//! - [layout]: grid fitting and recursive tree building.
//! - [git]: optional per-entry git status markers.
//!
//! Most callers will import [collect_entries], [sort_entries], and the
//! [Entry]/[ListingRequest] types from this module.

pub mod entry;
pub mod filter;
pub mod git;
pub mod layout;
pub mod provider;
pub mod request;
pub mod sort;

pub use entry::{Entry, EntryKind, EntryMeta, LinkTarget};
pub use filter::collect_entries;
pub use git::{GitIndex, GitMark};
pub use layout::{GRID_GAP, GridPlan, TreeNode, build_tree, fit_grid};
pub use provider::{FsProvider, OsProvider, RawAttrs};
pub use request::{Grouping, LayoutMode, ListingRequest, SortKey, TypeFilter, Visibility};
pub use sort::sort_entries;
