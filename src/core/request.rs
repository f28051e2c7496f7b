//! Listing request configuration for glint.
//!
//! A [ListingRequest] is the fully decoded description of one listing run:
//! which entries are visible, how they are ordered and grouped, and which
//! textual shape the output takes. It is built once by the CLI layer and
//! never changes while the pipeline runs.

/// Which raw directory entries are eligible for display.
///
/// `.` and `..` are excluded at collection time no matter which mode is
/// active. [Visibility::AlmostAll] and [Visibility::All] both admit
/// dotfiles and behave identically in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Normal,
    AlmostAll,
    All,
}

/// Restricts the listing to one entry class.
///
/// A symlink whose target is a directory counts as a directory here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    DirsOnly,
    FilesOnly,
}

/// Sort key for ordering entries.
///
/// [SortKey::Unsorted] keeps the raw filesystem read order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Time,
    Size,
    Unsorted,
}

/// Whether directories and files are grouped before sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    Mixed,
    DirsFirst,
    FilesFirst,
}

/// The textual shape of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Grid,
    OnePerLine,
    Long,
    Tree,
}

/// One decoded listing configuration.
///
/// `tree_depth` is only consulted in [LayoutMode::Tree]; `None` means
/// unlimited recursion.
#[derive(Debug, Clone)]
pub struct ListingRequest {
    pub visibility: Visibility,
    pub type_filter: TypeFilter,
    pub sort_key: SortKey,
    pub reverse: bool,
    pub grouping: Grouping,
    pub layout: LayoutMode,
    pub tree_depth: Option<usize>,
}

impl Default for ListingRequest {
    fn default() -> Self {
        ListingRequest {
            visibility: Visibility::Normal,
            type_filter: TypeFilter::All,
            sort_key: SortKey::Name,
            reverse: false,
            grouping: Grouping::Mixed,
            layout: LayoutMode::Grid,
            tree_depth: None,
        }
    }
}

impl ListingRequest {
    /// True when dotfiles should be listed.
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.visibility != Visibility::Normal
    }
}
