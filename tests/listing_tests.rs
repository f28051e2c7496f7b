//! Listing pipeline tests for glint.
//!
//! These run the real collect → sort → render pipeline over temporary
//! directories and assert on the produced lines. The fixture mirrors a
//! small mixed directory: two files, one subdirectory and one dotfile.
//!
//! Temporary directories are cleaned up automatically when the tests
//! complete.

use glint::core::{
    Grouping, ListingRequest, OsProvider, SortKey, TypeFilter, Visibility, collect_entries,
    sort_entries,
};
use glint::core::{Entry, FsProvider};
use glint::ui::{RenderOptions, Renderer, Theme, report_line, tally};

use std::error;
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;

fn fixture() -> Result<TempDir, Box<dyn error::Error>> {
    let tmp = tempfile::tempdir()?;
    let mut a = File::create(tmp.path().join("a-file"))?;
    writeln!(a, "alpha alpha alpha")?;
    File::create(tmp.path().join("z-file"))?;
    fs::create_dir(tmp.path().join("symlinks"))?;
    File::create(tmp.path().join(".hidden-file"))?;
    Ok(tmp)
}

fn listed(tmp: &TempDir, request: &ListingRequest) -> Result<Vec<Entry>, Box<dyn error::Error>> {
    let entries = collect_entries(&OsProvider, tmp.path(), request)?;
    Ok(sort_entries(entries, request))
}

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name()).collect()
}

fn plain_options() -> RenderOptions {
    RenderOptions {
        icons: false,
        color: false,
        human_readable: true,
    }
}

#[test]
fn default_listing_is_alphabetical_without_dotfiles() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let entries = listed(&tmp, &ListingRequest::default())?;
    assert_eq!(names(&entries), vec!["a-file", "symlinks", "z-file"]);
    Ok(())
}

#[test]
fn reverse_flips_the_whole_listing() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let request = ListingRequest {
        reverse: true,
        ..ListingRequest::default()
    };
    let entries = listed(&tmp, &request)?;
    assert_eq!(names(&entries), vec!["z-file", "symlinks", "a-file"]);
    Ok(())
}

#[test]
fn all_visibility_adds_the_dotfile() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let request = ListingRequest {
        visibility: Visibility::All,
        ..ListingRequest::default()
    };
    let entries = listed(&tmp, &request)?;
    assert_eq!(
        names(&entries),
        vec![".hidden-file", "a-file", "symlinks", "z-file"]
    );
    Ok(())
}

#[test]
fn grouping_puts_the_directory_at_either_end() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;

    let request = ListingRequest {
        grouping: Grouping::DirsFirst,
        ..ListingRequest::default()
    };
    assert_eq!(
        names(&listed(&tmp, &request)?),
        vec!["symlinks", "a-file", "z-file"]
    );

    let request = ListingRequest {
        grouping: Grouping::FilesFirst,
        ..ListingRequest::default()
    };
    assert_eq!(
        names(&listed(&tmp, &request)?),
        vec!["a-file", "z-file", "symlinks"]
    );
    Ok(())
}

#[test]
fn type_filters_keep_only_their_class() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;

    let request = ListingRequest {
        type_filter: TypeFilter::DirsOnly,
        ..ListingRequest::default()
    };
    assert_eq!(names(&listed(&tmp, &request)?), vec!["symlinks"]);

    let request = ListingRequest {
        type_filter: TypeFilter::FilesOnly,
        ..ListingRequest::default()
    };
    assert_eq!(names(&listed(&tmp, &request)?), vec!["a-file", "z-file"]);
    Ok(())
}

#[test]
fn size_sort_puts_the_largest_file_first() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let request = ListingRequest {
        sort_key: SortKey::Size,
        type_filter: TypeFilter::FilesOnly,
        ..ListingRequest::default()
    };
    // a-file has content, z-file is empty.
    assert_eq!(names(&listed(&tmp, &request)?), vec!["a-file", "z-file"]);
    Ok(())
}

#[test]
fn grid_fits_everything_on_one_wide_line() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let entries = listed(&tmp, &ListingRequest::default())?;
    let theme = Theme::dark();
    let renderer = Renderer::new(&theme, plain_options());

    let lines = renderer.grid_lines(&entries, 80);
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    let a = line.find("a-file").expect("a-file in grid");
    let s = line.find("symlinks").expect("symlinks in grid");
    let z = line.find("z-file").expect("z-file in grid");
    assert!(a < s && s < z, "grid order broken: {line}");
    Ok(())
}

#[test]
fn narrow_grid_wraps_to_multiple_columns() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let entries = listed(&tmp, &ListingRequest::default())?;
    let theme = Theme::dark();
    let renderer = Renderer::new(&theme, plain_options());

    // Too narrow for one row, wide enough for two columns.
    let lines = renderer.grid_lines(&entries, 20);
    assert_eq!(lines.len(), 2);
    Ok(())
}

#[test]
fn one_per_line_emits_exactly_one_row_each() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let entries = listed(&tmp, &ListingRequest::default())?;
    let theme = Theme::dark();
    let renderer = Renderer::new(&theme, plain_options());

    let lines = renderer.row_lines(&entries);
    assert_eq!(lines, vec!["a-file", "symlinks", "z-file"]);
    Ok(())
}

#[test]
fn long_rows_carry_a_permission_string() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let entries = listed(&tmp, &ListingRequest::default())?;
    let theme = Theme::dark();
    let renderer = Renderer::new(&theme, plain_options());

    for line in renderer.long_lines(&entries) {
        let mode: Vec<char> = line.chars().take(10).collect();
        assert_eq!(mode.len(), 10);
        assert!(
            mode.iter().all(|c| "dl-rwxsStT".contains(*c)),
            "unexpected mode string in: {line}"
        );
    }
    Ok(())
}

#[test]
fn a_file_path_renders_without_the_pipeline() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let path = tmp.path().join(".hidden-file");
    let attrs = OsProvider.stat(&path)?;
    let entry = attrs.into_entry(path.to_string_lossy().into_owned());

    let theme = Theme::dark();
    let renderer = Renderer::new(&theme, plain_options());
    let lines = renderer.single_lines(&entry, true);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with('-'), "not a long row: {}", lines[0]);
    assert!(lines[0].contains(".hidden-file"));
    Ok(())
}

#[test]
fn report_counts_the_filtered_listing() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let entries = listed(&tmp, &ListingRequest::default())?;
    let (dirs, files, degraded) = tally(&entries);
    assert_eq!((dirs, files, degraded), (1, 2, 0));
    assert_eq!(
        report_line(dirs, files, degraded),
        "Found 3 contents: 1 folders, 2 files"
    );
    Ok(())
}

#[test]
fn listing_twice_is_identical() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    let request = ListingRequest {
        visibility: Visibility::AlmostAll,
        ..ListingRequest::default()
    };
    let theme = Theme::dark();
    let renderer = Renderer::new(&theme, plain_options());

    let first = renderer.grid_lines(&listed(&tmp, &request)?, 60);
    let second = renderer.grid_lines(&listed(&tmp, &request)?, 60);
    assert_eq!(first, second);
    Ok(())
}

#[cfg(unix)]
#[test]
fn broken_symlinks_are_listed_not_dropped() -> Result<(), Box<dyn error::Error>> {
    let tmp = fixture()?;
    std::os::unix::fs::symlink("nowhere", tmp.path().join("dangling"))?;

    let entries = listed(&tmp, &ListingRequest::default())?;
    let dangling = entries
        .iter()
        .find(|e| e.name() == "dangling")
        .expect("dangling listed");
    assert!(dangling.is_broken_symlink());
    Ok(())
}
