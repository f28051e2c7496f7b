//! Orchestration of one glint invocation.
//!
//! Walks the requested paths and drives the pipeline for each: read →
//! filter → sort → layout → render → print. Only a failure on a listed
//! root path makes the exit status non-zero; everything below that
//! degrades in-band.

use crate::config::Config;
use crate::core::layout::TreeNode;
use crate::core::provider::FsProvider;
use crate::core::{
    EntryKind, GitIndex, LayoutMode, LinkTarget, OsProvider, build_tree, collect_entries,
    sort_entries,
};
use crate::ui::theme::Theme;
use crate::ui::{RenderOptions, Renderer, report_line, tally};
use crate::utils::cli::Invocation;
use crate::utils::terminal_width;

use std::io::{self, IsTerminal};
use std::path::Path;

/// Runs the invocation and returns the process exit code.
pub fn run(inv: &Invocation, config: &Config) -> i32 {
    let theme = Theme::preset(inv.theme).with_overrides(config.theme_overrides());
    let options = RenderOptions {
        icons: inv.icons,
        // Piped output stays plain so the listing survives grep and diff.
        color: io::stdout().is_terminal(),
        human_readable: inv.human_readable,
    };

    let fs = OsProvider;
    let multiple = inv.paths.len() > 1;
    let mut status = 0;

    for (idx, path) in inv.paths.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        if multiple {
            println!("{}:", path.display());
        }
        if let Err(e) = list_path(&fs, path, inv, &theme, options) {
            eprintln!("gls: cannot access '{}': {}", path.display(), e);
            status = 1;
        }
    }
    status
}

fn list_path(
    fs: &OsProvider,
    path: &Path,
    inv: &Invocation,
    theme: &Theme,
    options: RenderOptions,
) -> io::Result<()> {
    let attrs = fs.stat(path)?;
    let points_at_dir = matches!(
        attrs.kind,
        EntryKind::Dir
            | EntryKind::Symlink {
                target: LinkTarget::Dir
            }
    );

    // A plain file skips the pipeline and renders on its own.
    if !points_at_dir {
        let entry = attrs.into_entry(path.to_string_lossy().into_owned());
        let renderer = Renderer::new(theme, options);
        let long = inv.request.layout == LayoutMode::Long;
        for line in renderer.single_lines(&entry, long) {
            println!("{line}");
        }
        return Ok(());
    }

    // Git markers decorate flat listings; tree entries are nested paths
    // the root-relative index cannot name.
    let git = (inv.git_status && inv.request.layout != LayoutMode::Tree)
        .then(|| GitIndex::scan(path));

    let mut renderer = Renderer::new(theme, options);
    if let Some(git) = git.as_ref() {
        renderer = renderer.with_git(git);
    }

    let (lines, counts) = match inv.request.layout {
        LayoutMode::Tree => {
            let nodes = build_tree(fs, path, &inv.request)?;
            let counts = TreeNode::tally(&nodes);
            (renderer.tree_lines(&nodes), counts)
        }
        layout => {
            let entries = sort_entries(collect_entries(fs, path, &inv.request)?, &inv.request);
            let counts = tally(&entries);
            let lines = match layout {
                LayoutMode::Long => renderer.long_lines(&entries),
                LayoutMode::OnePerLine => renderer.row_lines(&entries),
                _ => renderer.grid_lines(&entries, terminal_width()),
            };
            (lines, counts)
        }
    };

    for line in &lines {
        println!("{line}");
    }

    if inv.report {
        if !lines.is_empty() {
            println!();
        }
        let (dirs, files, degraded) = counts;
        println!("{}", report_line(dirs, files, degraded));
    }
    Ok(())
}
