//! Turns laid-out entries into final text lines.
//!
//! The renderer owns no pipeline logic: it receives already filtered and
//! sorted entries (or a built tree) and produces `Vec<String>` for the
//! caller to print. Width math is done on the undecorated cell text with
//! `unicode-width`, then colors are applied, so ANSI codes never skew
//! the padding.

use crate::core::layout::{GRID_GAP, TreeNode, fit_grid};
use crate::core::{Entry, EntryKind, GitIndex};
use crate::ui::icons::icon_for;
use crate::ui::theme::Theme;

use chrono::{DateTime, Local};
use crossterm::style::{Color, Stylize};
use humansize::{BINARY, format_size};
use unicode_width::UnicodeWidthStr;

/// Width of the modification-time column (`%Y-%m-%d %H:%M`).
const TIME_WIDTH: usize = 16;

/// Presentation switches resolved from flags and config.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub icons: bool,
    pub color: bool,
    pub human_readable: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            icons: true,
            color: true,
            human_readable: true,
        }
    }
}

/// One decorated entry: styled text plus its display width.
struct Cell {
    styled: String,
    width: usize,
}

/// Stateless line producer for every layout mode.
pub struct Renderer<'a> {
    theme: &'a Theme,
    options: RenderOptions,
    git: Option<&'a GitIndex>,
}

impl<'a> Renderer<'a> {
    pub fn new(theme: &'a Theme, options: RenderOptions) -> Self {
        Renderer {
            theme,
            options,
            git: None,
        }
    }

    /// Attaches git markers; entries are looked up by name against the
    /// scanned listing root.
    pub fn with_git(mut self, git: &'a GitIndex) -> Self {
        self.git = Some(git);
        self
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.options.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Builds the decorated cell for one entry. `with_link` appends the
    /// symlink target, which only the long format shows.
    fn cell(&self, entry: &Entry, with_link: bool) -> Cell {
        let mut styled = String::new();
        let mut width = 0;

        if let Some(git) = self.git {
            match git.mark_for(entry.name()) {
                Some(mark) => {
                    let letter = mark.letter().to_string();
                    styled.push_str(&self.paint(&letter, self.theme.color_for_mark(mark)));
                }
                None => styled.push(' '),
            }
            styled.push(' ');
            width += 2;
        }

        let color = self.theme.color_for(entry);

        if self.options.icons {
            let icon = icon_for(entry);
            styled.push_str(&self.paint(icon, color));
            styled.push(' ');
            width += icon.width() + 1;
        }

        styled.push_str(&self.paint(entry.name(), color));
        width += entry.name().width();

        if with_link && let Some(target) = entry.link_target() {
            let target = target.to_string_lossy();
            styled.push_str(" -> ");
            styled.push_str(&self.paint(&target, color));
            width += 4 + target.as_ref().width();
        }

        Cell { styled, width }
    }

    /// One entry per line.
    pub fn row_lines(&self, entries: &[Entry]) -> Vec<String> {
        entries
            .iter()
            .map(|entry| self.cell(entry, false).styled)
            .collect()
    }

    /// Column-major grid within `budget` terminal cells. Falls back to
    /// one entry per line when a single cell exceeds the budget.
    pub fn grid_lines(&self, entries: &[Entry], budget: usize) -> Vec<String> {
        let cells: Vec<Cell> = entries.iter().map(|e| self.cell(e, false)).collect();
        let widths: Vec<usize> = cells.iter().map(|c| c.width).collect();

        let Some(plan) = fit_grid(&widths, budget, GRID_GAP) else {
            return self.row_lines(entries);
        };

        let mut lines = Vec::with_capacity(plan.rows);
        for row in 0..plan.rows {
            let mut line = String::new();
            for (col, col_width) in plan.col_widths.iter().enumerate() {
                let idx = col * plan.rows + row;
                let Some(cell) = cells.get(idx) else { break };
                line.push_str(&cell.styled);
                // Pad unless this entry ends its line.
                if idx + plan.rows < cells.len() {
                    line.push_str(&" ".repeat(col_width - cell.width + GRID_GAP));
                }
            }
            lines.push(line);
        }
        lines
    }

    /// Long format: permissions, links, owner, group, size, mtime, name.
    pub fn long_lines(&self, entries: &[Entry]) -> Vec<String> {
        let nlinks: Vec<String> = entries.iter().map(meta_field(|m| m.nlink)).collect();
        let uids: Vec<String> = entries.iter().map(meta_field(|m| m.uid)).collect();
        let gids: Vec<String> = entries.iter().map(meta_field(|m| m.gid)).collect();
        let sizes: Vec<String> = entries.iter().map(|e| self.size_cell(e)).collect();

        let nlink_w = column_width(&nlinks);
        let uid_w = column_width(&uids);
        let gid_w = column_width(&gids);
        let size_w = column_width(&sizes);

        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                format!(
                    "{} {:>nlink_w$} {:>uid_w$} {:>gid_w$} {:>size_w$} {:>TIME_WIDTH$} {}",
                    mode_cell(entry),
                    nlinks[i],
                    uids[i],
                    gids[i],
                    sizes[i],
                    time_cell(entry),
                    self.cell(entry, true).styled,
                )
            })
            .collect()
    }

    /// Hierarchical listing with branch connectors.
    pub fn tree_lines(&self, nodes: &[TreeNode]) -> Vec<String> {
        let mut lines = Vec::new();
        self.tree_walk(nodes, "", &mut lines);
        lines
    }

    fn tree_walk(&self, nodes: &[TreeNode], prefix: &str, out: &mut Vec<String>) {
        for (i, node) in nodes.iter().enumerate() {
            let last = i + 1 == nodes.len();
            let connector = if last { "└── " } else { "├── " };
            out.push(format!(
                "{prefix}{connector}{}",
                self.cell(&node.entry, false).styled
            ));
            if !node.children.is_empty() {
                let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
                self.tree_walk(&node.children, &child_prefix, out);
            }
        }
    }

    /// Renders a path that turned out to be a single file rather than a
    /// directory.
    pub fn single_lines(&self, entry: &Entry, long: bool) -> Vec<String> {
        if long {
            self.long_lines(std::slice::from_ref(entry))
        } else {
            self.row_lines(std::slice::from_ref(entry))
        }
    }

    fn size_cell(&self, entry: &Entry) -> String {
        match entry.size() {
            Some(size) if self.options.human_readable => format_size(size, BINARY),
            Some(size) => size.to_string(),
            None => "-".to_string(),
        }
    }
}

/// Summary line for `--report`.
pub fn report_line(dirs: usize, files: usize, degraded: usize) -> String {
    let mut line = format!(
        "Found {} contents: {} folders, {} files",
        dirs + files,
        dirs,
        files
    );
    if degraded > 0 {
        line.push_str(&format!(", {degraded} unreadable"));
    }
    line
}

/// Counts (directories, files, degraded) over a flat listing.
pub fn tally(entries: &[Entry]) -> (usize, usize, usize) {
    let dirs = entries.iter().filter(|e| e.is_dir()).count();
    let degraded = entries.iter().filter(|e| e.meta().is_none()).count();
    (dirs, entries.len() - dirs, degraded)
}

fn column_width(cells: &[String]) -> usize {
    cells.iter().map(|c| c.len()).max().unwrap_or(1)
}

/// Formats one numeric metadata field, with `?` for degraded entries.
fn meta_field<T: ToString>(
    get: impl Fn(&crate::core::EntryMeta) -> T,
) -> impl Fn(&Entry) -> String {
    move |entry| match entry.meta() {
        Some(meta) => get(meta).to_string(),
        None => "?".to_string(),
    }
}

fn time_cell(entry: &Entry) -> String {
    match entry.modified() {
        Some(mtime) => {
            let dt: DateTime<Local> = DateTime::from(mtime);
            dt.format("%Y-%m-%d %H:%M").to_string()
        }
        None => "-".to_string(),
    }
}

/// `ls`-style mode string: kind letter plus three rwx triples, with
/// setuid/setgid/sticky folded into the execute positions.
fn mode_cell(entry: &Entry) -> String {
    let Some(meta) = entry.meta() else {
        return "??????????".to_string();
    };

    let mut out = String::with_capacity(10);
    out.push(match entry.kind() {
        EntryKind::Dir => 'd',
        EntryKind::Symlink { .. } => 'l',
        EntryKind::File => '-',
    });

    let mode = meta.mode;
    for (shift, special_bit, special_char) in
        [(6, 0o4000, 's'), (3, 0o2000, 's'), (0, 0o1000, 't')]
    {
        out.push(if mode >> (shift + 2) & 1 != 0 { 'r' } else { '-' });
        out.push(if mode >> (shift + 1) & 1 != 0 { 'w' } else { '-' });
        let exec = mode >> shift & 1 != 0;
        let special = mode & special_bit != 0;
        out.push(match (special, exec) {
            (true, true) => special_char,
            (true, false) => special_char.to_ascii_uppercase(),
            (false, true) => 'x',
            (false, false) => '-',
        });
    }
    out
}
