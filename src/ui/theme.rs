//! Color themes for rendered entries.
//!
//! A [Theme] is an explicit object handed to the renderer; nothing in
//! the pipeline consults a global color registry. Two presets ship
//! (dark and light), and individual slots can be overridden from the
//! `[theme]` table of `glint.toml`.

use crate::core::{Entry, EntryKind, GitMark, LinkTarget};
use crate::utils::parse_color;

use crossterm::style::Color;
use serde::Deserialize;

/// Which preset a theme starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

/// Resolved colors for every slot the renderer paints.
#[derive(Debug, Clone)]
pub struct Theme {
    pub dir: Color,
    pub file: Color,
    pub executable: Color,
    pub symlink: Color,
    pub broken_symlink: Color,
    pub git_new: Color,
    pub git_modified: Color,
    pub git_deleted: Color,
    pub git_renamed: Color,
    pub git_untracked: Color,
    pub git_ignored: Color,
}

/// Optional color names read from `glint.toml`, applied on top of a
/// preset. Values accept the same syntax as [parse_color].
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ThemeOverrides {
    dir: Option<String>,
    file: Option<String>,
    executable: Option<String>,
    symlink: Option<String>,
    broken_symlink: Option<String>,
    git_new: Option<String>,
    git_modified: Option<String>,
    git_deleted: Option<String>,
    git_renamed: Option<String>,
    git_untracked: Option<String>,
    git_ignored: Option<String>,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            dir: Color::Blue,
            file: Color::Grey,
            executable: Color::Green,
            symlink: Color::Cyan,
            broken_symlink: Color::Red,
            git_new: Color::Green,
            git_modified: Color::Yellow,
            git_deleted: Color::Red,
            git_renamed: Color::Magenta,
            git_untracked: Color::DarkGrey,
            git_ignored: Color::DarkGrey,
        }
    }

    pub fn light() -> Self {
        Theme {
            dir: Color::DarkBlue,
            file: Color::Black,
            executable: Color::DarkGreen,
            symlink: Color::DarkCyan,
            broken_symlink: Color::DarkRed,
            git_new: Color::DarkGreen,
            git_modified: Color::DarkYellow,
            git_deleted: Color::DarkRed,
            git_renamed: Color::DarkMagenta,
            git_untracked: Color::Grey,
            git_ignored: Color::Grey,
        }
    }

    pub fn preset(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Theme::dark(),
            ThemeVariant::Light => Theme::light(),
        }
    }

    /// Applies config-file overrides on top of this theme.
    pub fn with_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        let slots = [
            (&overrides.dir, &mut self.dir),
            (&overrides.file, &mut self.file),
            (&overrides.executable, &mut self.executable),
            (&overrides.symlink, &mut self.symlink),
            (&overrides.broken_symlink, &mut self.broken_symlink),
            (&overrides.git_new, &mut self.git_new),
            (&overrides.git_modified, &mut self.git_modified),
            (&overrides.git_deleted, &mut self.git_deleted),
            (&overrides.git_renamed, &mut self.git_renamed),
            (&overrides.git_untracked, &mut self.git_untracked),
            (&overrides.git_ignored, &mut self.git_ignored),
        ];
        for (value, slot) in slots {
            if let Some(name) = value {
                *slot = parse_color(name);
            }
        }
        self
    }

    /// Color for an entry's icon and name. Total over every kind.
    pub fn color_for(&self, entry: &Entry) -> Color {
        match entry.kind() {
            EntryKind::Dir => self.dir,
            EntryKind::Symlink {
                target: LinkTarget::Broken,
            } => self.broken_symlink,
            EntryKind::Symlink { .. } => self.symlink,
            EntryKind::File => {
                if entry.is_executable() {
                    self.executable
                } else {
                    self.file
                }
            }
        }
    }

    /// Color for a git status marker.
    pub fn color_for_mark(&self, mark: GitMark) -> Color {
        match mark {
            GitMark::New => self.git_new,
            GitMark::Modified => self.git_modified,
            GitMark::Deleted => self.git_deleted,
            GitMark::Renamed => self.git_renamed,
            GitMark::TypeChanged => self.git_renamed,
            GitMark::Untracked => self.git_untracked,
            GitMark::Ignored => self.git_ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntryMeta;
    use std::time::UNIX_EPOCH;

    fn entry(name: &str, kind: EntryKind, mode: u32) -> Entry {
        Entry::new(
            name.into(),
            kind,
            Some(EntryMeta {
                size: 0,
                modified: UNIX_EPOCH,
                mode,
                nlink: 1,
                uid: 0,
                gid: 0,
            }),
            None,
        )
    }

    #[test]
    fn kinds_map_to_their_slots() {
        let theme = Theme::dark();
        assert_eq!(theme.color_for(&entry("d", EntryKind::Dir, 0o755)), theme.dir);
        assert_eq!(
            theme.color_for(&entry("x", EntryKind::File, 0o755)),
            theme.executable
        );
        assert_eq!(
            theme.color_for(&entry("f", EntryKind::File, 0o644)),
            theme.file
        );
        assert_eq!(
            theme.color_for(&entry(
                "l",
                EntryKind::Symlink {
                    target: LinkTarget::Broken
                },
                0o777
            )),
            theme.broken_symlink
        );
    }

    #[test]
    fn overrides_replace_only_named_slots() {
        let overrides: ThemeOverrides =
            toml::from_str("dir = \"#ff0000\"\nexecutable = \"magenta\"").expect("parse");
        let theme = Theme::dark().with_overrides(&overrides);
        assert_eq!(theme.dir, Color::Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(theme.executable, Color::Magenta);
        assert_eq!(theme.file, Theme::dark().file);
    }
}
