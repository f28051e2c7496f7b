//! Mapping from entries to Nerd Font icons.
//!
//! Lookup order for files: exact special name, then extension. For
//! directories: exact special name only. Anything without a mapping
//! falls back to a default glyph, so icon resolution can never fail a
//! listing.

use crate::core::{Entry, EntryKind, LinkTarget};

use phf::phf_map;

const DEFAULT_FILE: &str = "\u{f016}";
const DEFAULT_DIR: &str = "\u{f115}";
const LINK: &str = "\u{f0c1}";
const LINK_DIR: &str = "\u{f482}";
const LINK_BROKEN: &str = "\u{f127}";

/// Extension to icon mapping for regular files.
static EXT_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "rs" => "\u{e7a8}",
    "py" => "\u{e606}",
    "rb" => "\u{e739}",
    "js" => "\u{e74e}",
    "mjs" => "\u{e74e}",
    "ts" => "\u{e628}",
    "tsx" => "\u{e7ba}",
    "jsx" => "\u{e7ba}",
    "go" => "\u{e626}",
    "c" => "\u{e61e}",
    "cpp" => "\u{e61d}",
    "cc" => "\u{e61d}",
    "h" => "\u{f0fd}",
    "hpp" => "\u{f0fd}",
    "java" => "\u{e738}",
    "kt" => "\u{e634}",
    "swift" => "\u{e755}",
    "php" => "\u{e73d}",
    "lua" => "\u{e620}",
    "sh" => "\u{f489}",
    "bash" => "\u{f489}",
    "zsh" => "\u{f489}",
    "fish" => "\u{f489}",
    "vim" => "\u{e7c5}",
    "html" => "\u{f13b}",
    "htm" => "\u{f13b}",
    "css" => "\u{e749}",
    "scss" => "\u{e749}",
    "md" => "\u{f48a}",
    "markdown" => "\u{f48a}",
    "rst" => "\u{f15c}",
    "txt" => "\u{f15c}",
    "log" => "\u{f18d}",
    "json" => "\u{e60b}",
    "yml" => "\u{e615}",
    "yaml" => "\u{e615}",
    "toml" => "\u{e615}",
    "ini" => "\u{e615}",
    "cfg" => "\u{e615}",
    "conf" => "\u{e615}",
    "xml" => "\u{f05c0}",
    "sql" => "\u{e706}",
    "csv" => "\u{f1c3}",
    "lock" => "\u{f023}",
    "zip" => "\u{f410}",
    "tar" => "\u{f410}",
    "gz" => "\u{f410}",
    "xz" => "\u{f410}",
    "zst" => "\u{f410}",
    "7z" => "\u{f410}",
    "png" => "\u{f1c5}",
    "jpg" => "\u{f1c5}",
    "jpeg" => "\u{f1c5}",
    "gif" => "\u{f1c5}",
    "bmp" => "\u{f1c5}",
    "svg" => "\u{f1c5}",
    "ico" => "\u{f1c5}",
    "mp3" => "\u{f001}",
    "wav" => "\u{f001}",
    "flac" => "\u{f001}",
    "ogg" => "\u{f001}",
    "mp4" => "\u{f03d}",
    "mkv" => "\u{f03d}",
    "webm" => "\u{f03d}",
    "avi" => "\u{f03d}",
    "pdf" => "\u{f1c1}",
    "doc" => "\u{f1c2}",
    "docx" => "\u{f1c2}",
    "xls" => "\u{f1c3}",
    "xlsx" => "\u{f1c3}",
    "ppt" => "\u{f1c4}",
    "pptx" => "\u{f1c4}",
    "ttf" => "\u{f031}",
    "otf" => "\u{f031}",
    "woff" => "\u{f031}",
    "iso" => "\u{e271}",
    "deb" => "\u{e77d}",
    "rpm" => "\u{e7bb}",
    "exe" => "\u{f17a}",
    "dll" => "\u{f17a}",
    "so" => "\u{f121}",
    "o" => "\u{f121}",
    "bin" => "\u{f471}",
    "patch" => "\u{f440}",
    "diff" => "\u{f440}",
};

/// Exact file names that carry their own icon, regardless of extension.
static SPECIAL_FILE_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "README" => "\u{f48a}",
    "README.md" => "\u{f48a}",
    "LICENSE" => "\u{f0219}",
    "LICENSE.md" => "\u{f0219}",
    "LICENSE-MIT" => "\u{f0219}",
    "LICENSE-APACHE" => "\u{f0219}",
    "COPYING" => "\u{f0219}",
    "Makefile" => "\u{e779}",
    "Justfile" => "\u{e779}",
    "CMakeLists.txt" => "\u{e794}",
    "Dockerfile" => "\u{e7b0}",
    "docker-compose.yml" => "\u{e7b0}",
    "Cargo.toml" => "\u{e7a8}",
    "Cargo.lock" => "\u{f023}",
    "package.json" => "\u{e718}",
    "package-lock.json" => "\u{f023}",
    "Gemfile" => "\u{e739}",
    "Rakefile" => "\u{e739}",
    "requirements.txt" => "\u{e606}",
    "pyproject.toml" => "\u{e606}",
    "go.mod" => "\u{e626}",
    "go.sum" => "\u{f023}",
    ".gitignore" => "\u{e702}",
    ".gitattributes" => "\u{e702}",
    ".gitmodules" => "\u{e702}",
    ".bashrc" => "\u{f489}",
    ".zshrc" => "\u{f489}",
    ".profile" => "\u{f489}",
    ".vimrc" => "\u{e7c5}",
    ".editorconfig" => "\u{e615}",
    ".env" => "\u{f462}",
};

/// Directory names that carry their own icon.
static SPECIAL_DIR_ICON_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    ".git" => "\u{e5fb}",
    ".github" => "\u{e5fd}",
    ".config" => "\u{e5fc}",
    "node_modules" => "\u{e5fa}",
    "target" => "\u{e7a8}",
    "src" => "\u{f121}",
    "bin" => "\u{e5fc}",
    "lib" => "\u{f121}",
    "doc" => "\u{f02d}",
    "docs" => "\u{f02d}",
    "test" => "\u{f0668}",
    "tests" => "\u{f0668}",
    "home" => "\u{f015}",
    "Desktop" => "\u{f108}",
    "Documents" => "\u{f02d}",
    "Downloads" => "\u{f019}",
    "Music" => "\u{f001}",
    "Pictures" => "\u{f03e}",
    "Videos" => "\u{f03d}",
};

/// Resolves the icon for an entry. Never fails; unmapped entries get the
/// default file or folder glyph.
pub fn icon_for(entry: &Entry) -> &'static str {
    match entry.kind() {
        EntryKind::Symlink { target } => match target {
            LinkTarget::Dir => LINK_DIR,
            LinkTarget::File => LINK,
            LinkTarget::Broken => LINK_BROKEN,
        },
        EntryKind::Dir => SPECIAL_DIR_ICON_MAP
            .get(entry.name())
            .copied()
            .unwrap_or(DEFAULT_DIR),
        EntryKind::File => {
            if let Some(icon) = SPECIAL_FILE_ICON_MAP.get(entry.name()) {
                return icon;
            }
            extension(entry.name())
                .and_then(|ext| {
                    EXT_ICON_MAP
                        .get(ext)
                        .copied()
                        .or_else(|| EXT_ICON_MAP.get(ext.to_ascii_lowercase().as_str()).copied())
                })
                .unwrap_or(DEFAULT_FILE)
        }
    }
}

/// Extension of a file name, ignoring a leading dot so `.bashrc` has no
/// extension while `archive.tar.gz` yields `gz`.
fn extension(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => Some(&name[idx + 1..]),
        _ => None,
    }
}
