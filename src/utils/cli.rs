//! Command-line argument parsing and help for glint.
//!
//! Flags decode into a [ListingRequest] plus [DisplayOptions]; defaults
//! for the display side come from `glint.toml`. Parsing is plain
//! argument matching, no derive machinery.

use crate::config::Config;
use crate::core::{
    Grouping, LayoutMode, ListingRequest, SortKey, TypeFilter, Visibility,
};
use crate::ui::theme::ThemeVariant;

use std::path::PathBuf;

/// Tree depth used by a bare `--tree`.
const DEFAULT_TREE_DEPTH: usize = 3;

/// Fully decoded invocation: pipeline request, presentation switches,
/// and the paths to list.
#[derive(Debug)]
pub struct Invocation {
    pub request: ListingRequest,
    pub paths: Vec<PathBuf>,
    pub icons: bool,
    pub human_readable: bool,
    pub theme: ThemeVariant,
    pub report: bool,
    pub git_status: bool,
}

/// What the process should do after argument handling.
pub enum CliAction {
    Run(Box<Invocation>),
    Exit(i32),
}

/// Parses `std::env::args`, with config-supplied defaults.
pub fn handle_args(config: &Config) -> CliAction {
    parse(std::env::args().skip(1), config)
}

pub fn parse<I>(args: I, config: &Config) -> CliAction
where
    I: IntoIterator<Item = String>,
{
    let mut request = ListingRequest::default();
    if config.dirs_first() {
        request.grouping = Grouping::DirsFirst;
    }

    let mut inv = Invocation {
        request,
        paths: Vec::new(),
        icons: config.icons(),
        human_readable: config.human_readable(),
        theme: config.theme_variant(),
        report: false,
        git_status: false,
    };

    for arg in args {
        match arg.as_str() {
            "-1" => inv.request.layout = LayoutMode::OnePerLine,
            "-l" | "--long" => inv.request.layout = LayoutMode::Long,
            "-a" | "--all" => inv.request.visibility = Visibility::All,
            "-A" | "--almost-all" => inv.request.visibility = Visibility::AlmostAll,
            "-d" | "--dirs" => inv.request.type_filter = TypeFilter::DirsOnly,
            "-f" | "--files" => inv.request.type_filter = TypeFilter::FilesOnly,
            "-t" => inv.request.sort_key = SortKey::Time,
            "-S" => inv.request.sort_key = SortKey::Size,
            "-r" | "--reverse" => inv.request.reverse = true,
            "--sd" | "--sort-dirs" | "--group-directories-first" => {
                inv.request.grouping = Grouping::DirsFirst;
            }
            "--sf" | "--sort-files" => inv.request.grouping = Grouping::FilesFirst,
            "--report" => inv.report = true,
            "--gs" | "--git-status" => inv.git_status = true,
            "--light" => inv.theme = ThemeVariant::Light,
            "--dark" => inv.theme = ThemeVariant::Dark,
            "--no-icons" => inv.icons = false,
            "--non-human-readable" => inv.human_readable = false,
            "--tree" => {
                inv.request.layout = LayoutMode::Tree;
                inv.request.tree_depth = Some(DEFAULT_TREE_DEPTH);
            }
            "-h" | "--help" => {
                print_help();
                return CliAction::Exit(0);
            }
            "-v" | "--version" => {
                println!("glint {}", env!("CARGO_PKG_VERSION"));
                return CliAction::Exit(0);
            }
            s if s.starts_with("--tree=") => {
                inv.request.layout = LayoutMode::Tree;
                match parse_tree_depth(&s["--tree=".len()..]) {
                    Ok(depth) => inv.request.tree_depth = depth,
                    Err(msg) => {
                        eprintln!("gls: {}", msg);
                        return CliAction::Exit(1);
                    }
                }
            }
            s if s.starts_with("--sort=") => {
                match parse_sort_key(&s["--sort=".len()..]) {
                    Ok(key) => inv.request.sort_key = key,
                    Err(msg) => {
                        eprintln!("gls: {}", msg);
                        return CliAction::Exit(1);
                    }
                }
            }
            s if s.starts_with('-') && s.len() > 1 => {
                eprintln!("gls: unknown option '{}'", s);
                eprintln!("Try 'gls --help' for available options.");
                return CliAction::Exit(1);
            }
            _ => inv.paths.push(PathBuf::from(arg)),
        }
    }

    if inv.paths.is_empty() {
        inv.paths.push(PathBuf::from("."));
    }
    CliAction::Run(Box::new(inv))
}

fn parse_sort_key(value: &str) -> Result<SortKey, String> {
    match value {
        "name" => Ok(SortKey::Name),
        "time" => Ok(SortKey::Time),
        "size" => Ok(SortKey::Size),
        "none" => Ok(SortKey::Unsorted),
        other => Err(format!(
            "invalid sort key '{}' (expected name, time, size or none)",
            other
        )),
    }
}

/// An explicit depth of 0 lifts the limit entirely.
fn parse_tree_depth(value: &str) -> Result<Option<usize>, String> {
    if value.is_empty() {
        return Ok(Some(DEFAULT_TREE_DEPTH));
    }
    match value.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(depth) => Ok(Some(depth)),
        Err(_) => Err(format!("invalid depth for --tree: '{}'", value)),
    }
}

fn print_help() {
    println!(
        r#"glint - a colorized directory listing tool

USAGE:
  gls [OPTIONS] [PATH]...

PATH:
  Files or directories to list (defaults to the current directory).
  Multiple paths are listed in sequence.

DISPLAY:
  -1                      One entry per line
  -l, --long              Long format (permissions, links, owner, group,
                          size, modification time)
      --tree[=DEPTH]      Recursive tree view. Omitting DEPTH uses {depth};
                          a DEPTH of 0 removes the limit
      --report            Print a summary of listed contents
      --no-icons          Plain names, no Nerd Font glyphs
      --non-human-readable  Sizes in raw bytes
      --light, --dark     Color scheme for light or dark backgrounds

FILTERING:
  -a, --all               Include entries starting with '.'
  -A, --almost-all        Same as --all ('.' and '..' are never listed)
  -d, --dirs              Directories only
  -f, --files             Files only

SORTING:
      --sort=KEY          name, time, size or none
  -t                      Shortcut for --sort=time (newest first)
  -S                      Shortcut for --sort=size (largest first)
  -r, --reverse           Reverse the selected order
      --sd, --sort-dirs   Group directories before files
      --sf, --sort-files  Group files before directories

MISC:
      --gs, --git-status  Show the git status of each entry
  -h, --help              Print help information
  -v, --version           Print the installed version

ENVIRONMENT:
  GLINT_CONFIG            Override the default config path
"#,
        depth = DEFAULT_TREE_DEPTH
    );
}
