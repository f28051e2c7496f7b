//! Presentation layer for glint.
//!
//! - [icons]: entry to Nerd Font glyph mapping.
//! - [theme]: color presets and config overrides.
//! - [render]: the line renderer for every layout mode.

pub mod icons;
pub mod render;
pub mod theme;

pub use render::{RenderOptions, Renderer, report_line, tally};
pub use theme::{Theme, ThemeVariant};
