//! Helpers for glint.
//!
//! - Color parsing from names or hex codes
//! - Terminal width detection with an environment fallback

use crossterm::style::Color;
use once_cell::sync::Lazy;

/// Width assumed when the terminal cannot be queried, honoring COLUMNS
/// the way non-interactive callers expect.
static FALLBACK_WIDTH: Lazy<usize> = Lazy::new(|| {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|w| *w > 0)
        .unwrap_or(80)
});

/// Current terminal width in cells.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => *FALLBACK_WIDTH,
    }
}

/// Parses a string (color name or hex) into a crossterm [Color].
///
/// Supports standard names (red, green, etc.) as well as hex values
/// (#RRGGBB or #RGB). Unknown input falls back to the terminal default.
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "darkred" => Color::DarkRed,
        "green" => Color::Green,
        "darkgreen" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "darkyellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "darkblue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "darkmagenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "darkcyan" => Color::DarkCyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        "darkgrey" | "darkgray" => Color::DarkGrey,
        _ => {
            if let Some(hex) = s.strip_prefix('#') {
                match hex.len() {
                    6 => {
                        if let Ok(rgb) = u32::from_str_radix(hex, 16) {
                            return rgb_color(rgb);
                        }
                    }
                    3 => {
                        let expanded = hex
                            .chars()
                            .map(|c| format!("{}{}", c, c))
                            .collect::<String>();
                        if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                            return rgb_color(rgb);
                        }
                    }
                    _ => {}
                }
            }
            // fallback
            Color::Reset
        }
    }
}

fn rgb_color(rgb: u32) -> Color {
    Color::Rgb {
        r: ((rgb >> 16) & 0xFF) as u8,
        g: ((rgb >> 8) & 0xFF) as u8,
        b: (rgb & 0xFF) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_parse() {
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("DarkBlue"), Color::DarkBlue);
        assert_eq!(parse_color("gray"), Color::Grey);
        assert_eq!(parse_color("default"), Color::Reset);
    }

    #[test]
    fn hex_colors_parse_in_both_lengths() {
        assert_eq!(
            parse_color("#102030"),
            Color::Rgb {
                r: 0x10,
                g: 0x20,
                b: 0x30
            }
        );
        assert_eq!(
            parse_color("#abc"),
            Color::Rgb {
                r: 0xaa,
                g: 0xbb,
                b: 0xcc
            }
        );
    }

    #[test]
    fn junk_falls_back_to_reset() {
        assert_eq!(parse_color("not-a-color"), Color::Reset);
        assert_eq!(parse_color("#12"), Color::Reset);
        assert_eq!(parse_color("#zzzzzz"), Color::Reset);
    }
}
