//! Color configuration for the TUI.

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

/// One palette. The light palette is the default; [`ColorConfig::dark`]
/// provides the other built-in one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub background: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub text: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub bookmarked: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub metadata_author: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub metadata_score: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub metadata_age: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub metadata_link: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub pending: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_bg: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: Color::White,
            text: Color::Black,
            border: Color::Blue,
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            bookmarked: Color::Red,
            metadata_author: Color::DarkGray,
            metadata_score: Color::Magenta,
            metadata_age: Color::DarkGray,
            metadata_link: Color::Blue,
            pending: Color::Gray,
            status_fg: Color::White,
            status_bg: Color::Blue,
        }
    }
}

impl ColorConfig {
    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            text: Color::White,
            border: Color::Cyan,
            selection_bg: Color::Cyan,
            selection_fg: Color::Black,
            bookmarked: Color::LightRed,
            metadata_author: Color::Yellow,
            metadata_score: Color::LightMagenta,
            metadata_age: Color::Gray,
            metadata_link: Color::LightBlue,
            pending: Color::DarkGray,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}

/// Custom deserializer for Color that supports named colors and hex codes.
fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

/// Parse a color string into a ratatui Color.
///
/// Supports:
/// - Named colors: "Black", "Red", "Green", "Yellow", "Blue", "Magenta", "Cyan", "Gray",
///   "DarkGray", "LightRed", "LightGreen", "LightYellow", "LightBlue", "LightMagenta",
///   "LightCyan", "White", "Reset"
/// - Hex colors: "#RRGGBB" or "#RGB"
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();

    // Handle hex colors
    if s.starts_with('#') {
        return parse_hex_color(s);
    }

    // Handle named colors (case-insensitive)
    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        "reset" => Ok(Color::Reset),
        _ => Err(format!("Unknown color: {}", s)),
    }
}

/// Parse `#RRGGBB` or the short `#RGB` form.
fn parse_hex_color(s: &str) -> Result<Color, String> {
    let hex = s.trim_start_matches('#');
    let invalid = || format!("Invalid hex color: {}", s);

    if !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize, width: usize| {
        u8::from_str_radix(&hex[i * width..(i + 1) * width], 16).map_err(|_| invalid())
    };

    match hex.len() {
        6 => Ok(Color::Rgb(channel(0, 2)?, channel(1, 2)?, channel(2, 2)?)),
        3 => Ok(Color::Rgb(
            channel(0, 1)? * 17,
            channel(1, 1)? * 17,
            channel(2, 1)? * 17,
        )),
        _ => Err(format!("Invalid hex color format: {}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors_any_case() {
        assert_eq!(parse_color_string("LightRed").unwrap(), Color::LightRed);
        assert_eq!(parse_color_string("darkgrey").unwrap(), Color::DarkGray);
        assert_eq!(parse_color_string(" WHITE ").unwrap(), Color::White);
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color_string("#ff6600").unwrap(), Color::Rgb(255, 102, 0));
        assert_eq!(parse_color_string("#F60").unwrap(), Color::Rgb(255, 102, 0));
    }

    #[test]
    fn test_parse_invalid_colors() {
        assert!(parse_color_string("orange").is_err());
        assert!(parse_color_string("#GGGGGG").is_err());
        assert!(parse_color_string("#12345").is_err());
        assert!(parse_color_string("#ééé").is_err());
    }

    #[test]
    fn test_dark_palette_differs() {
        assert_ne!(ColorConfig::dark(), ColorConfig::default());
        assert_eq!(ColorConfig::dark().background, Color::Black);
    }

    #[test]
    fn test_palette_from_toml() {
        let colors: ColorConfig = toml::from_str(
            r##"
            bookmarked = "#ff6600"
            pending = "Yellow"
            "##,
        )
        .unwrap();

        assert_eq!(colors.bookmarked, Color::Rgb(255, 102, 0));
        assert_eq!(colors.pending, Color::Yellow);
        assert_eq!(colors.text, ColorConfig::default().text);
    }
}
