//! Color parsing for tree output

use anyhow::{Context, Result};
use crossterm::style::Color;

/// Parse a color string to a crossterm Color
///
/// Supports:
/// - Named terminal colors: "red", "darkgray", "lightblue", ...
/// - "default" for the terminal's own foreground
/// - Hex colors and CSS color names: "#ff0000", "#f00", "orange"
pub fn parse_color(color_str: &str) -> Result<Color> {
    let color_str = color_str.trim().to_lowercase();

    match color_str.as_str() {
        "default" | "reset" => Ok(Color::Reset),
        "black" => Ok(Color::Black),
        "red" => Ok(Color::DarkRed),
        "green" => Ok(Color::DarkGreen),
        "yellow" => Ok(Color::DarkYellow),
        "blue" => Ok(Color::DarkBlue),
        "magenta" => Ok(Color::DarkMagenta),
        "cyan" => Ok(Color::DarkCyan),
        "white" => Ok(Color::White),
        "gray" | "grey" => Ok(Color::Grey),
        "darkgray" | "darkgrey" => Ok(Color::DarkGrey),
        "lightred" => Ok(Color::Red),
        "lightgreen" => Ok(Color::Green),
        "lightyellow" => Ok(Color::Yellow),
        "lightblue" => Ok(Color::Blue),
        "lightmagenta" => Ok(Color::Magenta),
        "lightcyan" => Ok(Color::Cyan),
        other => {
            let parsed = csscolorparser::parse(other)
                .with_context(|| format!("Unknown color: {}", other))?;
            let [r, g, b, _] = parsed.to_rgba8();
            Ok(Color::Rgb { r, g, b })
        }
    }
}
