//! Console message formatting for the command-line program

use crossterm::style::{Color, Stylize};
use std::io::IsTerminal;

/// Colored status lines; color only reaches interactive terminals
pub struct ColorOutput;

impl ColorOutput {
    /// Color `text` when `enabled`, plain text otherwise
    pub fn paint(text: &str, color: Color, enabled: bool) -> String {
        if enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn color_allowed(stream_is_terminal: bool) -> bool {
        stream_is_terminal && std::env::var_os("NO_COLOR").is_none()
    }

    /// Success line for stdout
    pub fn success(text: &str) -> String {
        Self::paint(text, Color::Green, Self::color_allowed(std::io::stdout().is_terminal()))
    }

    /// Informational line for stdout
    pub fn info(text: &str) -> String {
        Self::paint(text, Color::Blue, Self::color_allowed(std::io::stdout().is_terminal()))
    }

    /// Error line for stderr
    pub fn error(text: &str) -> String {
        Self::paint(text, Color::Red, Self::color_allowed(std::io::stderr().is_terminal()))
    }
}

/// Usage text for a bad invocation, in the console program's wording
pub fn usage(program: &str, size: usize) -> String {
    format!(
        "Usage:\n {program}\tstart with a random board.\n {program} file_name\tread {size}x{size} board from file.\n"
    )
}
