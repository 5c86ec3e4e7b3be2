//! Common styling utilities for TUI components

use acedeck_core::Tone;
use ratatui::prelude::*;

/// Standard color for help text and disabled controls
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Slide titles
pub const TITLE_COLOR: Color = Color::Yellow;

/// Code snippets
pub const CODE_COLOR: Color = Color::LightGreen;

/// Active progress dot and enabled buttons
pub const ACCENT_COLOR: Color = Color::Magenta;

/// Inactive progress dots
pub const INACTIVE_COLOR: Color = Color::Gray;

/// Error text in the status bar
pub const ERROR_COLOR: Color = Color::Red;

pub const ACTIVE_DOT: &str = "●";
pub const INACTIVE_DOT: &str = "○";

/// Color for callouts and column headers of the given tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::Blue,
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Danger => Color::Red,
    }
}

pub fn tone_style(tone: Tone) -> Style {
    Style::default().fg(tone_color(tone))
}

/// Style for a previous/next button.
pub fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::White)
            .bg(ACCENT_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HELP_COLOR)
    }
}

pub fn dot_style(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT_COLOR)
    } else {
        Style::default().fg(INACTIVE_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_color() {
        assert_eq!(tone_color(Tone::Success), Color::Green);
        assert_eq!(tone_color(Tone::Danger), Color::Red);
        assert_eq!(tone_style(Tone::Info).fg, Some(Color::Blue));
    }

    #[test]
    fn test_disabled_button_is_dim() {
        assert_eq!(button_style(false).fg, Some(HELP_COLOR));
        assert_eq!(button_style(true).bg, Some(ACCENT_COLOR));
    }

    #[test]
    fn test_dot_glyphs_differ() {
        assert_ne!(ACTIVE_DOT, INACTIVE_DOT);
        assert_ne!(dot_style(true), dot_style(false));
    }
}
