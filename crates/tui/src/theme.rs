//! Theme and styling for the tabgrid TUI.
//!
//! A dark palette with a single warm accent. Selection emphasis follows the
//! same rule everywhere: accent foreground plus bold, with a subtle
//! background fill only for the cursor cell inside the overlay grid.

use ratatui::style::{Color, Modifier, Style};

/// Accent color for the selection cursor and focused borders.
pub const ACCENT: Color = Color::Rgb(235, 166, 66);

/// Primary foreground color for normal text.
pub const FG: Color = Color::Rgb(224, 224, 230);

/// Muted foreground for hints, labels, and secondary information.
pub const FG_MUTED: Color = Color::Rgb(158, 158, 166);

/// Border color for unfocused UI elements.
pub const BORDER: Color = Color::Rgb(72, 72, 80);

/// Background for the overlay panel.
pub const BG_PANEL: Color = Color::Rgb(18, 18, 24);

/// Background for the selected grid cell.
pub const BG_SELECT: Color = Color::Rgb(44, 34, 16);

/// Warning color for error states.
pub const WARN: Color = Color::Rgb(220, 96, 110);

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(BORDER)
    }
}

pub fn title_style() -> Style {
    Style::default().fg(FG_MUTED).add_modifier(Modifier::BOLD)
}

pub fn text_style() -> Style {
    Style::default().fg(FG)
}

pub fn text_muted() -> Style {
    Style::default().fg(FG_MUTED)
}

pub fn warn_style() -> Style {
    Style::default().fg(WARN)
}

/// Style for the tab cell under the cursor.
pub fn cursor_cell_style() -> Style {
    Style::default().fg(ACCENT).bg(BG_SELECT).add_modifier(Modifier::BOLD)
}
