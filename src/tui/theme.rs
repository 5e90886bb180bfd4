//! Styles shared by all screens.
//!
//! Screens pick a role (e.g. [`StyleTier`]) and never build colors inline.

use ratatui::style::{Color, Modifier, Style};

/// Style tier for a form field's prompt and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTier {
    /// The field that currently has focus.
    Emphasis,
    /// Every field without focus.
    Success,
}

/// Returns the style for a field tier.
pub fn style_for(tier: StyleTier) -> Style {
    match tier {
        StyleTier::Emphasis => title(),
        StyleTier::Success => Style::default().fg(Color::Green),
    }
}

/// Headings: banners and field titles.
pub fn title() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Secondary text under a heading.
pub fn subtext() -> Style {
    Style::default().fg(Color::Gray)
}

/// Low-contrast hints: descriptions, placeholders, footers.
pub fn dimmed() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Frame around a full-screen panel.
pub fn border() -> Style {
    Style::default().fg(Color::Magenta)
}

/// Highlighted row in a list.
pub fn selected() -> Style {
    Style::default().fg(Color::Black).bg(Color::Magenta)
}

/// Inline error messages.
pub fn error() -> Style {
    Style::default().fg(Color::Red)
}

/// The block cursor drawn over the character under it.
pub fn cursor() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}
