//! Color theme and styling definitions using ratatui colors
//!
//! This module provides color themes for terminal rendering using ratatui's
//! color system directly to avoid unnecessary abstractions.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Normal text color (None uses terminal default)
    pub normal_text: Option<Color>,

    /// Table header row
    pub table_header: Style,

    /// Highlighted result row
    pub selection: Style,

    /// Search bar while actively editing
    pub search_active: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,

    /// Error screen text
    pub error_text: Color,

    /// Positive accent (Top 100 "Yes")
    pub accent_good: Color,

    /// Negative accent (Top 100 "No")
    pub accent_bad: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            normal_text: None, // Use terminal default
            table_header: Style::default().add_modifier(Modifier::BOLD),
            selection: Style::default().fg(Color::Black).bg(Color::Yellow),
            search_active: Style::default().fg(Color::Yellow),
            status_bg: Color::Blue,
            status_fg: Color::White,
            error_text: Color::Red,
            accent_good: Color::Green,
            accent_bad: Color::Red,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            normal_text: None,
            table_header: Style::default().add_modifier(Modifier::BOLD),
            selection: Style::default().fg(Color::Black).bg(Color::White),
            search_active: Style::default().add_modifier(Modifier::UNDERLINED),
            status_bg: Color::Black,
            status_fg: Color::White,
            error_text: Color::White,
            accent_good: Color::White,
            accent_bad: Color::White,
        }
    }
}
