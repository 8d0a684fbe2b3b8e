use ratatui::style::{Color, Modifier, Style};

use crate::viewport::CharColor;

pub fn title() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

pub fn correct() -> Style {
    Style::default().fg(Color::Green).bg(Color::Black)
}

pub fn incorrect() -> Style {
    Style::default().fg(Color::Black).bg(Color::Red)
}

/// Header and footer bars
pub fn banner() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

pub fn border() -> Style {
    Style::default().fg(Color::White).bg(Color::White)
}

pub fn legend() -> Style {
    Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM)
}

pub fn char_style(color: CharColor) -> Style {
    match color {
        CharColor::Untyped => Style::default(),
        CharColor::Match => correct(),
        CharColor::Mismatch => incorrect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_styles_are_distinct() {
        let untyped = char_style(CharColor::Untyped);
        let matched = char_style(CharColor::Match);
        let mismatched = char_style(CharColor::Mismatch);

        assert_ne!(untyped, matched);
        assert_ne!(untyped, mismatched);
        assert_ne!(matched, mismatched);
        assert_eq!(matched.fg, Some(Color::Green));
        assert_eq!(mismatched.bg, Some(Color::Red));
    }
}
