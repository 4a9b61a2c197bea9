//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.keybinding)
}

/// Accent background, used for the keyboard cursor row
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.surface))
}

pub fn popup_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_focused_selected_uses_accent_background() {
        let style = focused_selected(&DARK);
        assert_eq!(style.bg, Some(DARK.accent));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_text_styles_follow_palette() {
        assert_eq!(text_primary(&LIGHT).fg, Some(LIGHT.text_primary));
        assert_eq!(text_muted(&DARK).fg, Some(DARK.text_muted));
    }
}
