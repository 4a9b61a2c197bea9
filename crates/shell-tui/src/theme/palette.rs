//! Color palettes, one per resolved theme.

use ratatui::style::Color;
use shell_core::ResolvedTheme;

/// Named color slots used by every widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub surface: Color,
    pub popup: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Foreground on top of `accent`
    pub contrast: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub keybinding: Color,
    /// Backdrop behind the overlay sidebar
    pub backdrop: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(10, 12, 16),
    surface: Color::Rgb(18, 21, 28),
    popup: Color::Rgb(28, 33, 43),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(94, 196, 172),
    accent: Color::Rgb(94, 196, 172),
    contrast: Color::Black,
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    keybinding: Color::Rgb(234, 179, 8),
    backdrop: Color::Rgb(5, 6, 8),
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 248, 245),
    surface: Color::Rgb(255, 255, 255),
    popup: Color::Rgb(240, 237, 232),
    border_dim: Color::Rgb(214, 208, 200),
    border_active: Color::Rgb(32, 128, 110),
    accent: Color::Rgb(32, 128, 110),
    contrast: Color::White,
    text_primary: Color::Rgb(36, 41, 47),
    text_secondary: Color::Rgb(87, 96, 106),
    text_muted: Color::Rgb(140, 149, 159),
    keybinding: Color::Rgb(176, 106, 0),
    backdrop: Color::Rgb(200, 196, 190),
};

impl Palette {
    pub fn for_theme(theme: ResolvedTheme) -> &'static Palette {
        match theme {
            ResolvedTheme::Dark => &DARK,
            ResolvedTheme::Light => &LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_theme_picks_matching_palette() {
        assert_eq!(Palette::for_theme(ResolvedTheme::Dark), &DARK);
        assert_eq!(Palette::for_theme(ResolvedTheme::Light), &LIGHT);
    }

    #[test]
    fn test_palettes_differ_in_background() {
        assert_ne!(DARK.background, LIGHT.background);
        assert_ne!(DARK.text_primary, LIGHT.text_primary);
    }
}
