//! Terminal setup, restoration and environment probing

use shell_core::{ResolvedTheme, Viewport};

use shell_app::config::TuiSettings;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Translate a cell grid into a pixel viewport
pub fn cells_to_viewport(cols: u16, rows: u16, settings: &TuiSettings) -> Viewport {
    Viewport::new(
        u32::from(cols) * settings.cell_width_px,
        u32::from(rows) * settings.cell_height_px,
    )
}

/// Current terminal size as a viewport, `None` when it cannot be queried
pub fn current_viewport(settings: &TuiSettings) -> Option<Viewport> {
    match crossterm::terminal::size() {
        Ok((cols, rows)) => Some(cells_to_viewport(cols, rows, settings)),
        Err(e) => {
            tracing::debug!("Terminal size unavailable: {}", e);
            None
        }
    }
}

/// OS color scheme as advertised by the terminal.
///
/// Reads `COLORFGBG` ("fg;bg"); background colors 0-6 and 8 are dark.
/// Without the variable the terminal is assumed dark.
pub fn detect_color_scheme() -> ResolvedTheme {
    scheme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn scheme_from_colorfgbg(value: Option<&str>) -> ResolvedTheme {
    let background = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        Some(0..=6) | Some(8) => ResolvedTheme::Dark,
        Some(_) => ResolvedTheme::Light,
        None => ResolvedTheme::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_to_viewport_uses_cell_size() {
        let settings = TuiSettings::default();
        let viewport = cells_to_viewport(128, 40, &settings);
        assert_eq!(viewport, Viewport::new(1024, 640));
    }

    #[test]
    fn test_colorfgbg_dark_background() {
        assert_eq!(scheme_from_colorfgbg(Some("15;0")), ResolvedTheme::Dark);
        assert_eq!(scheme_from_colorfgbg(Some("7;default;8")), ResolvedTheme::Dark);
    }

    #[test]
    fn test_colorfgbg_light_background() {
        assert_eq!(scheme_from_colorfgbg(Some("0;15")), ResolvedTheme::Light);
        assert_eq!(scheme_from_colorfgbg(Some("0;7")), ResolvedTheme::Light);
    }

    #[test]
    fn test_colorfgbg_missing_or_garbage() {
        assert_eq!(scheme_from_colorfgbg(None), ResolvedTheme::Dark);
        assert_eq!(scheme_from_colorfgbg(Some("default")), ResolvedTheme::Dark);
    }
}
