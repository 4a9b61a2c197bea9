//! Header bar
//!
//! Menu toggle (off-desktop only), product name, current module, shortcut
//! hints, and a theme/user pill on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use shell_app::LayoutSnapshot;

use crate::theme::{styles, Palette};

/// Product name shown in the header
pub const PRODUCT_NAME: &str = "Studio Shell";

pub struct MainHeader<'a> {
    snapshot: &'a LayoutSnapshot,
    module_title: &'a str,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(snapshot: &'a LayoutSnapshot, module_title: &'a str, palette: &'a Palette) -> Self {
        Self {
            snapshot,
            module_title,
            palette,
        }
    }

    fn left_line(&self) -> Line<'a> {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        if self.snapshot.sidebar_overlay {
            let icon = if self.snapshot.sidebar_open { "✕" } else { "≡" };
            spans.push(Span::styled(icon, styles::accent_bold(p)));
            spans.push(Span::raw(" "));
        }
        spans.extend([
            Span::styled(PRODUCT_NAME, styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled("/", styles::text_muted(p)),
            Span::raw(" "),
            Span::styled(self.module_title, styles::text_secondary(p)),
        ]);
        Line::from(spans)
    }

    fn shortcuts_line(&self) -> Line<'static> {
        let p = self.palette;
        let mut spans = Vec::new();
        for (key, label) in [("b", "Menu"), ("m", "Modules"), ("t", "Theme"), ("q", "Quit")] {
            spans.push(Span::styled("[", styles::text_muted(p)));
            spans.push(Span::styled(key, styles::keybinding(p)));
            spans.push(Span::styled(format!("] {label}  "), styles::text_muted(p)));
        }
        Line::from(spans)
    }

    fn right_line(&self) -> Line<'a> {
        let p = self.palette;
        let theme = format!(
            "{} ({})",
            self.snapshot.theme, self.snapshot.resolved_theme
        );
        let mut spans = vec![
            Span::styled("◐ ", styles::accent(p)),
            Span::styled(theme, styles::text_secondary(p)),
        ];
        if let Some(user) = self.snapshot.user.as_deref() {
            spans.push(Span::styled("  [u] ", styles::text_muted(p)));
            spans.push(Span::styled(user, styles::text_primary(p)));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = self.left_line();
        let shortcuts = self.shortcuts_line();
        let right = self.right_line();
        let left_width = left.width() as u16;
        let shortcuts_width = shortcuts.width() as u16;
        let right_width = right.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Right pill wins over shortcut hints when space runs out
        if left_width + right_width + 2 <= inner.width {
            let right_x = inner.x + inner.width - right_width;
            buf.set_line(right_x, inner.y, &right, right_width);

            let shortcuts_x = inner.x + left_width + 2;
            if shortcuts_x + shortcuts_width + 2 <= right_x {
                buf.set_line(shortcuts_x, inner.y, &shortcuts, shortcuts_width);
            }
        }
    }
}
