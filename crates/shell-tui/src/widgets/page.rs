//! Page area
//!
//! Stand-in for the routed page: shows where the session is and how the
//! layout was classified.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use shell_app::LayoutSnapshot;

use crate::theme::{styles, Palette};

pub struct PageView<'a> {
    snapshot: &'a LayoutSnapshot,
    page_title: &'a str,
    palette: &'a Palette,
}

impl<'a> PageView<'a> {
    pub fn new(snapshot: &'a LayoutSnapshot, page_title: &'a str, palette: &'a Palette) -> Self {
        Self {
            snapshot,
            page_title,
            palette,
        }
    }

    fn field(&self, label: &'static str, value: String) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), styles::text_muted(self.palette)),
            Span::styled(value, styles::text_primary(self.palette)),
        ])
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let s = self.snapshot;
        let p = self.palette;
        let block = styles::glass_block(p, !s.sidebar_overlay || !s.sidebar_open);
        let viewport = s
            .viewport
            .map(|v| format!("{}×{} px", v.width, v.height))
            .unwrap_or_else(|| "unknown".to_string());

        let lines = vec![
            Line::from(Span::styled(self.page_title, styles::accent_bold(p))),
            Line::default(),
            self.field("Route", s.path.clone()),
            self.field("URL", s.url.clone()),
            self.field("Section", s.active_section.to_string()),
            self.field("Layout", format!("{:?}", s.layout_type).to_lowercase()),
            self.field("Device", s.device.label().to_string()),
            self.field("Orientation", format!("{:?}", s.orientation).to_lowercase()),
            self.field("Viewport", viewport),
            self.field("Theme", format!("{} → {}", s.theme, s.resolved_theme)),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
