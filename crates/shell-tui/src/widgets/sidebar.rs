//! Navigation sidebar
//!
//! Renders [`NavTree::visible_rows`] as an indented accordion. The keyboard
//! cursor indexes into the same row list.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use shell_app::navigation::{NavItem, NavScope, NavTree};

use crate::theme::{styles, Palette};

pub struct NavSidebar<'a> {
    tree: &'a NavTree,
    cursor: usize,
    palette: &'a Palette,
    overlay: bool,
}

impl<'a> NavSidebar<'a> {
    pub fn new(tree: &'a NavTree, palette: &'a Palette) -> Self {
        Self {
            tree,
            cursor: 0,
            palette,
            overlay: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Floating above the page (non-desktop)
    pub fn overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    fn row_line(&self, item: &'a NavItem, focused: bool) -> Line<'a> {
        let p = self.palette;
        let indent = "  ".repeat(item.depth);
        let marker = if item.has_children() {
            if item.expanded {
                "▾ "
            } else {
                "▸ "
            }
        } else if item.depth > 0 {
            "· "
        } else {
            "  "
        };
        let edge = if item.primary { "▌" } else { " " };

        let style = if focused {
            styles::focused_selected(p)
        } else if item.active {
            styles::accent_bold(p)
        } else if item.depth > 0 {
            styles::text_secondary(p)
        } else {
            styles::text_primary(p)
        };

        Line::from(vec![
            Span::styled(edge, styles::accent(p)),
            Span::styled(format!("{indent}{marker}"), styles::text_muted(p)),
            Span::styled(item.title.as_str(), style),
        ])
    }
}

impl Widget for NavSidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.overlay {
            Clear.render(area, buf);
        }
        let block = styles::glass_block(self.palette, self.overlay).title(Span::styled(
            format!(" {} ", self.tree.section),
            styles::accent_bold(self.palette),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = self.tree.visible_rows();
        let cursor = self.cursor.min(rows.len().saturating_sub(1));
        // Keep the cursor row on screen
        let skip = (cursor + 1).saturating_sub(inner.height as usize);

        let mut y = inner.y;
        let mut previous_scope: Option<NavScope> = None;
        for (index, item) in rows.iter().enumerate().skip(skip) {
            if y >= inner.y + inner.height {
                break;
            }
            if item.depth == 0
                && previous_scope == Some(NavScope::Global)
                && item.scope == NavScope::Contextual
                && y + 1 < inner.y + inner.height
            {
                let rule = "─".repeat(inner.width as usize);
                buf.set_string(inner.x, y, rule, Style::default().fg(self.palette.border_dim));
                y += 1;
            }
            if item.depth == 0 {
                previous_scope = Some(item.scope);
            }

            let line = self.row_line(item, index == cursor);
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }
    }
}
