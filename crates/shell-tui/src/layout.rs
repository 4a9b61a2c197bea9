//! Screen layout definitions for the TUI
//!
//! Dashboard pages get a header and a sidebar column. On desktop the sidebar
//! is docked beside the page; elsewhere it floats over the page.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Inputs for [`create`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInputs {
    /// Page renders header/sidebar chrome
    pub chrome: bool,
    pub sidebar_visible: bool,
    pub sidebar_overlay: bool,
    pub sidebar_width: u16,
}

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Option<Rect>,
    pub sidebar: Option<Rect>,
    /// Sidebar is drawn on top of `content`
    pub overlay: bool,
    pub content: Rect,
}

pub fn create(area: Rect, inputs: LayoutInputs) -> ScreenAreas {
    if !inputs.chrome {
        return ScreenAreas {
            header: None,
            sidebar: None,
            overlay: false,
            content: area,
        };
    }

    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)]).areas(area);

    if !inputs.sidebar_visible {
        return ScreenAreas {
            header: Some(header),
            sidebar: None,
            overlay: false,
            content: body,
        };
    }

    let width = inputs.sidebar_width.min(body.width);
    if inputs.sidebar_overlay {
        let sidebar = Rect::new(body.x, body.y, width, body.height);
        return ScreenAreas {
            header: Some(header),
            sidebar: Some(sidebar),
            overlay: true,
            content: body,
        };
    }

    let [sidebar, content] =
        Layout::horizontal([Constraint::Length(width), Constraint::Min(1)]).areas(body);
    ScreenAreas {
        header: Some(header),
        sidebar: Some(sidebar),
        overlay: false,
        content,
    }
}
