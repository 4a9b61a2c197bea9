//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use shell_app::handler::{MODULE_DROPDOWN, USER_DROPDOWN};
use shell_app::{LayoutSession, LayoutState};

use crate::layout::{self, LayoutInputs};
use crate::theme::Palette;
use crate::widgets;

/// Width of the header dropdowns
const DROPDOWN_WIDTH: u16 = 30;

/// Render the complete UI. Pure: reads the session, never mutates it.
pub fn view(frame: &mut Frame, session: &LayoutSession) {
    let state = session.state();
    let snapshot = session.snapshot();
    let palette = Palette::for_theme(state.resolved_theme);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(
        area,
        LayoutInputs {
            chrome: state.layout_type.has_chrome(),
            sidebar_visible: snapshot.sidebar_visible,
            sidebar_overlay: snapshot.sidebar_overlay,
            sidebar_width: session.settings().tui.sidebar_width,
        },
    );

    let title = page_title(session);
    frame.render_widget(
        widgets::PageView::new(&snapshot, &title, palette),
        areas.content,
    );

    if let Some(header) = areas.header {
        let module = module_title(state);
        frame.render_widget(widgets::MainHeader::new(&snapshot, &module, palette), header);
    }

    if let Some(sidebar) = areas.sidebar {
        if areas.overlay {
            // Backdrop: the page stays visible but inert behind the drawer
            frame
                .buffer_mut()
                .set_style(areas.content, Style::default().bg(palette.backdrop));
        }
        frame.render_widget(
            widgets::NavSidebar::new(session.nav_tree(), palette)
                .cursor(state.sidebar_cursor)
                .overlay(areas.overlay),
            sidebar,
        );
    }

    if let Some(header) = areas.header {
        render_dropdown(frame, state, header, palette);
    }
}

fn render_dropdown(frame: &mut Frame, state: &LayoutState, header: Rect, palette: &Palette) {
    let Some(open) = state.open_dropdown.as_deref() else {
        return;
    };
    let frame_area = frame.area();
    let top = header.y + header.height;
    let available = frame_area.height.saturating_sub(top);
    let width = DROPDOWN_WIDTH.min(frame_area.width);

    if open == MODULE_DROPDOWN {
        let modules = state.visible_modules();
        let menu = widgets::ModuleMenu::new(&modules, &state.active_section, palette);
        let area = Rect::new(header.x + 1, top, width, menu.height().min(available));
        frame.render_widget(menu, area);
    } else if open == USER_DROPDOWN {
        let menu = widgets::UserMenu::new(state.user.as_ref(), palette);
        let x = (header.x + header.width).saturating_sub(width + 1);
        let area = Rect::new(x, top, width, menu.height().min(available));
        frame.render_widget(menu, area);
    }
}

/// Selector label of the active module
pub fn module_title(state: &LayoutState) -> String {
    state
        .nav_table
        .modules
        .iter()
        .find(|m| m.key == state.active_section)
        .map(|m| m.title.clone())
        .unwrap_or_else(|| state.active_section.to_string())
}

/// Title of the navigation item the current route belongs to
fn page_title(session: &LayoutSession) -> String {
    let tree = session.nav_tree();
    let path = &session.state().current_path;
    tree.find(path)
        .or_else(|| tree.primary())
        .map(|item| item.title.clone())
        .unwrap_or_else(|| path.clone())
}
