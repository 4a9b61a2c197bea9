//! Header dropdowns: module selector and user menu

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use shell_app::navigation::ModuleEntry;
use shell_core::{SectionKey, User};

use crate::theme::{styles, Palette};

/// Numbered list of the modules the user may open
pub struct ModuleMenu<'a> {
    modules: &'a [&'a ModuleEntry],
    active: &'a SectionKey,
    palette: &'a Palette,
}

impl<'a> ModuleMenu<'a> {
    pub fn new(modules: &'a [&'a ModuleEntry], active: &'a SectionKey, palette: &'a Palette) -> Self {
        Self {
            modules,
            active,
            palette,
        }
    }

    /// Rows needed including borders
    pub fn height(&self) -> u16 {
        self.modules.len() as u16 + 2
    }
}

impl Widget for ModuleMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::popup_block(self.palette, " Modules ");
        let inner = block.inner(area);
        block.render(area, buf);

        let p = self.palette;
        for (index, module) in self.modules.iter().enumerate() {
            let y = inner.y + index as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let selected = &module.key == self.active;
            let title_style = if selected {
                styles::accent_bold(p)
            } else {
                styles::text_primary(p)
            };
            let line = Line::from(vec![
                Span::styled(format!(" {} ", index + 1), styles::keybinding(p)),
                Span::styled(if selected { "● " } else { "  " }, styles::accent(p)),
                Span::styled(module.title.as_str(), title_style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

/// Signed-in user and their permissions
pub struct UserMenu<'a> {
    user: Option<&'a User>,
    palette: &'a Palette,
}

impl<'a> UserMenu<'a> {
    pub fn new(user: Option<&'a User>, palette: &'a Palette) -> Self {
        Self { user, palette }
    }

    pub fn height(&self) -> u16 {
        let permissions = self.user.map(|u| u.permissions.len()).unwrap_or(0);
        permissions as u16 + 4
    }
}

impl Widget for UserMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::popup_block(self.palette, " Account ");
        let inner = block.inner(area);
        block.render(area, buf);

        let p = self.palette;
        let mut lines = Vec::new();
        match self.user {
            Some(user) => {
                lines.push(Line::from(Span::styled(
                    format!(" {}", user.display_name),
                    styles::accent_bold(p),
                )));
                if let Some(email) = user.email.as_deref() {
                    lines.push(Line::from(Span::styled(format!(" {email}"), styles::text_muted(p))));
                }
                for permission in &user.permissions {
                    lines.push(Line::from(Span::styled(
                        format!("  · {permission}"),
                        styles::text_secondary(p),
                    )));
                }
            }
            None => lines.push(Line::from(Span::styled(" Not signed in", styles::text_muted(p)))),
        }

        for (offset, line) in lines.iter().enumerate() {
            let y = inner.y + offset as u16;
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_line(inner.x, y, line, inner.width);
        }
    }
}
