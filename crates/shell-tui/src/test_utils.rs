//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's `TestBackend` so widget tests can render and then search
//! the buffer for text.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

use shell_app::auth::StaticAuth;
use shell_app::navigation::default_table;
use shell_app::{Collaborators, LayoutSession, MemoryStorage, Settings, UrlRouter, VirtualDocument};
use shell_core::{ResolvedTheme, User, Viewport};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 30;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        let buffer = self.buffer();
        let mut content = String::new();
        if line < buffer.area.height {
            for x in 0..buffer.area.width {
                content.push_str(buffer[(x, line)].symbol());
            }
        }
        content.contains(text)
    }

    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        result.push('\n');
    }
    result
}

/// A mounted session for the given URL and pixel viewport
pub fn test_session(url: &str, viewport: Viewport) -> LayoutSession {
    let user = User::new("u-1", "Ana Ruiz");
    test_session_for(url, viewport, user)
}

pub fn test_session_for(url: &str, viewport: Viewport, user: User) -> LayoutSession {
    let collaborators = Collaborators {
        platform: Box::new(VirtualDocument::new(Some(viewport), ResolvedTheme::Dark)),
        router: Box::new(UrlRouter::parse(url).expect("valid test url")),
        storage: Some(Box::new(MemoryStorage::new())),
        auth: Box::new(StaticAuth::signed_in(user)),
    };
    let mut session = LayoutSession::new(Settings::default(), default_table(), collaborators);
    session.mount();
    session
}

