//! Message types for the layout session (TEA pattern)

use shell_core::{LayoutType, ResolvedTheme, Theme, Viewport};

use crate::input_key::InputKey;

/// Everything that can change layout state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard input from a front-end
    Key(InputKey),

    /// Periodic tick (flushes throttled resizes)
    Tick,

    /// Leave the event loop (signal, `q`, headless `quit`)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────
    /// Raw resize/orientation event; the session throttles these
    Resize(Viewport),

    /// Geometry to classify, already throttled
    ViewportChanged(Viewport),

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    SetTheme(Theme),

    /// Light → Dark → System → Light
    CycleTheme,

    /// OS color-scheme preference changed
    ColorSchemeChanged(ResolvedTheme),

    /// Persisted theme read at mount (raw, unvalidated)
    ThemeLoaded { stored: Option<String> },

    // ─────────────────────────────────────────────────────────
    // Layout / sidebar
    // ─────────────────────────────────────────────────────────
    SetLayoutType(LayoutType),
    OpenSidebar,
    CloseSidebar,
    ToggleSidebar,
    BackdropClicked,

    // ─────────────────────────────────────────────────────────
    // Section / routing
    // ─────────────────────────────────────────────────────────
    /// Explicit module selection (module selector, `1`-`7`)
    SelectSection(String),

    /// Request navigation to a path
    NavigateTo(String),

    /// The route changed; raw sources for section resolution
    RouteChanged {
        path: String,
        section_param: Option<String>,
        stored_section: Option<String>,
    },

    /// A storage key was written elsewhere (another tab or process)
    StorageChanged { key: String, value: Option<String> },

    // ─────────────────────────────────────────────────────────
    // Navigation tree
    // ─────────────────────────────────────────────────────────
    ToggleNavEntry(String),
    ToggleDropdown(String),
    CloseDropdowns,
    CursorUp,
    CursorDown,
    /// Enter on the focused sidebar row
    ActivateCursor,
}
