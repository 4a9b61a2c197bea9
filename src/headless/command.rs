//! Headless stdin commands

use serde::Deserialize;

use shell_app::{InputKey, LayoutSession, Message};
use shell_core::prelude::*;
use shell_core::{LayoutType, ResolvedTheme, Theme, Viewport};

use super::HeadlessEvent;

/// One command line, tagged by `cmd`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum HeadlessCommand {
    /// Raw geometry; goes through the resize throttle
    Resize { width: u32, height: u32 },
    ColorScheme { scheme: ResolvedTheme },
    SetTheme { theme: Theme },
    SelectSection { section: String },
    Navigate { path: String },
    ToggleNav { key: String },
    ToggleSidebar,
    OpenSidebar,
    CloseSidebar,
    /// Key name as accepted by [`InputKey::parse`]
    Key { key: String },
    Layout { layout: LayoutType },
    SignOut,
    Snapshot,
    Quit,
}

/// What the runner should do after a command
#[derive(Debug, PartialEq)]
pub enum CommandOutcome {
    Handled,
    /// Write this line to stdout
    Reply(HeadlessEvent),
}

impl HeadlessCommand {
    pub fn parse(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Apply to the session; resizes are stamped with the current instant
    pub fn apply(self, session: &mut LayoutSession) -> CommandOutcome {
        debug!("Headless command: {:?}", self);
        match self {
            Self::Resize { width, height } => {
                session.process_message(Message::Resize(Viewport::new(width, height)));
            }
            Self::ColorScheme { scheme } => session.color_scheme_changed(scheme),
            Self::SetTheme { theme } => session.set_theme(theme),
            Self::SelectSection { section } => session.select_section(&section),
            Self::Navigate { path } => session.navigate(&path),
            Self::ToggleNav { key } => session.toggle_nav_entry(&key),
            Self::ToggleSidebar => session.toggle_sidebar(),
            Self::OpenSidebar => session.open_sidebar(),
            Self::CloseSidebar => session.close_sidebar(),
            Self::Key { key } => match InputKey::parse(&key) {
                Some(input) => session.process_message(Message::Key(input)),
                None => {
                    return CommandOutcome::Reply(HeadlessEvent::error(format!(
                        "unknown key: {key}"
                    )))
                }
            },
            Self::Layout { layout } => session.set_layout_type(layout),
            Self::SignOut => session.sign_out(),
            Self::Snapshot => {
                return CommandOutcome::Reply(HeadlessEvent::snapshot(session.snapshot()));
            }
            Self::Quit => session.process_message(Message::Quit),
        }
        CommandOutcome::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resize() {
        let cmd = HeadlessCommand::parse(r#"{"cmd":"resize","width":600,"height":900}"#).unwrap();
        assert_eq!(
            cmd,
            HeadlessCommand::Resize {
                width: 600,
                height: 900
            }
        );
    }

    #[test]
    fn test_parse_unit_commands() {
        assert_eq!(
            HeadlessCommand::parse(r#"{"cmd":"toggle_sidebar"}"#).unwrap(),
            HeadlessCommand::ToggleSidebar
        );
        assert_eq!(
            HeadlessCommand::parse(r#"{"cmd":"quit"}"#).unwrap(),
            HeadlessCommand::Quit
        );
    }

    #[test]
    fn test_parse_theme_and_scheme() {
        assert_eq!(
            HeadlessCommand::parse(r#"{"cmd":"set_theme","theme":"dark"}"#).unwrap(),
            HeadlessCommand::SetTheme { theme: Theme::Dark }
        );
        assert_eq!(
            HeadlessCommand::parse(r#"{"cmd":"color_scheme","scheme":"light"}"#).unwrap(),
            HeadlessCommand::ColorScheme {
                scheme: ResolvedTheme::Light
            }
        );
    }

    #[test]
    fn test_parse_layout() {
        assert_eq!(
            HeadlessCommand::parse(r#"{"cmd":"layout","layout":"minimal"}"#).unwrap(),
            HeadlessCommand::Layout {
                layout: LayoutType::Minimal
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_garbage() {
        assert!(HeadlessCommand::parse(r#"{"cmd":"reload"}"#).is_err());
        assert!(HeadlessCommand::parse("resize 10 10").is_err());
        assert!(HeadlessCommand::parse(r#"{"cmd":"set_theme","theme":"blue"}"#).is_err());
    }
}
