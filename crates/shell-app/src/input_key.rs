//! Abstract input key, independent of the terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary;
//! the headless runner parses key names from commands.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
}

impl InputKey {
    /// Parse a key name such as `esc`, `enter`, `up`, `ctrl+c` or `t`
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let key = match lower.as_str() {
            "up" => InputKey::Up,
            "down" => InputKey::Down,
            "left" => InputKey::Left,
            "right" => InputKey::Right,
            "home" => InputKey::Home,
            "end" => InputKey::End,
            "enter" | "return" => InputKey::Enter,
            "esc" | "escape" => InputKey::Esc,
            "tab" => InputKey::Tab,
            "backtab" | "shift+tab" => InputKey::BackTab,
            "backspace" => InputKey::Backspace,
            other => {
                if let Some(rest) = other.strip_prefix("ctrl+") {
                    let mut chars = rest.chars();
                    return match (chars.next(), chars.next()) {
                        (Some(c), None) => Some(InputKey::CharCtrl(c)),
                        _ => None,
                    };
                }
                // Single characters keep their original case
                let mut chars = name.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => InputKey::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(InputKey::parse("Escape"), Some(InputKey::Esc));
        assert_eq!(InputKey::parse("enter"), Some(InputKey::Enter));
        assert_eq!(InputKey::parse("down"), Some(InputKey::Down));
    }

    #[test]
    fn test_parse_chars() {
        assert_eq!(InputKey::parse("t"), Some(InputKey::Char('t')));
        assert_eq!(InputKey::parse("B"), Some(InputKey::Char('B')));
        assert_eq!(InputKey::parse("3"), Some(InputKey::Char('3')));
        assert_eq!(InputKey::parse("ctrl+c"), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(InputKey::parse("hyper"), None);
        assert_eq!(InputKey::parse(""), None);
        assert_eq!(InputKey::parse("ctrl+"), None);
    }
}
