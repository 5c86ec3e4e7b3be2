//! Keybinding matching.
//!
//! Key events are rendered to the same string form used in
//! `keybindings.yaml` and compared case-insensitively against the configured
//! list for an action.

use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};

impl KeybindingsConfig {
    /// Render a key event as a binding string.
    ///
    /// Examples: `a`, `ctrl+c`, `shift+j` (for `J`), `left`, `shift+tab`.
    /// Returns `None` for keys that cannot be bound.
    pub fn key_name(key: &AppKeyEvent) -> Option<String> {
        let mut implied_shift = false;
        let name = match &key.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) if c.is_uppercase() => {
                implied_shift = true;
                c.to_lowercase().to_string()
            }
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::F(n) => format!("f{n}"),
            #[cfg(feature = "native")]
            KeyCode::BackTab => {
                implied_shift = true;
                "tab".to_string()
            }
            _ => return None,
        };

        let mut parts: Vec<&str> = Vec::with_capacity(4);
        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }
        if key.shift || implied_shift {
            parts.push("shift");
        }
        parts.push(&name);
        Some(parts.join("+"))
    }

    /// Check whether a key event matches any of `bindings`.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        match Self::key_name(key) {
            Some(name) => bindings.iter().any(|b| b.trim().eq_ignore_ascii_case(&name)),
            None => false,
        }
    }

    /// First binding of an action, for help text.
    pub fn label(bindings: &[String]) -> &str {
        bindings.first().map(String::as_str).unwrap_or("-")
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;

    fn key(code: KeyCode, ctrl: bool, alt: bool, shift: bool) -> AppKeyEvent {
        AppKeyEvent {
            code,
            ctrl,
            alt,
            shift,
        }
    }

    #[test]
    fn test_key_name_plain() {
        let k = key(KeyCode::Char('q'), false, false, false);
        assert_eq!(KeybindingsConfig::key_name(&k).as_deref(), Some("q"));

        let k = key(KeyCode::Right, false, false, false);
        assert_eq!(KeybindingsConfig::key_name(&k).as_deref(), Some("right"));
    }

    #[test]
    fn test_key_name_modifiers() {
        let k = key(KeyCode::Char('c'), true, false, false);
        assert_eq!(KeybindingsConfig::key_name(&k).as_deref(), Some("ctrl+c"));

        let k = key(KeyCode::Char('J'), false, false, true);
        assert_eq!(KeybindingsConfig::key_name(&k).as_deref(), Some("shift+j"));

        let k = key(KeyCode::BackTab, false, false, true);
        assert_eq!(KeybindingsConfig::key_name(&k).as_deref(), Some("shift+tab"));

        let k = key(KeyCode::Left, false, true, false);
        assert_eq!(KeybindingsConfig::key_name(&k).as_deref(), Some("alt+left"));
    }

    #[test]
    fn test_unbindable_key() {
        let k = key(KeyCode::Null, false, false, false);
        assert_eq!(KeybindingsConfig::key_name(&k), None);
        assert!(!KeybindingsConfig::matches(&k, &["".to_string()]));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let bindings = vec!["Left".to_string(), "h".to_string()];
        assert!(KeybindingsConfig::matches(
            &key(KeyCode::Left, false, false, false),
            &bindings
        ));
        assert!(KeybindingsConfig::matches(
            &key(KeyCode::Char('h'), false, false, false),
            &bindings
        ));
        assert!(!KeybindingsConfig::matches(
            &key(KeyCode::Right, false, false, false),
            &bindings
        ));
    }

    #[test]
    fn test_modified_arrow_does_not_match_plain_binding() {
        let bindings = vec!["right".to_string()];
        assert!(!KeybindingsConfig::matches(
            &key(KeyCode::Right, true, false, false),
            &bindings
        ));
    }

    #[test]
    fn test_defaults_cover_listener_keys() {
        let config = KeybindingsConfig::default();
        assert_eq!(config.navigation.previous, vec!["left".to_string()]);
        assert_eq!(config.navigation.next, vec!["right".to_string()]);
        assert_eq!(KeybindingsConfig::label(&config.global.quit), "q");
        assert_eq!(KeybindingsConfig::label(&[]), "-");
    }
}
