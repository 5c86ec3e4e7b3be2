//! Keybindings configuration data structures.
//!
//! Serialized to/from `~/.acedeck/keybindings.yaml`. Every action maps to a
//! list of key strings such as `"left"`, `"q"` or `"ctrl+c"`.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Host-level keys
    pub global: GlobalBindings,
    /// Keys the slide listener reacts to
    pub navigation: NavigationBindings,
    /// Scrolling inside a slide that is taller than the screen
    pub viewport: ViewportBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into(), "esc".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBindings {
    pub previous: Vec<String>,
    pub next: Vec<String>,
}

impl Default for NavigationBindings {
    fn default() -> Self {
        Self {
            previous: vec!["left".into()],
            next: vec!["right".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportBindings {
    pub scroll_up: Vec<String>,
    pub scroll_down: Vec<String>,
    pub page_up: Vec<String>,
    pub page_down: Vec<String>,
}

impl Default for ViewportBindings {
    fn default() -> Self {
        Self {
            scroll_up: vec!["up".into(), "k".into()],
            scroll_down: vec!["down".into(), "j".into()],
            page_up: vec!["pageup".into()],
            page_down: vec!["pagedown".into()],
        }
    }
}
