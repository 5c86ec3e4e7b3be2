//! Platform-agnostic input event types.
//!
//! Key events arrive from crossterm on native builds and from ratzilla on web
//! builds; both are normalized into [`AppKeyEvent`] before they reach the
//! input bus. Pointer clicks are normalized into [`PointerEvent`].

#[cfg(feature = "native")]
pub use crossterm::event::KeyCode;

#[cfg(feature = "web")]
pub use ratzilla::event::KeyCode;

/// Unified key event.
#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// Unmodified key press.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn no_modifiers(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift
    }
}

#[cfg(feature = "native")]
impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(feature = "web")]
impl From<&ratzilla::event::KeyEvent> for AppKeyEvent {
    fn from(event: &ratzilla::event::KeyEvent) -> Self {
        Self {
            code: event.code.clone(),
            ctrl: event.ctrl,
            alt: event.alt,
            shift: event.shift,
        }
    }
}

/// A primary-button click at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub column: u16,
    pub row: u16,
}

impl PointerEvent {
    pub fn at(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    /// Left-button presses become clicks; every other mouse event is dropped.
    #[cfg(feature = "native")]
    pub fn from_mouse(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::{MouseButton, MouseEventKind};
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::at(event.column, event.row)),
            _ => None,
        }
    }

    pub fn position(&self) -> ratatui::layout::Position {
        ratatui::layout::Position::new(self.column, self.row)
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    #[test]
    fn test_from_crossterm_modifiers() {
        let key: AppKeyEvent =
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL | KeyModifiers::SHIFT).into();
        assert!(key.ctrl);
        assert!(key.shift);
        assert!(!key.alt);
        assert!(!key.no_modifiers());
    }

    #[test]
    fn test_only_left_press_is_a_click() {
        let mouse = |kind| MouseEvent {
            kind,
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        };

        assert_eq!(
            PointerEvent::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(PointerEvent::at(4, 9))
        );
        assert_eq!(
            PointerEvent::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(PointerEvent::from_mouse(&mouse(MouseEventKind::Moved)), None);
    }
}
