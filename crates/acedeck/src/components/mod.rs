pub mod header;
pub mod nav_footer;
pub mod slide_view;
pub mod status_bar;

use ratatui::{Frame, layout::Rect};

use crate::event::{AppKeyEvent, PointerEvent};
use crate::state::PresentationState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
    /// Request app exit
    Exit,
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut PresentationState) -> EventResult;

    /// Handle a click. Only components with clickable areas override this.
    fn handle_pointer(
        &mut self,
        _pointer: PointerEvent,
        _state: &mut PresentationState,
    ) -> EventResult {
        EventResult::NotHandled
    }

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &PresentationState);
}
