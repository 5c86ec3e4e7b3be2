use std::cell::RefCell;
use std::rc::Rc;

use acedeck_core::{BoundaryPolicy, Deck, Navigator, Slide};

use crate::data::keybindings_data::KeybindingsConfig;

/// Everything the presentation components read while drawing.
///
/// The navigator is shared with the keyboard listener, which holds only a
/// weak handle to it. Scroll offset is viewport state and lives here rather
/// than in the navigator.
pub struct PresentationState {
    pub deck: Rc<Deck>,
    pub navigator: Rc<RefCell<Navigator>>,
    pub keybindings: KeybindingsConfig,
    /// Rows scrolled past the top of the current slide
    pub scroll: u16,
    /// Slide the scroll offset belongs to
    shown_slide: usize,
    pub error_message: Option<String>,
}

impl PresentationState {
    pub fn new(deck: Deck, policy: BoundaryPolicy, keybindings: KeybindingsConfig) -> Self {
        let navigator = Navigator::for_deck(&deck, policy);
        Self {
            deck: Rc::new(deck),
            navigator: Rc::new(RefCell::new(navigator)),
            keybindings,
            scroll: 0,
            shown_slide: 0,
            error_message: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.navigator.borrow().current()
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.navigator.borrow().policy()
    }

    /// The slide to draw, or `None` if the index was jumped out of range.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.deck.get(self.current_index())
    }

    /// Reset the scroll offset if the slide changed since the last call.
    /// Returns true when a reset happened.
    pub fn sync_viewport(&mut self) -> bool {
        let current = self.current_index();
        if current == self.shown_slide {
            return false;
        }
        self.shown_slide = current;
        self.scroll = 0;
        true
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
