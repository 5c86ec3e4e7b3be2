//! Web entry point for acedeck using ratzilla.
//!
//! The same presentation renders into ratzilla's DOM grid. The input bus lives
//! outside the app cell, so dispatching a key never holds a borrow of the app.

use std::cell::RefCell;
use std::rc::Rc;

use acedeck_core::{BoundaryPolicy, InputBus};
use ratatui::Terminal;
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::components::EventResult;
use crate::data::deck_data::builtin_deck;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::presentation::Presentation;

/// Web application state wrapped for callback access.
struct WebApp {
    presentation: Presentation,
}

impl WebApp {
    fn new(presentation: Presentation) -> Self {
        Self { presentation }
    }

    /// Host keys first. Returns the key back if the listener should see it.
    fn handle_key(&mut self, key: AppKeyEvent) -> Option<AppKeyEvent> {
        match self.presentation.handle_key(&key) {
            EventResult::Exit => {
                // A browser tab cannot be closed from here
                tracing::info!("Exit requested");
                None
            }
            EventResult::Handled => None,
            EventResult::NotHandled => Some(key),
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame) {
        self.presentation.draw(frame);
    }
}

/// Keep the page from scrolling on the keys the presentation uses.
fn setup_prevent_default() -> Result<(), JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        let should_prevent = matches!(
            event.key().as_str(),
            "ArrowLeft" | "ArrowRight" | "ArrowUp" | "ArrowDown" | "PageUp" | "PageDown" | " "
        );
        if should_prevent {
            event.prevent_default();
        }
    });

    document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

    // The listener lives as long as the page
    closure.forget();
    Ok(())
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    crate::init_logging_web();

    tracing::info!("acedeck web version starting");

    setup_prevent_default()?;

    let deck = builtin_deck().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let bus: InputBus<AppKeyEvent> = InputBus::new();
    let mut presentation =
        Presentation::new(deck, BoundaryPolicy::default(), KeybindingsConfig::default());
    presentation.mount(&bus);

    let app = Rc::new(RefCell::new(WebApp::new(presentation)));

    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let app_clone = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        let unhandled = app_clone.borrow_mut().handle_key(key);
        if let Some(key) = unhandled {
            bus.dispatch(&key);
        }
    });

    terminal.draw_web(move |frame| {
        app.borrow_mut().draw(frame);
    });

    Ok(())
}
