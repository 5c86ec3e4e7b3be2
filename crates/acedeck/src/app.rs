use std::io;

use acedeck_core::{BoundaryPolicy, Deck, InputBus};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::components::EventResult;
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, PointerEvent};
use crate::presentation::Presentation;

pub struct App {
    /// Fan-out for key events the host does not consume itself
    bus: InputBus<AppKeyEvent>,
    presentation: Presentation,
    exit: bool,
}

impl App {
    pub fn new(deck: Deck, policy: BoundaryPolicy, keybindings: KeybindingsConfig) -> Self {
        Self {
            bus: InputBus::new(),
            presentation: Presentation::new(deck, policy, keybindings),
            exit: false,
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        crossterm::execute!(io::stdout(), EnableMouseCapture)?;
        self.presentation.mount(&self.bus);

        let result = self.event_loop(terminal);

        self.presentation.unmount();
        if let Err(e) = crossterm::execute!(io::stdout(), DisableMouseCapture) {
            tracing::warn!(error = %e, "Failed to disable mouse capture");
        }
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.presentation.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event.into())
            }
            Event::Mouse(mouse_event) => {
                if let Some(pointer) = PointerEvent::from_mouse(&mouse_event) {
                    self.presentation.handle_pointer(pointer);
                }
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key: AppKeyEvent) {
        match self.presentation.handle_key(&key) {
            EventResult::Exit => {
                tracing::info!("Exit requested");
                self.exit = true;
            }
            EventResult::Handled => {}
            EventResult::NotHandled => {
                self.bus.dispatch(&key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use acedeck_core::{DeckMeta, Slide};

    fn app() -> App {
        let deck = Deck::new(
            DeckMeta::titled("Demo"),
            vec![Slide::new("A"), Slide::new("B"), Slide::new("C")],
        )
        .unwrap();
        let mut app = App::new(deck, BoundaryPolicy::Wrap, KeybindingsConfig::default());
        app.presentation.mount(&app.bus);
        app
    }

    #[test]
    fn test_unhandled_keys_reach_listener() {
        let mut app = app();
        app.handle_key_event(AppKeyEvent::plain(KeyCode::Right));
        app.handle_key_event(AppKeyEvent::plain(KeyCode::Right));
        assert_eq!(app.presentation.current_index(), 2);
        app.handle_key_event(AppKeyEvent::plain(KeyCode::Right));
        assert_eq!(app.presentation.current_index(), 0);
        assert!(!app.exit);
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut app = app();
        app.handle_key_event(AppKeyEvent::plain(KeyCode::Esc));
        assert!(app.exit);
    }

    #[test]
    fn test_custom_navigation_bindings() {
        let deck = Deck::new(
            DeckMeta::titled("Demo"),
            vec![Slide::new("A"), Slide::new("B")],
        )
        .unwrap();
        let mut bindings = KeybindingsConfig::default();
        bindings.navigation.next = vec!["l".into()];
        let mut app = App::new(deck, BoundaryPolicy::Clamp, bindings);
        app.presentation.mount(&app.bus);

        app.handle_key_event(AppKeyEvent::plain(KeyCode::Right));
        assert_eq!(app.presentation.current_index(), 0);
        app.handle_key_event(AppKeyEvent::plain(KeyCode::Char('l')));
        assert_eq!(app.presentation.current_index(), 1);
    }
}
