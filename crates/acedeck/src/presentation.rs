//! The mounted slide deck: components, shared state and the keyboard listener.

use std::rc::Rc;

use acedeck_core::{BoundaryPolicy, Deck, InputBus, NavCommand, Subscription};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, header::Header, nav_footer::NavFooter, slide_view::SlideView,
    status_bar::StatusBar,
};
use crate::data::keybindings_data::{KeybindingsConfig, NavigationBindings};
use crate::event::{AppKeyEvent, PointerEvent};
use crate::state::PresentationState;

pub struct Presentation {
    state: PresentationState,
    header: Header,
    slide_view: SlideView,
    nav_footer: NavFooter,
    status_bar: StatusBar,
    /// Keyboard listener; present while mounted
    listener: Option<Subscription<AppKeyEvent>>,
}

impl Presentation {
    pub fn new(deck: Deck, policy: BoundaryPolicy, keybindings: KeybindingsConfig) -> Self {
        Self {
            state: PresentationState::new(deck, policy, keybindings),
            header: Header,
            slide_view: SlideView::new(),
            nav_footer: NavFooter::new(),
            status_bar: StatusBar,
            listener: None,
        }
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// Start listening for navigation keys on `bus`.
    ///
    /// Mounting again replaces the previous listener, so at most one handler
    /// per presentation is ever registered.
    pub fn mount(&mut self, bus: &InputBus<AppKeyEvent>) {
        self.listener = None;

        let navigator = Rc::downgrade(&self.state.navigator);
        let bindings: NavigationBindings = self.state.keybindings.navigation.clone();

        self.listener = Some(bus.subscribe(move |key: &AppKeyEvent| {
            let command = if KeybindingsConfig::matches(key, &bindings.next) {
                NavCommand::Advance
            } else if KeybindingsConfig::matches(key, &bindings.previous) {
                NavCommand::Retreat
            } else {
                return;
            };
            let Some(navigator) = navigator.upgrade() else {
                return;
            };
            let Ok(mut navigator) = navigator.try_borrow_mut() else {
                return;
            };
            let changed = navigator.apply(command);
            tracing::debug!(?command, changed, index = navigator.current(), "Key navigation");
        }));

        tracing::info!(
            slides = self.state.deck.len().get(),
            policy = self.state.policy().name(),
            "Presentation mounted"
        );
    }

    /// Stop listening. Safe to call when not mounted.
    pub fn unmount(&mut self) {
        if self.listener.take().is_some() {
            tracing::info!("Presentation unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        self.state.sync_viewport();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Slide
                Constraint::Length(5), // Dots, position, buttons
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.header.render(frame, chunks[0], &self.state);
        self.slide_view.render(frame, chunks[1], &self.state);
        self.nav_footer.render(frame, chunks[2], &self.state);
        self.status_bar.render(frame, chunks[3], &self.state);
    }

    /// Host-level keys: quit and viewport scrolling.
    ///
    /// Navigation keys are not handled here; they reach the listener through
    /// the input bus.
    pub fn handle_key(&mut self, key: &AppKeyEvent) -> EventResult {
        self.state.clear_error();

        if KeybindingsConfig::matches(key, &self.state.keybindings.global.quit) {
            return EventResult::Exit;
        }

        self.state.sync_viewport();
        self.slide_view.handle_key(key, &mut self.state)
    }

    pub fn handle_pointer(&mut self, pointer: PointerEvent) -> EventResult {
        self.nav_footer.handle_pointer(pointer, &mut self.state)
    }

    pub fn set_error(&mut self, message: String) {
        tracing::warn!(%message, "Presentation error");
        self.state.set_error(message);
    }
}

impl Drop for Presentation {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use crate::util::styles::{ACTIVE_DOT, INACTIVE_DOT};
    use acedeck_core::{ContentBlock, DeckMeta, Slide};
    use ratatui::{Terminal, backend::TestBackend};

    fn deck() -> Deck {
        Deck::new(
            DeckMeta::titled("Demo"),
            vec![
                Slide::new("Opening"),
                Slide::new("The Big Picture").subtitle("Why context?"),
                Slide::new("Closing"),
            ],
        )
        .unwrap()
    }

    fn presentation(policy: BoundaryPolicy) -> Presentation {
        Presentation::new(deck(), policy, KeybindingsConfig::default())
    }

    fn screen(presentation: &mut Presentation) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| presentation.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn press(bus: &InputBus<AppKeyEvent>, code: KeyCode) -> usize {
        bus.dispatch(&AppKeyEvent::plain(code))
    }

    #[test]
    fn test_render_shows_current_title_and_one_active_dot() {
        let mut p = presentation(BoundaryPolicy::Clamp);
        p.state.navigator.borrow_mut().jump_to(1);
        let rows = screen(&mut p);

        let title_row = rows
            .iter()
            .find(|r| r.contains("The Big Picture"))
            .expect("title drawn");
        assert_eq!(title_row.trim(), "The Big Picture");
        assert!(rows.iter().any(|r| r.contains("Why context?")));
        let dots: usize = rows.iter().map(|r| r.matches(ACTIVE_DOT).count()).sum();
        assert_eq!(dots, 1);
        let hollow: usize = rows.iter().map(|r| r.matches(INACTIVE_DOT).count()).sum();
        assert_eq!(hollow, 2);
        assert!(rows.iter().any(|r| r.contains("Slide 2 of 3")));
    }

    #[test]
    fn test_arrow_keys_through_bus() {
        let bus = InputBus::new();
        let mut p = presentation(BoundaryPolicy::Clamp);
        p.mount(&bus);

        assert_eq!(press(&bus, KeyCode::Right), 1);
        assert_eq!(p.current_index(), 1);
        press(&bus, KeyCode::Left);
        assert_eq!(p.current_index(), 0);
        press(&bus, KeyCode::Char('x'));
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn test_unmount_releases_listener() {
        let bus = InputBus::new();
        let mut p = presentation(BoundaryPolicy::Wrap);
        p.mount(&bus);
        p.unmount();

        assert!(!p.is_mounted());
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(press(&bus, KeyCode::Right), 0);
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn test_remount_does_not_stack_listeners() {
        let bus = InputBus::new();
        let mut p = presentation(BoundaryPolicy::Wrap);
        for _ in 0..5 {
            p.mount(&bus);
        }
        assert_eq!(bus.subscriber_count(), 1);

        press(&bus, KeyCode::Right);
        assert_eq!(p.current_index(), 1);
    }

    #[test]
    fn test_dropping_presentation_unsubscribes() {
        let bus = InputBus::new();
        {
            let mut p = presentation(BoundaryPolicy::Wrap);
            p.mount(&bus);
            assert_eq!(bus.subscriber_count(), 1);
        }
        assert_eq!(bus.subscriber_count(), 0);
        assert_eq!(press(&bus, KeyCode::Left), 0);
    }

    #[test]
    fn test_wrap_and_clamp_at_last_slide() {
        let bus = InputBus::new();
        let mut clamp = presentation(BoundaryPolicy::Clamp);
        let mut wrap = presentation(BoundaryPolicy::Wrap);
        clamp.mount(&bus);
        wrap.mount(&bus);

        press(&bus, KeyCode::Left);
        assert_eq!(clamp.current_index(), 0);
        assert_eq!(wrap.current_index(), 2);

        for _ in 0..3 {
            press(&bus, KeyCode::Right);
        }
        assert_eq!(clamp.current_index(), 2);
        assert_eq!(wrap.current_index(), 2);
    }

    #[test]
    fn test_click_next_button_and_dot() {
        let mut p = presentation(BoundaryPolicy::Wrap);
        let rows = screen(&mut p);

        let controls_y = rows
            .iter()
            .position(|r| r.contains(ACTIVE_DOT))
            .expect("controls row") as u16;
        let next_x = rows[controls_y as usize]
            .chars()
            .position(|c| c == '▶')
            .expect("next button") as u16;

        assert_eq!(
            p.handle_pointer(PointerEvent::at(next_x, controls_y)),
            EventResult::Handled
        );
        assert_eq!(p.current_index(), 1);

        screen(&mut p);
        let last_dot = rows[controls_y as usize]
            .chars()
            .enumerate()
            .filter(|(_, c)| c.to_string() == INACTIVE_DOT)
            .map(|(x, _)| x as u16)
            .last()
            .expect("dot");
        p.handle_pointer(PointerEvent::at(last_dot, controls_y));
        assert_eq!(p.current_index(), 2);
    }

    #[test]
    fn test_clamp_disabled_button_click_is_ignored() {
        let mut p = presentation(BoundaryPolicy::Clamp);
        let rows = screen(&mut p);
        let controls_y = rows
            .iter()
            .position(|r| r.contains("Previous"))
            .expect("controls row") as u16;

        assert_eq!(
            p.handle_pointer(PointerEvent::at(2, controls_y)),
            EventResult::NotHandled
        );
        assert_eq!(p.current_index(), 0);
    }

    #[test]
    fn test_scroll_resets_on_slide_change() {
        let long = (0..60).fold(Slide::new("Long"), |slide, i| {
            slide.block(ContentBlock::paragraph(format!("line {}", i)))
        });
        let deck = Deck::new(DeckMeta::titled("Demo"), vec![long, Slide::new("Short")]).unwrap();
        let mut p = Presentation::new(deck, BoundaryPolicy::Wrap, KeybindingsConfig::default());
        let bus = InputBus::new();
        p.mount(&bus);
        screen(&mut p);

        let down = AppKeyEvent::plain(KeyCode::Down);
        assert_eq!(p.handle_key(&down), EventResult::Handled);
        p.handle_key(&AppKeyEvent::plain(KeyCode::PageDown));
        assert!(p.state().scroll > 1);

        press(&bus, KeyCode::Right);
        screen(&mut p);
        assert_eq!(p.state().scroll, 0);
    }

    #[test]
    fn test_quit_keys_exit() {
        let mut p = presentation(BoundaryPolicy::Wrap);
        assert_eq!(
            p.handle_key(&AppKeyEvent::plain(KeyCode::Char('q'))),
            EventResult::Exit
        );
        assert_eq!(
            p.handle_key(&AppKeyEvent::plain(KeyCode::Char('c')).with_ctrl()),
            EventResult::Exit
        );
        assert_eq!(
            p.handle_key(&AppKeyEvent::plain(KeyCode::Right)),
            EventResult::NotHandled
        );
    }

    #[test]
    fn test_next_key_clears_error() {
        let mut p = presentation(BoundaryPolicy::Wrap);
        p.set_error("deck reloaded".into());
        assert!(screen(&mut p).iter().any(|r| r.contains("Error: deck reloaded")));
        p.handle_key(&AppKeyEvent::plain(KeyCode::Down));
        assert!(p.state().error_message.is_none());
    }
}
