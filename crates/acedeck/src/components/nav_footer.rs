//! Progress indicator and navigation controls.
//!
//! ```text
//! ──────────────────────────────────────────────────────────────
//!  ◀ Previous         ○ ● ○ ○ ○ ○ ○ ○ ○ ○ ○ ○ ○ ○ ○ ○    Next ▶
//!                            Slide 2 of 16
//! Use ← → keys or click to navigate        ACE: Agentic Context...
//! ```
//!
//! Every render records where the buttons and dots were drawn so a click can
//! be mapped back to a navigation command. Dots never overlap the buttons:
//! when they cannot fit between them, even packed, they move to the spare
//! fourth row.

use super::{Component, EventResult};
use crate::data::keybindings_data::{KeybindingsConfig, NavigationBindings};
use crate::event::{AppKeyEvent, PointerEvent};
use crate::state::PresentationState;
use crate::util::styles::{ACTIVE_DOT, HELP_COLOR, INACTIVE_DOT, button_style, dot_style};
use acedeck_core::NavCommand;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PREV_LABEL: &str = " ◀ Previous ";
const NEXT_LABEL: &str = " Next ▶ ";

#[derive(Default)]
pub struct NavFooter {
    /// Clickable areas from the last render
    hits: Vec<(Rect, NavCommand)>,
}

impl NavFooter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command bound to the clickable area under `pointer`, if any.
    pub fn command_at(&self, pointer: PointerEvent) -> Option<NavCommand> {
        let position = pointer.position();
        self.hits
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, command)| *command)
    }

    /// Hint naming the keys currently bound to previous and next.
    pub fn nav_hint(bindings: &NavigationBindings) -> String {
        let glyph = |keys: &[String]| match KeybindingsConfig::label(keys) {
            "left" => "←",
            "right" => "→",
            other => other,
        }
        .to_string();
        format!(
            "Use {} {} keys or click to navigate",
            glyph(&bindings.previous),
            glyph(&bindings.next)
        )
    }

    /// Column step between dots when `count` of them must fit in `width`.
    fn dot_step(count: usize, width: u16) -> Option<u16> {
        let width = usize::from(width);
        if (count * 2).saturating_sub(1) <= width {
            Some(2)
        } else if count <= width {
            Some(1)
        } else {
            None
        }
    }

    /// Draw `text` at (`x`, `y`) clipped to `bounds`; returns the drawn area.
    fn put(
        frame: &mut Frame,
        bounds: Rect,
        x: u16,
        y: u16,
        text: &str,
        style: Style,
    ) -> Option<Rect> {
        if x >= bounds.right() || y >= bounds.bottom() {
            return None;
        }
        let width = (Span::raw(text).width() as u16).min(bounds.right() - x);
        let rect = Rect::new(x, y, width, 1);
        frame.render_widget(Span::styled(text.to_string(), style), rect);
        Some(rect)
    }
}

impl Component for NavFooter {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut PresentationState) -> EventResult {
        EventResult::NotHandled
    }

    fn handle_pointer(
        &mut self,
        pointer: PointerEvent,
        state: &mut PresentationState,
    ) -> EventResult {
        let Some(command) = self.command_at(pointer) else {
            return EventResult::NotHandled;
        };
        let Ok(mut navigator) = state.navigator.try_borrow_mut() else {
            return EventResult::NotHandled;
        };
        let changed = navigator.apply(command);
        tracing::debug!(?command, changed, index = navigator.current(), "Pointer navigation");
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &PresentationState) {
        self.hits.clear();

        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let navigator = state.navigator.borrow();
        let (shown, total) = navigator.position();

        // Row 0: buttons at the edges, dots centered between them
        let y = inner.y;
        let can_retreat = navigator.can_retreat();
        let prev = Self::put(frame, inner, inner.x, y, PREV_LABEL, button_style(can_retreat));
        if let Some(rect) = prev.filter(|_| can_retreat) {
            self.hits.push((rect, NavCommand::Retreat));
        }

        let next_width = Span::raw(NEXT_LABEL).width() as u16;
        let next_x = inner.right().saturating_sub(next_width).max(inner.x);
        let can_advance = navigator.can_advance();
        let next = Self::put(frame, inner, next_x, y, NEXT_LABEL, button_style(can_advance));
        if let Some(rect) = next.filter(|_| can_advance) {
            self.hits.push((rect, NavCommand::Advance));
        }

        let left = prev.map_or(inner.x, |rect| rect.right());
        let right = next.map_or(inner.right(), |rect| rect.x).max(left);
        let between = Rect::new(left, y, right - left, 1);
        let dots_area = match Self::dot_step(total, between.width) {
            Some(_) => between,
            None if inner.height > 3 => Rect::new(inner.x, inner.y + 3, inner.width, 1),
            None => between,
        };
        let step = Self::dot_step(total, dots_area.width).unwrap_or(1);
        let span = (total.saturating_sub(1) * usize::from(step)).saturating_add(1);
        let span = u16::try_from(span).unwrap_or(u16::MAX);
        let mut x = dots_area.x + dots_area.width.saturating_sub(span) / 2;
        for index in 0..total {
            let active = index == navigator.current();
            let glyph = if active { ACTIVE_DOT } else { INACTIVE_DOT };
            let drawn = Self::put(frame, dots_area, x, dots_area.y, glyph, dot_style(active));
            let Some(rect) = drawn else { break };
            self.hits.push((rect, NavCommand::JumpTo(index)));
            x = x.saturating_add(step);
        }

        // Row 1: position label
        if inner.height > 1 {
            let label = Paragraph::new(Line::from(Span::styled(
                format!("Slide {} of {}", shown, total),
                Style::default().add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(label, Rect::new(inner.x, inner.y + 1, inner.width, 1));
        }

        // Row 2: hint and deck footer
        if inner.height > 2 {
            let row = Rect::new(inner.x, inner.y + 2, inner.width, 1);
            let hint = Paragraph::new(Span::styled(
                Self::nav_hint(&state.keybindings.navigation),
                Style::default().fg(HELP_COLOR),
            ));
            frame.render_widget(hint, row);
            if let Some(footer) = &state.deck.meta().footer {
                let footer = Paragraph::new(Span::styled(
                    footer.clone(),
                    Style::default().fg(HELP_COLOR),
                ))
                .alignment(Alignment::Right);
                frame.render_widget(footer, row);
            }
        }
    }
}
