use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::PresentationState;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Deck title banner.
pub struct Header;

impl Component for Header {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut PresentationState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &PresentationState) {
        let meta = state.deck.meta();
        let mut lines = vec![Line::from(Span::styled(
            meta.title.clone(),
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(tagline) = &meta.tagline {
            lines.push(Line::from(Span::styled(
                tagline.clone(),
                Style::default().fg(HELP_COLOR),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));

        frame.render_widget(paragraph, area);
    }
}
