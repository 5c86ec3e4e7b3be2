use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::PresentationState;
use crate::util::styles::{ERROR_COLOR, HELP_COLOR};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    fn help_text(bindings: &KeybindingsConfig) -> String {
        let label = KeybindingsConfig::label;
        format!(
            "{}/{}: slide | {}/{}: scroll | {}/{}: page | click: jump | {}: quit",
            label(&bindings.navigation.previous),
            label(&bindings.navigation.next),
            label(&bindings.viewport.scroll_up),
            label(&bindings.viewport.scroll_down),
            label(&bindings.viewport.page_up),
            label(&bindings.viewport.page_down),
            label(&bindings.global.quit),
        )
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut PresentationState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &PresentationState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(ERROR_COLOR)),
                Span::raw(error.clone()),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(&state.keybindings),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
