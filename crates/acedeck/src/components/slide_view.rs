//! Slide body: title, subtitle and content blocks in a scrollable viewport.

use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::PresentationState;
use crate::util::styles::{CODE_COLOR, HEADER_COLOR, HELP_COLOR, TITLE_COLOR, tone_style};
use acedeck_core::{Column, ContentBlock, Slide};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph, Wrap},
};

const INDENT: &str = "  ";

#[derive(Default)]
pub struct SlideView {
    /// Largest useful scroll offset, measured at the last render
    max_scroll: u16,
    /// Rows visible at the last render
    viewport_height: u16,
}

impl SlideView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_scroll(&self) -> u16 {
        self.max_scroll
    }

    /// Lay out a whole slide as styled lines.
    pub fn slide_lines(slide: &Slide) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            slide.title.clone(),
            Style::default()
                .fg(TITLE_COLOR)
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(subtitle) = &slide.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.clone(),
                Style::default()
                    .fg(HELP_COLOR)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        for block in &slide.content {
            lines.push(Line::default());
            block_lines(block, &mut lines);
        }
        lines
    }

    fn scroll_by(&self, state: &mut PresentationState, delta: i32) {
        let target = i32::from(state.scroll) + delta;
        state.scroll = target.clamp(0, i32::from(self.max_scroll)) as u16;
    }
}

fn block_lines(block: &ContentBlock, out: &mut Vec<Line<'static>>) {
    match block {
        ContentBlock::Heading { text } => out.push(Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        ))),
        ContentBlock::Paragraph { text } => out.push(Line::raw(text.clone())),
        ContentBlock::Quote { text, attribution } => {
            out.push(Line::from(vec![
                Span::styled("│ ", Style::default().fg(HELP_COLOR)),
                Span::styled(
                    format!("\"{}\"", text),
                    Style::default().add_modifier(Modifier::ITALIC),
                ),
            ]));
            if let Some(who) = attribution {
                out.push(Line::from(Span::styled(
                    format!("{INDENT}- {}", who),
                    Style::default().fg(HELP_COLOR),
                )));
            }
        }
        ContentBlock::Bullets { items } => {
            for item in items {
                out.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(HEADER_COLOR)),
                    Span::raw(item.clone()),
                ]));
            }
        }
        ContentBlock::Code { language, lines } => {
            if let Some(language) = language {
                out.push(Line::from(Span::styled(
                    format!("[{}]", language),
                    Style::default().fg(HELP_COLOR),
                )));
            }
            for line in lines {
                out.push(Line::from(vec![
                    Span::styled("▏ ", Style::default().fg(HELP_COLOR)),
                    Span::styled(line.clone(), Style::default().fg(CODE_COLOR)),
                ]));
            }
        }
        ContentBlock::Table { headers, rows } => table_lines(headers, rows, out),
        ContentBlock::Callout { tone, text } => out.push(Line::from(vec![
            Span::styled("▌ ", tone_style(*tone)),
            Span::styled(text.clone(), tone_style(*tone).add_modifier(Modifier::BOLD)),
        ])),
        ContentBlock::Image { path, alt } => image_lines(path, alt, out),
        ContentBlock::Columns { columns } => {
            for (i, column) in columns.iter().enumerate() {
                if i > 0 {
                    out.push(Line::default());
                }
                column_lines(column, out);
            }
        }
    }
}

fn column_lines(column: &Column, out: &mut Vec<Line<'static>>) {
    let style = column.tone.map(tone_style).unwrap_or_default();
    out.push(Line::from(vec![
        Span::styled("■ ", style),
        Span::styled(column.title.clone(), style.add_modifier(Modifier::BOLD)),
    ]));

    let mut nested = Vec::new();
    for block in &column.blocks {
        block_lines(block, &mut nested);
    }
    out.extend(nested.into_iter().map(|line| {
        let mut spans = vec![Span::raw(INDENT)];
        spans.extend(line.spans);
        Line::from(spans).style(line.style)
    }));
}

/// Column-aligned table. Short rows are padded with empty cells and extra
/// cells are dropped so every row has the header's width.
fn table_lines(headers: &[String], rows: &[Vec<String>], out: &mut Vec<Line<'static>>) {
    let cell_width = |s: &str| Span::raw(s).width();
    let mut widths: Vec<usize> = headers.iter().map(|h| cell_width(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell_width(cell));
        }
    }

    let render_row = |cells: &[String], style: Style| {
        let mut spans = Vec::with_capacity(widths.len() * 2);
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(HELP_COLOR)));
            }
            let pad = width.saturating_sub(cell_width(cell));
            spans.push(Span::styled(format!("{}{}", cell, " ".repeat(pad)), style));
        }
        Line::from(spans)
    };

    out.push(render_row(
        headers,
        Style::default()
            .fg(HEADER_COLOR)
            .add_modifier(Modifier::BOLD),
    ));
    let rule_width = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    out.push(Line::from(Span::styled(
        "─".repeat(rule_width),
        Style::default().fg(HELP_COLOR),
    )));
    for row in rows {
        out.push(render_row(row.as_slice(), Style::default()));
    }
}

/// A terminal cannot paint the raster asset, so draw a labelled frame.
fn image_lines(path: &str, alt: &str, out: &mut Vec<Line<'static>>) {
    let inner = Span::raw(alt).width().max(Span::raw(path).width());
    let border = Style::default().fg(HELP_COLOR);
    let boxed = |text: &str, style: Style| {
        let pad = inner.saturating_sub(Span::raw(text).width());
        Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(format!("{}{}", text, " ".repeat(pad)), style),
            Span::styled(" │", border),
        ])
    };

    out.push(Line::from(Span::styled(
        format!("┌{}┐", "─".repeat(inner + 2)),
        border,
    )));
    out.push(boxed(alt, Style::default().add_modifier(Modifier::BOLD)));
    out.push(boxed(path, Style::default().fg(HELP_COLOR)));
    out.push(Line::from(Span::styled(
        format!("└{}┘", "─".repeat(inner + 2)),
        border,
    )));
}

impl Component for SlideView {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut PresentationState) -> EventResult {
        let page = i32::from(self.viewport_height.saturating_sub(1).max(1));
        let viewport = &state.keybindings.viewport;

        let delta = if KeybindingsConfig::matches(key, &viewport.scroll_up) {
            -1
        } else if KeybindingsConfig::matches(key, &viewport.scroll_down) {
            1
        } else if KeybindingsConfig::matches(key, &viewport.page_up) {
            -page
        } else if KeybindingsConfig::matches(key, &viewport.page_down) {
            page
        } else {
            return EventResult::NotHandled;
        };

        self.scroll_by(state, delta);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &PresentationState) {
        let block = Block::default().padding(Padding::horizontal(2));
        let inner = block.inner(area);

        // An out-of-range index draws an empty body.
        let lines = state
            .current_slide()
            .map(Self::slide_lines)
            .unwrap_or_default();

        // Measured with the same word wrapping the paragraph renders with.
        // The block only pads horizontally, so it is attached afterwards.
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        let total = paragraph.line_count(inner.width);
        self.viewport_height = inner.height;
        self.max_scroll = total
            .saturating_sub(usize::from(inner.height))
            .try_into()
            .unwrap_or(u16::MAX);

        let paragraph = paragraph
            .block(block)
            .scroll((state.scroll.min(self.max_scroll), 0));

        frame.render_widget(paragraph, area);
    }
}
