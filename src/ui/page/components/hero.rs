//! Hero section component
//!
//! Headline counters, the sticker row and the calls to action

use super::super::state::PageState;
use super::super::utils::{ACCENT, section_title};
use crate::effects::{STICKERS, Section, StickerStyle};
use crate::elements::ElementId;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Span, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use std::time::Instant;

const HERO_STATS: [(ElementId, &str); 3] = [
    (ElementId::TotalDonated, "Total Donated"),
    (ElementId::ActiveUsers, "Active Users"),
    (ElementId::CharitiesHelped, "Charities Helped"),
];

pub fn render_hero(f: &mut Frame, area: Rect, state: &PageState, style: Style, now: Instant) {
    let block = Block::default()
        .title(section_title(Section::Hero))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style.fg(ACCENT))
        .style(style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(inner);

    render_stats(f, rows[0], state, style);
    render_stickers(f, rows[1], state, style, now);
    render_actions(f, rows[2], state, style);
}

fn render_stats(f: &mut Frame, area: Rect, state: &PageState, style: Style) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for ((id, label), column) in HERO_STATS.iter().zip(columns.iter()) {
        let Some(value) = state.page.text(*id) else {
            continue;
        };
        let lines = vec![
            Line::from(Span::styled(
                value.to_string(),
                style.fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, style.fg(Color::Gray))),
        ];
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            *column,
        );
    }
}

fn render_stickers(f: &mut Frame, area: Rect, state: &PageState, style: Style, now: Instant) {
    if !state.page.contains(ElementId::Stickers) {
        return;
    }
    let mut spans = Vec::with_capacity(STICKERS.len() * 2);
    for (index, sticker) in STICKERS.iter().enumerate() {
        let span = match state.effects.sticker_style(index, now) {
            StickerStyle::Rest => Span::styled(format!(" {} ", sticker), style),
            StickerStyle::Hovered => Span::styled(
                format!("[{}]", sticker),
                style.fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            StickerStyle::Spinning { progress } => {
                // Four frames per spin.
                let frame = ["◐", "◓", "◑", "◒"][((progress * 4.0) as usize).min(3)];
                Span::styled(
                    format!("{}{}{}", frame, sticker, frame),
                    style
                        .fg(Color::LightYellow)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                )
            }
        };
        spans.push(span);
        spans.push(Span::raw("  "));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_actions(f: &mut Frame, area: Rect, state: &PageState, style: Style) {
    let mut spans = Vec::new();
    if let Some(label) = state.page.text(ElementId::TradeBtn) {
        spans.push(Span::styled(
            format!(" [T] {} ", label),
            style.fg(Color::Black).bg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("   "));
    }
    if let Some(label) = state.page.text(ElementId::FeedBtn) {
        spans.push(Span::styled(
            format!(" [F] {} ", label),
            style.fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
