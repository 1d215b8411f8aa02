//! Membership section component
//!
//! Renders the soulbound membership card with its hover lift

use super::super::state::PageState;
use super::super::utils::{ACCENT, centered_rect, section_title};
use crate::effects::{CardStyle, Section};
use crate::elements::ElementId;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Span, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use std::time::Instant;

const CARD_WIDTH: u16 = 44;
const CARD_HEIGHT: u16 = 6;

pub fn render_membership(f: &mut Frame, area: Rect, state: &PageState, style: Style, now: Instant) {
    let block = Block::default()
        .title(section_title(Section::Membership))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style.fg(Color::LightYellow))
        .style(style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if !state.page.contains(ElementId::SbtCard) {
        return;
    }

    let card_style = state.effects.card_style(now);
    let mut card_area = centered_rect(CARD_WIDTH, CARD_HEIGHT, inner);
    // Lifted cards sit one row higher.
    if card_style == CardStyle::Lifted && card_area.y > inner.y {
        card_area.y -= 1;
    }

    let (border_type, border_color) = match card_style {
        CardStyle::Rest => (BorderType::Rounded, Color::Gray),
        CardStyle::Lifted => (BorderType::Thick, ACCENT),
        CardStyle::Raised => (BorderType::Double, Color::LightYellow),
    };

    let lines = vec![
        Line::from(Span::styled(
            "STKR MEMBER",
            style.fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Soulbound Token · Non-transferable",
            style.fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Governance votes · Donation history",
            style,
        )),
        Line::from(Span::styled("[M] Inspect", style.fg(Color::DarkGray))),
    ];

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(style.fg(border_color)),
    );
    f.render_widget(card, card_area);
}
