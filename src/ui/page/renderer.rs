//! Page main renderer

use super::components::{feed, footer, header, hero, membership, overlays, voting};
use super::state::PageState;
use super::utils::{reveal_style, slide_in};
use crate::effects::Section;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use std::time::Instant;

/// Rows taken by the margin, header and footer.
const CHROME_ROWS: u16 = 6;

/// Rows left for page sections in a terminal `height` rows tall.
pub fn body_rows(height: u16) -> u16 {
    height.saturating_sub(CHROME_ROWS)
}

pub fn render_page(f: &mut Frame, state: &PageState, now: Instant) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(15, 23, 42))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state, now);

    let sections = state.visible_sections();
    let mut constraints: Vec<Constraint> = sections
        .iter()
        .map(|section| Constraint::Length(section.height()))
        .collect();
    constraints.push(Constraint::Fill(1));
    let section_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(main_chunks[1]);

    for (section, area) in sections.iter().zip(section_chunks.iter()) {
        let progress = state.reveal.progress(*section, now);
        let area = slide_in(*area, progress);
        let style = reveal_style(progress);
        match section {
            Section::Hero => hero::render_hero(f, area, state, style, now),
            Section::Feed => feed::render_feed_section(f, area, state, style),
            Section::Voting => voting::render_voting_section(f, area, state, style, now),
            Section::Membership => membership::render_membership(f, area, state, style, now),
        }
    }

    footer::render_footer(f, main_chunks[2], state);

    overlays::render_toasts(f, f.area(), state, now);
    if let Some(trade_modal) = &state.modal {
        overlays::render_trade_modal(f, f.area(), trade_modal, now);
    }
}
