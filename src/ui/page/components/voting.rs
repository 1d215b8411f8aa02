//! Community voting section
//!
//! One gauge per charity, the vote buttons and the viewer's voting power

use super::super::state::PageState;
use super::super::utils::{SUCCESS, charity_color, section_title};
use crate::effects::{Section, VoteButtonStyle};
use crate::elements::ElementId;
use crate::voting::CharityKey;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Span, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};
use std::time::Instant;

pub fn render_voting_section(
    f: &mut Frame,
    area: Rect,
    state: &PageState,
    style: Style,
    now: Instant,
) {
    let block = Block::default()
        .title(section_title(Section::Voting))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style.fg(Color::LightMagenta))
        .style(style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(inner);

    for (index, charity) in CharityKey::ALL.iter().enumerate() {
        render_charity_row(f, rows[index], state, *charity, index + 1, style, now);
    }
    render_totals(f, rows[3], state, style);
}

fn render_charity_row(
    f: &mut Frame,
    area: Rect,
    state: &PageState,
    charity: CharityKey,
    hotkey: usize,
    style: Style,
    now: Instant,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(14)])
        .split(area);

    if let Some(slot) = state.page.slot(charity.progress_element()) {
        let votes = state.page.text(charity.votes_element()).unwrap_or("");
        let percentage = state.page.text(charity.percentage_element()).unwrap_or("");
        let percent = slot.width.unwrap_or(0.0).round().clamp(0.0, 100.0) as u16;
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(charity.display_name())
                    .borders(Borders::ALL)
                    .border_style(style.fg(Color::DarkGray)),
            )
            .gauge_style(style.fg(charity_color(charity)).bg(Color::Black))
            .percent(percent)
            .label(format!("{} votes · {}", votes, percentage));
        f.render_widget(gauge, columns[0]);
    }

    if let Some(label) = state.page.text(charity.button_element()) {
        let button_style = match state.effects.vote_style(charity, now) {
            VoteButtonStyle::Rest => style.fg(charity_color(charity)),
            VoteButtonStyle::Pressed => style
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            VoteButtonStyle::Highlighted => style
                .fg(Color::Black)
                .bg(SUCCESS)
                .add_modifier(Modifier::BOLD),
        };
        let button = Paragraph::new(Line::from(Span::styled(
            format!(" [{}] {} ", hotkey, label),
            button_style,
        )))
        .block(Block::default().borders(Borders::ALL).border_style(style.fg(Color::DarkGray)));
        f.render_widget(button, columns[1]);
    }
}

fn render_totals(f: &mut Frame, area: Rect, state: &PageState, style: Style) {
    let mut spans = Vec::new();
    if let Some(total) = state.page.text(ElementId::TotalVotes) {
        spans.push(Span::styled("Total votes: ", style.fg(Color::Gray)));
        spans.push(Span::styled(total.to_string(), style.add_modifier(Modifier::BOLD)));
        spans.push(Span::raw("    "));
    }
    if let Some(power) = state.page.text(ElementId::UserVotingPower) {
        spans.push(Span::styled("Your voting power: ", style.fg(Color::Gray)));
        spans.push(Span::styled(
            power.to_string(),
            style.fg(Color::LightYellow).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
