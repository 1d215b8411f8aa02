//! Live donation feed section
//!
//! Renders the newest-first donation list next to the feed stats and controls

use super::super::state::PageState;
use super::super::utils::{ACCENT, SUCCESS, section_title};
use crate::effects::Section;
use crate::elements::ElementId;
use crate::format::format_currency;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Span, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};

const FEED_STATS: [(ElementId, &str); 3] = [
    (ElementId::TodayDonations, "Today's Donations"),
    (ElementId::TotalTransactions, "Transactions"),
    (ElementId::AvgDonation, "Avg Donation"),
];

pub fn render_feed_section(f: &mut Frame, area: Rect, state: &PageState, style: Style) {
    let block = Block::default()
        .title(section_title(Section::Feed))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style.fg(Color::LightGreen))
        .style(style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner);

    render_entries(f, columns[0], state, style);
    render_sidebar(f, columns[1], state, style);
}

fn render_entries(f: &mut Frame, area: Rect, state: &PageState, style: Style) {
    let Some(label) = state.page.text(ElementId::DonationFeed) else {
        return;
    };
    let block = Block::default()
        .title(label.to_string())
        .borders(Borders::RIGHT)
        .border_style(style.fg(Color::DarkGray));

    if state.feed.is_empty() {
        let placeholder = Paragraph::new(Span::styled("No donations yet", style.fg(Color::DarkGray)))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state
        .feed
        .entries()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", entry.icon)),
                Span::styled(format!("{:<28}", entry.charity), style.add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("{:>8}", format_currency(entry.amount())),
                    style.fg(SUCCESS).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} • {}", entry.user, entry.age_label()),
                    style.fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn render_sidebar(f: &mut Frame, area: Rect, state: &PageState, style: Style) {
    let mut lines = Vec::new();
    for (id, label) in FEED_STATS {
        let Some(value) = state.page.text(id) else {
            continue;
        };
        lines.push(Line::from(Span::styled(label, style.fg(Color::Gray))));
        lines.push(Line::from(Span::styled(
            format!("  {}", value),
            style.fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::default());

    if let Some(label) = state.page.text(ElementId::RefreshFeed) {
        lines.push(Line::from(Span::styled(
            format!("[R] {}", label),
            style.fg(Color::Cyan),
        )));
    }
    if let Some(slot) = state.page.slot(ElementId::PauseFeed) {
        let pause_style = if slot.highlighted {
            style.fg(Color::Black).bg(SUCCESS).add_modifier(Modifier::BOLD)
        } else {
            style.fg(Color::Cyan)
        };
        lines.push(Line::from(Span::styled(
            format!("[P] {}", slot.text),
            pause_style,
        )));
    }

    f.render_widget(Paragraph::new(lines).style(style), area);
}
