//! Page header component
//!
//! Renders the brand title and the feed status

use super::super::state::PageState;
use super::super::utils::{ACCENT, format_uptime};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Span, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use std::time::Instant;

/// Render the title bar.
pub fn render_header(f: &mut Frame, area: Rect, state: &PageState, now: Instant) {
    let version = env!("CARGO_PKG_VERSION");
    let (status, status_color) = if state.feed_paused {
        ("PAUSED", Color::LightYellow)
    } else {
        ("LIVE", Color::LightGreen)
    };

    let title = Line::from(vec![
        Span::styled(
            format!("STICKER ($STKR) v{}", version),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  Trade for good  ·  Feed "),
        Span::styled(
            status,
            Style::default()
                .fg(status_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ·  Open {}", format_uptime(now.saturating_duration_since(state.start_time))),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(header, area);
}
