//! Toast and modal overlays
//!
//! Drawn last so they sit above the page sections

use super::super::state::PageState;
use super::super::utils::{ACCENT, centered_rect, severity_color};
use crate::consts::cli_consts::timing;
use crate::overlay::{TRADE_MODAL_BODY, TRADE_MODAL_TITLE, ToastPhase, TradeModal};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Span, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use std::time::{Duration, Instant};

const TOAST_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;
const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 10;

/// Where the trade modal is drawn inside `area`. Clicks outside of it hit
/// the backdrop.
pub fn modal_area(area: Rect) -> Rect {
    centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area)
}

/// Render toasts stacked from the top-right corner, newest last.
pub fn render_toasts(f: &mut Frame, area: Rect, state: &PageState, now: Instant) {
    if state.toasts.is_empty() {
        return;
    }
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    let mut y = area.y + 1;

    for toast in state.toasts.iter() {
        // Exiting toasts slide right as they leave.
        let shift = match toast.phase(now) {
            ToastPhase::Visible => 0,
            ToastPhase::Exiting { progress } => (progress * width as f64).round() as u16,
            ToastPhase::Gone => continue,
        };
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let toast_area = Rect {
            x: x + shift,
            y,
            width: width - shift,
            height: TOAST_HEIGHT,
        };
        y += TOAST_HEIGHT;
        if toast_area.width < 4 {
            continue;
        }

        let color = severity_color(toast.severity);
        let paragraph = Paragraph::new(Line::from(Span::styled(
            toast.message.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Rgb(30, 41, 59))),
        );
        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph, toast_area);
    }
}

/// Render the trade modal over a cleared area; its border fades in.
pub fn render_trade_modal(f: &mut Frame, area: Rect, trade_modal: &TradeModal, now: Instant) {
    let modal = modal_area(area);
    let fading_in = now.saturating_duration_since(trade_modal.opened_at)
        < Duration::from_millis(timing::TOAST_EXIT_MS);
    let border_style = if fading_in {
        Style::default().fg(ACCENT).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(ACCENT)
    };
    let lines = vec![
        Line::default(),
        Line::from(TRADE_MODAL_BODY),
        Line::default(),
        Line::from(vec![
            Span::styled(
                " [C] Connect Wallet ",
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(" [L] Learn More ", Style::default().fg(ACCENT)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(TRADE_MODAL_TITLE)
                .title_bottom(Line::from("[X] close").right_aligned())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(border_style)
                .style(Style::default().bg(Color::Rgb(30, 41, 59))),
        );
    f.render_widget(Clear, modal);
    f.render_widget(paragraph, modal);
}
