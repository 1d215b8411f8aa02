//! Page footer component
//!
//! Renders the key bindings

use super::super::state::PageState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the key hint footer; the modal has its own bindings.
pub fn render_footer(f: &mut Frame, area: Rect, state: &PageState) {
    let footer_text = if state.modal.is_some() {
        "[C] Connect Wallet | [L] Learn More | [X/Esc] Close | [Q] Quit"
    } else {
        "[T] Trade | [F] Feed | [R] Refresh | [P] Pause | [1-3] Vote | [←/→] Stickers | [S] Spin | [M] Card | [↑/↓] Scroll | [Q] Quit"
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
