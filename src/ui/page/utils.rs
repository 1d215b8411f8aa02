//! Page utility functions
//!
//! Contains helper functions used across page components

use crate::effects::Section;
use crate::overlay::Severity;
use crate::voting::CharityKey;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use std::time::Duration;

/// Brand accent.
pub const ACCENT: Color = Color::Rgb(245, 158, 11);

/// Success green used by the pause control and vote highlights.
pub const SUCCESS: Color = Color::Rgb(16, 185, 129);

/// Get a ratatui color for a toast severity
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Rgb(59, 130, 246),
        Severity::Success => SUCCESS,
        Severity::Error => Color::Rgb(239, 68, 68),
    }
}

pub fn charity_color(charity: CharityKey) -> Color {
    match charity {
        CharityKey::Unicef => Color::LightBlue,
        CharityKey::Doctors => Color::LightRed,
        CharityKey::Environment => Color::LightGreen,
    }
}

/// Style for a section still fading in: dim until the reveal completes.
pub fn reveal_style(progress: f64) -> Style {
    if progress >= 1.0 {
        Style::default()
    } else if progress >= 0.5 {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }
}

/// Shift `area` down while the section slides in (up to 2 rows).
pub fn slide_in(area: Rect, progress: f64) -> Rect {
    let offset = ((1.0 - progress.clamp(0.0, 1.0)) * 2.0).round() as u16;
    let offset = offset.min(area.height.saturating_sub(1));
    Rect {
        y: area.y + offset,
        height: area.height - offset,
        ..area
    }
}

/// A `width` x `height` rectangle centered in `area`, clamped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Time the page has been open, coarsest units first.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    if secs >= 86400 {
        format!("{}d {}h {}m", secs / 86400, (secs % 86400) / 3600, (secs % 3600) / 60)
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

pub fn section_title(section: Section) -> &'static str {
    match section {
        Section::Hero => "STICKER ($STKR)",
        Section::Feed => "LIVE DONATION FEED",
        Section::Voting => "COMMUNITY VOTING",
        Section::Membership => "MEMBERSHIP SBT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_in_settles_back_into_place() {
        let area = Rect::new(0, 10, 40, 9);
        assert_eq!(slide_in(area, 0.0), Rect::new(0, 12, 40, 7));
        assert_eq!(slide_in(area, 1.0), area);
    }

    #[test]
    fn uptime_units() {
        assert_eq!(format_uptime(Duration::from_secs(83)), "1m 23s");
        assert_eq!(format_uptime(Duration::from_secs(3_725)), "1h 2m 5s");
        assert_eq!(format_uptime(Duration::from_secs(90_061)), "1d 1h 1m");
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(60, 40, area), area);
    }
}
