//! Utility functions for rendering UI components

use ratatui::{layout::Rect, style::Color};

use crate::model::{Rgb, Sentiment};

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Foreground that reads on the current background
pub fn text_color(dark_mode: bool) -> Color {
    if dark_mode { Color::White } else { Color::Black }
}

pub fn sentiment_glyph(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "🙂",
        Sentiment::Neutral => "😐",
        Sentiment::Negative => "🙁",
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}
