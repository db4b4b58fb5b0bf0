//! Quote card and search results

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::ViewState;

use super::utils::{sentiment_glyph, text_color, truncate_string};

pub fn render_quote_card(frame: &mut Frame, area: Rect, state: &ViewState) {
    let fg = text_color(state.dark_mode);

    let mut lines: Vec<Line> = Vec::new();
    match &state.quote {
        Some(quote) => {
            lines.push(Line::from(Span::styled(
                quote.text.clone(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::default());

            let mut author = vec![Span::styled(
                format!("- {}", quote.author),
                Style::default().fg(fg).add_modifier(Modifier::ITALIC),
            )];
            if let Some(sentiment) = state.sentiment {
                author.push(Span::raw("  "));
                author.push(Span::raw(sentiment_glyph(sentiment)));
            }
            lines.push(Line::from(author));
            lines.push(Line::default());
            lines.push(action_row(state));
        }
        None if !state.is_loading => {
            lines.push(Line::from(Span::styled(
                "No quote yet. Press [n] to fetch one.",
                Style::default().fg(fg),
            )));
        }
        None => {}
    }

    if state.is_loading {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )));
    }

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(fg))
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(card, area);
}

fn action_row(state: &ViewState) -> Line<'static> {
    let button = |key: &str, label: String, bg: Color| {
        Span::styled(
            format!(" [{}] {} ", key, label),
            Style::default()
                .fg(Color::White)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )
    };

    let (favorite_label, favorite_bg) = if state.is_favorite() {
        ("♥ Remove from Favorites", Color::Red)
    } else {
        ("♥ Add to Favorites", Color::DarkGray)
    };

    Line::from(vec![
        button("t", "Tweet Quote".into(), Color::Blue),
        Span::raw("  "),
        button("f", favorite_label.into(), favorite_bg),
        Span::raw("  "),
        button("y", "Copy Quote".into(), Color::DarkGray),
    ])
}

pub fn render_search_results(frame: &mut Frame, area: Rect, state: &ViewState) {
    let fg = text_color(state.dark_mode);
    let width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = state
        .search_results
        .iter()
        .map(|result| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate_string(&result.text, width),
                    Style::default().fg(fg),
                )),
                Line::from(Span::styled(
                    format!("- {}", result.author),
                    Style::default().fg(fg).add_modifier(Modifier::ITALIC),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search Results ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(fg)),
    );
    frame.render_widget(list, area);
}

/// Split the main area between the card and, when present, the search results.
pub fn main_areas(area: Rect, state: &ViewState) -> (Rect, Option<Rect>) {
    if state.search_results.is_empty() {
        return (area, None);
    }

    let results_height = (state.search_results.len() as u16) * 2 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(results_height)])
        .split(area);
    (chunks[0], Some(chunks[1]))
}
