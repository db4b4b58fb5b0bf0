//! Layout rendering (title, top bar, footer)

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{Focus, ViewState};

use super::utils::text_color;

pub fn render_title(frame: &mut Frame, area: Rect, state: &ViewState) {
    let title = Paragraph::new("Random Quotes Generator")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(text_color(state.dark_mode))
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(title, area);
}

pub fn render_top_bar(frame: &mut Frame, area: Rect, state: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(28), // Category
            Constraint::Length(16), // Theme toggle
        ])
        .split(area);

    let fg = text_color(state.dark_mode);
    let focused = state.focus == Focus::Search;

    let search_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(fg)
    };

    let search_text = if state.search_term.is_empty() && !focused {
        "Search by Keyword".to_string()
    } else if focused {
        format!("{}▏", state.search_term)
    } else {
        state.search_term.clone()
    };

    let search_title = if state.search_available() {
        " Search (Enter) "
    } else {
        " Search "
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(search_title)
            .padding(Padding::horizontal(1))
            .border_style(if focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(fg)
            }),
    );
    frame.render_widget(search, chunks[0]);

    let category = state
        .selected_category_name()
        .unwrap_or("Select category")
        .to_string();
    let category = Paragraph::new(category).style(Style::default().fg(fg)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Category [c] ")
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(fg)),
    );
    frame.render_widget(category, chunks[1]);

    let (label, button_color) = if state.dark_mode {
        ("Light Mode", Color::Gray)
    } else {
        ("Dark Mode", Color::Blue)
    };
    let theme = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(button_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(" [d] "));
    frame.render_widget(theme, chunks[2]);
}

pub fn render_footer(frame: &mut Frame, area: Rect, state: &ViewState) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(text_color(state.dark_mode));

    let hints = [
        ("n", "New Quote"),
        ("/", "Search"),
        ("r", "QR"),
        ("v", "Favorites"),
        ("h", "Help"),
        ("q", "Quit"),
    ];

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" [{}] ", key), key_style),
                Span::styled(label.to_string(), label_style),
            ]
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
