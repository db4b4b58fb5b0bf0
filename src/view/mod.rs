//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared helpers (colours, glyphs, popup geometry)
//! - `layout`: Title, top bar and footer
//! - `quote`: Quote card and search results
//! - `overlays`: Modal overlays (category picker, QR code, favorites, help)

mod utils;
mod layout;
mod quote;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::model::{Overlay, ViewState};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, state: &ViewState) {
        let background = Block::default().style(Style::default().bg(utils::to_color(state.background)));
        frame.render_widget(background, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Search + category + theme
                Constraint::Min(0),    // Quote card and search results
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_title(frame, chunks[0], state);
        layout::render_top_bar(frame, chunks[1], state);

        let (card_area, results_area) = quote::main_areas(chunks[2], state);
        quote::render_quote_card(frame, card_area, state);
        if let Some(area) = results_area {
            quote::render_search_results(frame, area, state);
        }

        layout::render_footer(frame, chunks[3], state);

        match state.overlay {
            Overlay::None => {}
            Overlay::CategoryPicker => overlays::render_category_picker(frame, state),
            Overlay::QrCode => overlays::render_qr_code(frame, state),
            Overlay::Favorites => overlays::render_favorites(frame, state),
            Overlay::Help => overlays::render_help_popup(frame),
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::model::{Favorite, Quote, Sentiment};

    fn draw(state: &ViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| AppView::render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn with_quote() -> ViewState {
        let mut state = ViewState::default();
        state.quote = Some(Quote::new("Be yourself.", "Oscar Wilde"));
        state.sentiment = Some(Sentiment::Positive);
        state
    }

    #[test]
    fn renders_quote_author_and_actions() {
        let screen = draw(&with_quote());
        assert!(screen.contains("Be yourself."));
        assert!(screen.contains("- Oscar Wilde"));
        assert!(screen.contains("Add to Favorites"));
        assert!(screen.contains("Dark Mode"));
        assert!(!screen.contains("Loading..."));
    }

    #[test]
    fn favorite_label_reflects_membership() {
        let mut state = with_quote();
        state.favorites = vec![Favorite {
            quote: "Be yourself.".into(),
            author: "Oscar Wilde".into(),
        }];
        assert!(draw(&state).contains("Remove from Favorites"));
    }

    #[test]
    fn loading_and_dark_mode_labels() {
        let mut state = ViewState::new(true);
        state.is_loading = true;
        let screen = draw(&state);
        assert!(screen.contains("Loading..."));
        assert!(screen.contains("Light Mode"));
    }

    #[test]
    fn search_results_panel_only_when_non_empty() {
        let mut state = with_quote();
        assert!(!draw(&state).contains("Search Results"));

        state.search_results = vec![Quote::new("Experience is simply the name...", "Oscar Wilde")];
        let screen = draw(&state);
        assert!(screen.contains("Search Results"));
        assert!(screen.contains("Experience is simply the name"));
    }

    #[test]
    fn overlays_render() {
        let mut state = with_quote();
        state.overlay = Overlay::Favorites;
        assert!(draw(&state).contains("No favorites yet"));

        state.overlay = Overlay::CategoryPicker;
        assert!(draw(&state).contains("Category (↑↓ Enter Esc)"));

        state.overlay = Overlay::Help;
        assert!(draw(&state).contains("Toggle dark mode"));

        state.overlay = Overlay::QrCode;
        assert!(draw(&state).contains("QR (r/Esc)"));
    }
}
