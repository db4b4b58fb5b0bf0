//! Main application model with state transitions
//!
//! All mutation of [`ViewState`] goes through the methods here. Requests are
//! tracked with tickets: only the most recently issued ticket of a kind may
//! apply its response, and the loading flag stays up while any request is
//! still outstanding.

use super::sentiment::Sentiment;
use super::types::{Category, Favorite, Focus, Overlay, Quote, Rgb, ViewState};

/// What a request will write when it settles
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// Random or category-filtered quote
    Quote,
    Search,
    Categories,
}

/// Handle for an outstanding request
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a ticket must be settled or the loading flag never clears"]
pub struct Ticket {
    kind: RequestKind,
    seq: u64,
}

pub struct AppModel {
    state: ViewState,
    next_seq: u64,
    latest_quote: u64,
    latest_search: u64,
    in_flight: usize,
    should_quit: bool,
}

impl AppModel {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            state: ViewState::new(dark_mode),
            next_seq: 0,
            latest_quote: 0,
            latest_search: 0,
            in_flight: 0,
            should_quit: false,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    // ========================================================================
    // Request lifecycle
    // ========================================================================

    pub fn begin_request(&mut self, kind: RequestKind) -> Ticket {
        self.next_seq += 1;
        let seq = self.next_seq;
        match kind {
            RequestKind::Quote => self.latest_quote = seq,
            RequestKind::Search => self.latest_search = seq,
            RequestKind::Categories => {}
        }
        self.in_flight += 1;
        self.state.is_loading = true;
        Ticket { kind, seq }
    }

    /// Release the ticket. Returns whether its response is still the latest.
    fn settle(&mut self, ticket: Ticket) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.state.is_loading = self.in_flight > 0;

        let latest = match ticket.kind {
            RequestKind::Quote => self.latest_quote,
            RequestKind::Search => self.latest_search,
            RequestKind::Categories => ticket.seq,
        };
        if ticket.seq != latest {
            tracing::debug!(kind = ?ticket.kind, seq = ticket.seq, latest, "Discarding stale response");
            return false;
        }
        true
    }

    /// Settle a request that failed. Prior data stays as it was.
    pub fn fail_request(&mut self, ticket: Ticket) {
        self.settle(ticket);
    }

    /// Adopt a fetched quote, replacing text and author together.
    pub fn finish_quote(&mut self, ticket: Ticket, quote: Quote, sentiment: Sentiment) -> bool {
        debug_assert_eq!(ticket.kind, RequestKind::Quote);
        if !self.settle(ticket) {
            return false;
        }
        self.state.quote = Some(quote);
        self.state.sentiment = Some(sentiment);
        self.state.background = Rgb::for_mode(self.state.dark_mode);
        true
    }

    pub fn finish_search(&mut self, ticket: Ticket, results: Vec<Quote>) -> bool {
        debug_assert_eq!(ticket.kind, RequestKind::Search);
        if !self.settle(ticket) {
            return false;
        }
        self.state.search_results = results;
        true
    }

    pub fn finish_categories(&mut self, ticket: Ticket, categories: Vec<Category>) {
        self.settle(ticket);
        self.set_categories(categories);
    }

    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.state.categories = categories;
        self.state.category_cursor = self
            .state
            .category_cursor
            .min(self.state.categories.len());
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    // ========================================================================
    // Favorites & theme
    // ========================================================================

    pub fn current_quote(&self) -> Option<&Quote> {
        self.state.quote.as_ref()
    }

    pub fn favorites(&self) -> &[Favorite] {
        &self.state.favorites
    }

    pub fn set_favorites(&mut self, favorites: Vec<Favorite>) {
        self.state.favorites = favorites;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.state.dark_mode = !self.state.dark_mode;
        self.state.background = Rgb::for_mode(self.state.dark_mode);
    }

    // ========================================================================
    // Search input & category selection
    // ========================================================================

    pub fn set_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
    }

    pub fn append_to_search(&mut self, c: char) {
        self.state.search_term.push(c);
    }

    pub fn backspace_search(&mut self) {
        self.state.search_term.pop();
    }

    pub fn clear_search(&mut self) {
        self.state.search_term.clear();
    }

    /// The trimmed search term, or `None` if it is blank
    pub fn search_term(&self) -> Option<String> {
        let term = self.state.search_term.trim();
        (!term.is_empty()).then(|| term.to_string())
    }

    pub fn set_category(&mut self, slug: String) {
        self.state.category = slug;
    }

    pub fn category_cursor_up(&mut self) {
        self.state.category_cursor = self.state.category_cursor.saturating_sub(1);
    }

    pub fn category_cursor_down(&mut self) {
        if self.state.category_cursor < self.state.categories.len() {
            self.state.category_cursor += 1;
        }
    }

    /// Slug under the picker cursor; the first entry is "no category".
    pub fn category_under_cursor(&self) -> String {
        match self.state.category_cursor {
            0 => String::new(),
            n => self
                .state
                .categories
                .get(n - 1)
                .map(|c| c.slug.clone())
                .unwrap_or_default(),
        }
    }

    // ========================================================================
    // Overlays & lifecycle
    // ========================================================================

    pub fn overlay(&self) -> Overlay {
        self.state.overlay
    }

    pub fn show_overlay(&mut self, overlay: Overlay) {
        if overlay == Overlay::CategoryPicker {
            self.state.category_cursor = if self.state.category.is_empty() {
                0
            } else {
                self.state
                    .categories
                    .iter()
                    .position(|c| c.slug == self.state.category)
                    .map_or(0, |i| i + 1)
            };
        }
        self.state.overlay = overlay;
    }

    pub fn close_overlay(&mut self) {
        self.state.overlay = Overlay::None;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(false)
    }
}
