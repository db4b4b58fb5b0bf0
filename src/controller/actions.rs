//! Intent handlers: fetching quotes, searching, favorites and sharing

use crate::model::favorites;
use crate::model::sentiment;
use crate::model::{Overlay, Quote, RequestKind};

use super::AppController;

pub const SEARCH_LIMIT: usize = 5;

const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";

/// Share link carrying `"{quote} - {author}"` as the tweet text
pub fn tweet_url(quote: &Quote) -> String {
    format!(
        "{}?text={}",
        TWEET_INTENT_URL,
        urlencoding::encode(&quote.share_text())
    )
}

impl AppController {
    /// Load favorites, then fetch a quote and the category list concurrently.
    pub async fn startup(&self) {
        let stored = self.favorites.load();
        self.model.lock().await.set_favorites(stored);

        tokio::join!(self.new_quote(), self.load_categories());
    }

    pub async fn new_quote(&self) {
        let ticket = self.model.lock().await.begin_request(RequestKind::Quote);
        tracing::debug!("Fetching random quote");

        let result = self.client.fetch_random_quote().await;

        let mut model = self.model.lock().await;
        match result {
            Ok(quote) => {
                let mood = sentiment::classify(&quote.text);
                if model.finish_quote(ticket, quote, mood) {
                    tracing::info!(?mood, "New quote displayed");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching quote");
                model.fail_request(ticket);
            }
        }
    }

    pub async fn change_category(&self, slug: String) {
        let ticket = {
            let mut model = self.model.lock().await;
            model.set_category(slug.clone());
            model.begin_request(RequestKind::Quote)
        };
        tracing::debug!(slug, "Fetching quote by category");

        let result = self.client.fetch_random_quote_by_category(&slug).await;

        let mut model = self.model.lock().await;
        match result {
            Ok(quote) => {
                let mood = sentiment::classify(&quote.text);
                if model.finish_quote(ticket, quote, mood) {
                    tracing::info!(slug, ?mood, "Category quote displayed");
                }
            }
            Err(e) => {
                tracing::error!(slug, error = %e, "Error fetching quote by category");
                model.fail_request(ticket);
            }
        }
    }

    /// Populate the category list, hitting the network only on first use.
    pub async fn load_categories(&self) {
        if let Some(cached) = self.client.cached_categories().await {
            self.model.lock().await.set_categories(cached);
            return;
        }

        let ticket = self.model.lock().await.begin_request(RequestKind::Categories);
        let result = self.client.fetch_categories().await;

        let mut model = self.model.lock().await;
        match result {
            Ok(categories) => {
                tracing::info!(count = categories.len(), "Categories loaded");
                model.finish_categories(ticket, categories);
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching categories");
                model.fail_request(ticket);
            }
        }
    }

    /// Search by author. A blank term does nothing.
    pub async fn submit_search(&self) {
        let (term, ticket) = {
            let mut model = self.model.lock().await;
            let Some(term) = model.search_term() else {
                tracing::debug!("Ignoring blank search");
                return;
            };
            (term, model.begin_request(RequestKind::Search))
        };
        tracing::debug!(term, "Searching quotes by author");

        let result = self.client.search_quotes_by_author(&term, SEARCH_LIMIT).await;

        let mut model = self.model.lock().await;
        match result {
            Ok(results) => {
                tracing::info!(term, count = results.len(), "Search completed");
                model.finish_search(ticket, results);
            }
            Err(e) => {
                tracing::error!(term, error = %e, "Error searching quotes");
                model.fail_request(ticket);
            }
        }
    }

    pub async fn toggle_favorite(&self) {
        let mut model = self.model.lock().await;
        let Some(current) = model.current_quote().cloned() else {
            tracing::debug!("No quote to favorite");
            return;
        };

        let updated = favorites::toggle(&current, model.favorites());
        let added = updated.len() > model.favorites().len();
        model.set_favorites(updated);

        if let Err(e) = self.favorites.save(model.favorites()) {
            tracing::error!(error = %e, "Failed to persist favorites");
        }
        tracing::info!(added, author = %current.author, "Favorite toggled");
    }

    pub async fn toggle_dark_mode(&self) {
        self.model.lock().await.toggle_dark_mode();
    }

    pub async fn tweet(&self) {
        let Some(quote) = self.model.lock().await.current_quote().cloned() else {
            return;
        };
        let url = tweet_url(&quote);
        if let Err(e) = self.platform.open_url(&url) {
            tracing::warn!(error = %e, "Could not open share link");
        }
    }

    pub async fn copy_quote(&self) {
        let Some(quote) = self.model.lock().await.current_quote().cloned() else {
            return;
        };
        if let Err(e) = self.platform.copy_text(&quote.share_text()) {
            tracing::warn!(error = %e, "Could not copy quote");
        }
    }

    pub async fn toggle_qr_code(&self) {
        let mut model = self.model.lock().await;
        if model.overlay() == Overlay::QrCode {
            model.close_overlay();
        } else if model.current_quote().is_some() {
            model.show_overlay(Overlay::QrCode);
        }
    }
}
