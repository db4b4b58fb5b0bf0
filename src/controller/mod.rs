//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and drives the quote API.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `actions`: Intent handlers (fetching, favorites, sharing) and startup

mod input;
mod actions;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, FavoritesStore, QuoteClient};
use crate::platform::Platform;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) client: QuoteClient,
    pub(crate) favorites: FavoritesStore,
    pub(crate) platform: Arc<dyn Platform>,
}

impl AppController {
    pub fn new(
        model: Arc<Mutex<AppModel>>,
        client: QuoteClient,
        favorites: FavoritesStore,
        platform: Arc<dyn Platform>,
    ) -> Self {
        Self {
            model,
            client,
            favorites,
            platform,
        }
    }

    /// Run an action in the background so the draw loop keeps going.
    pub(crate) fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(action(self.clone()));
    }
}
