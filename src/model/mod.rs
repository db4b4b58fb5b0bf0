//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (quotes, favorites, categories, view state)
//! - `sentiment`: Placeholder mood classification for the current quote
//! - `favorites`: Favorites persisted to a JSON file
//! - `quote_client`: Quote API client with category cache
//! - `app_model`: Main application model with state transitions

mod types;
pub mod sentiment;
pub mod favorites;
mod quote_client;
mod app_model;

// Re-export all public types for convenient access
pub use types::{Category, Favorite, Focus, Overlay, Quote, Rgb, ViewState};

pub use sentiment::Sentiment;

pub use favorites::FavoritesStore;

pub use quote_client::{DEFAULT_BASE_URL, QuoteClient};

pub use app_model::{AppModel, RequestKind};
