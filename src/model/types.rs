//! Core type definitions for the application

use serde::{Deserialize, Serialize};

use super::sentiment::Sentiment;

/// A quotation as displayed to the user. Text and author always travel together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// The `"{quote} - {author}"` form used for sharing, copying and the QR payload.
    pub fn share_text(&self) -> String {
        format!("{} - {}", self.text, self.author)
    }
}

/// A saved quote. Serialized as `{"quote": ..., "author": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub quote: String,
    pub author: String,
}

impl Favorite {
    pub fn matches(&self, quote: &Quote) -> bool {
        self.quote == quote.text && self.author == quote.author
    }
}

impl From<&Quote> for Favorite {
    fn from(quote: &Quote) -> Self {
        Self {
            quote: quote.text.clone(),
            author: quote.author.clone(),
        }
    }
}

/// A quote tag. `slug` is the filter value sent to the provider.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
}

/// Plain RGB triple so the model stays independent of the rendering crate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#1a202c`
    pub const DARK: Rgb = Rgb(0x1a, 0x20, 0x2c);
    /// `#B45127`
    pub const ACCENT: Rgb = Rgb(0xb4, 0x51, 0x27);

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::DARK } else { Self::ACCENT }
    }
}

/// Where typed characters go
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Normal,
    Search,
}

/// Modal popup currently shown on top of the main view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    CategoryPicker,
    QrCode,
    Favorites,
    Help,
}

/// Everything the view needs to draw a frame.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub quote: Option<Quote>,
    pub is_loading: bool,
    pub dark_mode: bool,
    pub background: Rgb,
    pub search_term: String,
    /// Selected category slug, empty when no category is selected
    pub category: String,
    pub categories: Vec<Category>,
    pub search_results: Vec<Quote>,
    pub sentiment: Option<Sentiment>,
    pub favorites: Vec<Favorite>,
    pub focus: Focus,
    pub overlay: Overlay,
    /// Cursor in the category picker; 0 is the "Select category" entry
    pub category_cursor: usize,
}

impl ViewState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            quote: None,
            is_loading: false,
            dark_mode,
            background: Rgb::for_mode(dark_mode),
            search_term: String::new(),
            category: String::new(),
            categories: vec![],
            search_results: vec![],
            sentiment: None,
            favorites: vec![],
            focus: Focus::Normal,
            overlay: Overlay::None,
            category_cursor: 0,
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.quote
            .as_ref()
            .is_some_and(|quote| self.favorites.iter().any(|f| f.matches(quote)))
    }

    /// Whether the search affordance should be offered
    pub fn search_available(&self) -> bool {
        !self.search_term.trim().is_empty() || self.category.is_empty()
    }

    pub fn selected_category_name(&self) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.slug == self.category)
            .map(|c| c.name.as_str())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(false)
    }
}
