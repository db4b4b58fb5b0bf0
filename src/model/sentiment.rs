//! Placeholder mood classification.
//!
//! The result is drawn at random and does not depend on the quote text. It only
//! picks which glyph sits next to the current quote.

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Map a draw from `[0, 1)` onto the three buckets.
    pub fn from_draw(value: f64) -> Self {
        if value < 0.33 {
            Sentiment::Negative
        } else if value < 0.66 {
            Sentiment::Neutral
        } else {
            Sentiment::Positive
        }
    }
}

/// Classify using the thread-local generator.
pub fn classify(text: &str) -> Sentiment {
    classify_with(text, &mut rand::rng())
}

pub fn classify_with<R: Rng + ?Sized>(_text: &str, rng: &mut R) -> Sentiment {
    Sentiment::from_draw(rng.random::<f64>())
}
