//! Platform side effects: opening links and writing the clipboard

use anyhow::{Context, Result};

/// Operating-system integration used by the share and copy actions.
pub trait Platform: Send + Sync {
    /// Open `url` in the user's browser.
    fn open_url(&self, url: &str) -> Result<()>;
    /// Replace the clipboard contents with `text`.
    fn copy_text(&self, text: &str) -> Result<()>;
}

/// Default browser via `open`, OS clipboard via `arboard`
pub struct SystemPlatform;

impl Platform for SystemPlatform {
    fn open_url(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("failed to open {url}"))
    }

    fn copy_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
        clipboard
            .set_text(text.to_owned())
            .context("failed to write clipboard")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Records every side effect instead of performing it
    #[derive(Default)]
    pub struct RecordingPlatform {
        pub opened: Mutex<Vec<String>>,
        pub copied: Mutex<Vec<String>>,
    }

    impl Platform for RecordingPlatform {
        fn open_url(&self, url: &str) -> Result<()> {
            self.opened.lock().unwrap().push(url.to_owned());
            Ok(())
        }

        fn copy_text(&self, text: &str) -> Result<()> {
            self.copied.lock().unwrap().push(text.to_owned());
            Ok(())
        }
    }
}
