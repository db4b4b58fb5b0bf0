//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Focus, Overlay};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let mut model = self.model.lock().await;

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            model.set_should_quit(true);
            return Ok(());
        }

        // Category picker
        if model.overlay() == Overlay::CategoryPicker {
            match key.code {
                KeyCode::Up => model.category_cursor_up(),
                KeyCode::Down => model.category_cursor_down(),
                KeyCode::Enter => {
                    let slug = model.category_under_cursor();
                    model.close_overlay();
                    drop(model);
                    self.spawn(move |c| async move { c.change_category(slug).await });
                }
                KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('C') => model.close_overlay(),
                _ => {}
            }
            return Ok(());
        }

        // Any other popup closes on Esc or its own key
        let overlay = model.overlay();
        if overlay != Overlay::None {
            let closes = match overlay {
                Overlay::QrCode => matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')),
                Overlay::Favorites => matches!(key.code, KeyCode::Char('v') | KeyCode::Char('V')),
                Overlay::Help => matches!(key.code, KeyCode::Char('h') | KeyCode::Char('H')),
                Overlay::CategoryPicker | Overlay::None => false,
            };
            if closes || matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.close_overlay();
            }
            return Ok(());
        }

        // Search input
        if model.view_state().focus == Focus::Search {
            match key.code {
                KeyCode::Enter => {
                    drop(model);
                    self.spawn(|c| async move { c.submit_search().await });
                }
                KeyCode::Esc => {
                    model.clear_search();
                    model.set_focus(Focus::Normal);
                }
                KeyCode::Tab | KeyCode::BackTab => model.set_focus(Focus::Normal),
                KeyCode::Backspace => model.backspace_search(),
                KeyCode::Char(c) => model.append_to_search(c),
                _ => {}
            }
            return Ok(());
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true);
            }
            KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Tab => {
                model.set_focus(Focus::Search);
            }
            KeyCode::Enter => {
                drop(model);
                self.spawn(|c| async move { c.submit_search().await });
            }
            // New quote
            KeyCode::Char('n') | KeyCode::Char('N') => {
                drop(model);
                self.spawn(|c| async move { c.new_quote().await });
            }
            // Category picker, loading the list first if startup could not
            KeyCode::Char('c') | KeyCode::Char('C') => {
                let needs_categories = model.view_state().categories.is_empty();
                model.show_overlay(Overlay::CategoryPicker);
                drop(model);
                if needs_categories {
                    self.spawn(|c| async move { c.load_categories().await });
                }
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                drop(model);
                self.toggle_favorite().await;
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                drop(model);
                self.toggle_dark_mode().await;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                drop(model);
                self.tweet().await;
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                drop(model);
                self.copy_quote().await;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                drop(model);
                self.toggle_qr_code().await;
            }
            KeyCode::Char('v') | KeyCode::Char('V') => {
                model.show_overlay(Overlay::Favorites);
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_overlay(Overlay::Help);
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::KeyEventState;
    use tokio::sync::Mutex;

    use super::*;
    use crate::model::{AppModel, Category, FavoritesStore, QuoteClient};
    use crate::platform::testing::RecordingPlatform;

    fn controller() -> AppController {
        let client = QuoteClient::new("http://127.0.0.1:9", Duration::from_millis(100)).unwrap();
        AppController::new(
            Arc::new(Mutex::new(AppModel::default())),
            client,
            FavoritesStore::new(std::env::temp_dir().join("quoterm-input-test.json")),
            Arc::new(RecordingPlatform::default()),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[tokio::test]
    async fn typing_goes_to_search_only_when_focused() {
        let c = controller();
        c.handle_key_event(press(KeyCode::Char('d'))).await.unwrap();
        assert!(c.model.lock().await.view_state().dark_mode);

        c.handle_key_event(press(KeyCode::Char('/'))).await.unwrap();
        for ch in "dW".chars() {
            c.handle_key_event(press(KeyCode::Char(ch))).await.unwrap();
        }
        c.handle_key_event(press(KeyCode::Backspace)).await.unwrap();

        let model = c.model.lock().await;
        assert_eq!(model.view_state().search_term, "d");
        assert!(model.view_state().dark_mode);
        assert_eq!(model.view_state().focus, Focus::Search);
    }

    #[tokio::test]
    async fn escape_clears_search_and_leaves_focus() {
        let c = controller();
        c.handle_key_event(press(KeyCode::Char('s'))).await.unwrap();
        c.handle_key_event(press(KeyCode::Char('x'))).await.unwrap();
        c.handle_key_event(press(KeyCode::Esc)).await.unwrap();

        let model = c.model.lock().await;
        assert!(model.view_state().search_term.is_empty());
        assert_eq!(model.view_state().focus, Focus::Normal);
    }

    #[tokio::test]
    async fn picker_navigation_does_not_leak_to_global_keys() {
        let c = controller();
        c.model.lock().await.set_categories(vec![Category {
            slug: "wisdom".into(),
            name: "Wisdom".into(),
        }]);

        c.handle_key_event(press(KeyCode::Char('c'))).await.unwrap();
        c.handle_key_event(press(KeyCode::Down)).await.unwrap();
        c.handle_key_event(press(KeyCode::Char('d'))).await.unwrap();

        let model = c.model.lock().await;
        assert_eq!(model.overlay(), Overlay::CategoryPicker);
        assert_eq!(model.category_under_cursor(), "wisdom");
        assert!(!model.view_state().dark_mode);
    }

    #[tokio::test]
    async fn help_opens_and_closes() {
        let c = controller();
        c.handle_key_event(press(KeyCode::Char('h'))).await.unwrap();
        assert_eq!(c.model.lock().await.overlay(), Overlay::Help);
        c.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert_eq!(c.model.lock().await.overlay(), Overlay::None);
    }

    #[tokio::test]
    async fn quit_keys() {
        let c = controller();
        c.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();
        assert!(c.model.lock().await.should_quit());

        let c = controller();
        c.handle_key_event(press(KeyCode::Char('/'))).await.unwrap();
        c.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();
        assert!(!c.model.lock().await.should_quit());
        c.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(c.model.lock().await.should_quit());
    }
}
