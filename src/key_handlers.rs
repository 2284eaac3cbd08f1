use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::{App, Submission};

/// Handles a key event while the chat view is active. Valid questions are
/// forwarded to the worker task through `query_tx`.
pub async fn handle_chat_input(key: KeyEvent, app: &mut App, query_tx: &mpsc::Sender<String>) {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Enter => {
            if let Submission::Sent(question) = app.submit() {
                log::info!("forwarding question ({} chars)", question.chars().count());
                if query_tx.send(question).await.is_err() {
                    // Worker is gone; run the completion hook so the
                    // indicator does not spin forever.
                    log::warn!("worker channel closed, dropping question");
                    app.finish_request(None);
                }
            }
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.should_quit = true,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.input.push(c);
            }
        }
        _ => {}
    }
}
