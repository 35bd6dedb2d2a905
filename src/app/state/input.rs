use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::*;

pub(crate) fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'C')))
}

pub(crate) fn text_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(ch) if !ch.is_control() => Some(ch),
        _ => None,
    }
}

impl AppState {
    pub(crate) async fn handle_key(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if is_quit_key(key) {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }
        match key.code {
            KeyCode::Enter => self.submit(self.input.clone(), tx),
            KeyCode::Backspace => {
                self.input.pop();
            }
            _ => {
                if let Some(ch) = text_char(key) {
                    self.input.push(ch);
                }
            }
        }
        Ok(())
    }
}
