//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use netscope_app::Message;
use netscope_core::prelude::*;
use std::time::Duration;

/// Convert a crossterm key event into a dashboard message
pub fn key_event_to_message(key: crossterm::event::KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('r') => Some(Message::Refresh),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Press {
                    Ok(key_event_to_message(key))
                } else {
                    Ok(None)
                }
            }
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout so periodic refresh still fires
        Ok(Some(Message::Tick))
    }
}
