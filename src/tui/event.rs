use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C
    StartStop, // Space or Enter
    Shuffle,
    ToggleDirection,
    SpeedUp,
    SlowDown,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
///
/// Terminal read errors are logged and treated as "no event".
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event.modifiers, key_event.code)
        }
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Event read failed: {}", e);
            None
        }
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Char(' ')) | (_, KeyCode::Enter) => Some(TuiEvent::StartStop),
        (_, KeyCode::Char('s')) => Some(TuiEvent::Shuffle),
        (_, KeyCode::Char('d')) => Some(TuiEvent::ToggleDirection),
        (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) | (_, KeyCode::Right) => {
            Some(TuiEvent::SpeedUp)
        }
        (_, KeyCode::Char('-')) | (_, KeyCode::Left) => Some(TuiEvent::SlowDown),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}
