use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
pub enum TuiEvent {
    // Core actions
    ForceQuit,   // Ctrl+C
    Submit,      // Enter: run the selected method
    Escape,      // Back on the navigation stack
    ToggleBatch, // Ctrl+B
    Flush,       // Ctrl+F
    ClearStack,  // Ctrl+L
    AddWallet,   // Ctrl+N
    RemoveWallet, // Ctrl+W

    // TUI-local events
    FocusNext, // Tab cycles panels
    CursorUp,
    CursorDown,
    InputChar(char),
    Backspace,
    Resize,
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    let event = event::read().ok()?;
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (KeyModifiers::CONTROL, KeyCode::Char('b')) => Some(TuiEvent::ToggleBatch),
                (KeyModifiers::CONTROL, KeyCode::Char('f')) => Some(TuiEvent::Flush),
                (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::ClearStack),
                (KeyModifiers::CONTROL, KeyCode::Char('n')) => Some(TuiEvent::AddWallet),
                (KeyModifiers::CONTROL, KeyCode::Char('w')) => Some(TuiEvent::RemoveWallet),
                (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
