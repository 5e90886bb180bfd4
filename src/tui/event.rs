//! Events delivered by the outer loop to the active screen.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// How often the loop delivers [`AppEvent::Tick`] to blink the cursor.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// A single input to a screen's event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press.
    Key(KeyEvent),
    /// The recurring cursor-blink timer fired.
    Tick,
}

/// Returns `true` if `key` is Ctrl+C.
pub fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
