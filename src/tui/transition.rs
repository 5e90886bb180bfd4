//! Transitions returned by screen event handlers.

/// What the [`App`](super::App) should do after a screen handles an event.
///
/// Produced fresh for every event and consumed immediately by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep the current screen active.
    Stay,
    /// Show the item list.
    GoToListScreen {
        /// Re-read the items from disk before showing them.
        rebuild: bool,
    },
    /// Open a fresh add-item form.
    GoToAddScreen,
    /// Quit the application.
    Quit,
}
