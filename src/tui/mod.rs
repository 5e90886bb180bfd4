//! TUI: App state, event loop, screens, widgets.

pub mod app;
pub mod error;
pub mod event;
pub mod layout;
pub mod screens;
pub mod theme;
pub mod transition;
pub mod widgets;

pub use app::App;
pub use error::AppError;
pub use event::AppEvent;
pub use transition::Transition;
