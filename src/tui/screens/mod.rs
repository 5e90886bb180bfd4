//! TUI screen implementations.

pub mod item_add;
pub mod item_list;

pub use item_add::{ItemAddState, draw_item_add};
pub use item_list::{ItemListState, draw_item_list};
