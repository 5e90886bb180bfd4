mod item;

pub use item::{Item, SubmissionRecord};
