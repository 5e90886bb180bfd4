#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Terminal cheatsheet for desktop keybinds.

pub mod model;
pub mod storage;
pub mod tui;
