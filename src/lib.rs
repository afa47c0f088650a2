//! Atlas library exports: the country browser's domain, data, stores and TUI.

pub mod core;
pub mod data;
pub mod domain;
pub mod tui;

#[cfg(test)]
pub mod test_support;
