//! Terminal user interface built on ratatui/crossterm.

pub mod analyzer_app;
pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use analyzer_app::{AnalyzerApp, Status};
pub use theme::current_theme;
