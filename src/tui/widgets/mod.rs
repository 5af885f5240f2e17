//! Custom widgets for the analyzer TUI

pub mod input;
pub mod results;

pub use input::{InputWidget, TextInput};
pub use results::ResultsView;
