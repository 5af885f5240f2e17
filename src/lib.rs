//! Text Analyzer (txa) library
//!
//! Client side of a text analysis service: the request lifecycle, result
//! formatting for clipboard and screen, paginated report export and the
//! copy-feedback timer, plus the terminal UI built on top of them.

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod model;
pub mod report;
pub mod serializer;
pub mod tui;

pub use client::{AnalysisClient, HttpAnalysisClient};
pub use config::Config;
pub use controller::{RequestLifecycleController, RequestState};
pub use error::AnalysisError;
pub use model::AnalysisResult;
pub use serializer::Category;
