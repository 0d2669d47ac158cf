//! Sample API
//!
//! A small JSON service exposing a welcome message, a fixed list of sample
//! items and a greeting built from a path segment. Every route allows
//! cross-origin requests from any origin.

pub mod api;
pub mod config;
pub mod error;

pub use error::{AppError, Result};

use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<config::Settings>,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}
