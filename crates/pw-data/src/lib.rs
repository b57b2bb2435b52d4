//! Backend API access for the race-replay dashboard

pub mod catalog;
pub mod client;
pub mod config;

use thiserror::Error;

// Re-exports
pub use client::{ApiClient, CommentaryRequest, LoadRaceRequest};
pub use config::ApiConfig;

/// Errors that can occur talking to the backend.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {0}")]
    Status(reqwest::StatusCode),
}
