//! Trivia lookup against the numbers fact service.

pub mod client;

use std::future::Future;
use thiserror::Error;

pub use client::NumbersApiClient;

/// Every way a fact lookup can fail. Callers treat all of them alike.
#[derive(Debug, Error)]
pub enum FactError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("fact service returned {0}")]
    Status(reqwest::StatusCode),
    #[error("response body is not valid UTF-8")]
    Decode(#[from] std::string::FromUtf8Error),
}

/// Source of trivia text for a number.
pub trait FactSource: Send + Sync + 'static {
    fn fetch(&self, number: i64) -> impl Future<Output = Result<String, FactError>> + Send;
}
