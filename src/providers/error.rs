//! Provider failure taxonomy.
//!
//! Provider errors are always recovered locally by falling back to the next
//! strategy tier or returning an empty collection; they are surfaced here as
//! a typed enum so call sites can log what actually failed.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("provider API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse provider response: {0}")]
    Parse(String),
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;
