// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShazamError>;

#[derive(Debug, Error)]
pub enum ShazamError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("rate limit exceeded after {attempts} attempts")]
    RateLimited { attempts: u32 },

    #[error("invalid response from Shazam API: {0}")]
    InvalidResponse(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
