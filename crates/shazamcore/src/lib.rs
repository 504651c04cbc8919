// SPDX-License-Identifier: GPL-3.0-or-later

//! Shazam Core API client for fetching music charts and metadata.
//!
//! This crate provides a client for the Shazam Core HTTP API (hosted on
//! RapidAPI), covering chart listings, combined song/artist search, and
//! track and artist detail lookups, with built-in retry handling for
//! rate-limited (HTTP 429) responses honoring the server's `Retry-After`
//! hint.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod retry;

pub use client::ShazamClient;
pub use config::ShazamConfig;
pub use error::{Result, ShazamError};
pub use models::{ArtistDetails, ArtistSummary, Genre, SearchResponse, Track};
pub use retry::RetryPolicy;
