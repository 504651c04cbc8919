// SPDX-License-Identifier: GPL-3.0-or-later

use crate::config::ShazamConfig;
use crate::endpoints::{self, RequestSpec};
use crate::error::{Result, ShazamError};
use crate::models::{ArtistDetails, Genre, SearchResponse, Track};
use crate::retry::{send_with_retry, RetryPolicy};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

pub(crate) const SHAZAM_API_BASE: &str = "https://shazam-core.p.rapidapi.com";
const RAPIDAPI_HOST: &str = "shazam-core.p.rapidapi.com";
const USER_AGENT: &str = concat!("shazamcore/", env!("CARGO_PKG_VERSION"));

/// Shazam Core API client with rate-limit aware retries.
#[derive(Clone)]
pub struct ShazamClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    retry_policy: RetryPolicy,
}

impl ShazamClient {
    /// Create a client authenticated with the given RapidAPI key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> ShazamClientBuilder {
        ShazamClientBuilder::default()
    }

    /// Create a client from a loaded [`ShazamConfig`].
    pub fn from_config(config: &ShazamConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .base_url(config.base_url.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .retry_policy(RetryPolicy::new(
                config.max_retries,
                Duration::from_millis(config.base_delay_ms),
            ));

        if let Some(key) = &config.api_key {
            builder = builder.api_key(key.clone());
        }

        builder.build()
    }

    /// Fetch the worldwide top charts.
    ///
    /// # Example
    /// ```no_run
    /// # use shazamcore::ShazamClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ShazamClient::new("my-rapidapi-key")?;
    /// for track in client.top_charts().await? {
    ///     println!("{} - {}", track.subtitle, track.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn top_charts(&self) -> Result<Vec<Track>> {
        self.get(endpoints::top_charts()).await
    }

    /// Fetch the worldwide charts for a single genre.
    pub async fn charts_by_genre(&self, genre: Genre) -> Result<Vec<Track>> {
        self.get(endpoints::charts_by_genre(genre)).await
    }

    /// Fetch the charts for a country (ISO 3166-1 alpha-2 code).
    pub async fn charts_by_country(&self, country_code: &str) -> Result<Vec<Track>> {
        self.get(endpoints::charts_by_country(country_code)).await
    }

    /// Search songs and artists by free-text term.
    ///
    /// # Example
    /// ```no_run
    /// # use shazamcore::ShazamClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ShazamClient::new("my-rapidapi-key")?;
    /// let response = client.search("Nina Simone").await?;
    /// let songs = response.tracks.map(|t| t.hits.len()).unwrap_or(0);
    /// println!("{} song hits", songs);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, term: &str) -> Result<SearchResponse> {
        self.get(endpoints::search(term)).await
    }

    /// Look up artist details by Apple Music artist ID (`adamid`).
    pub async fn artist_details(&self, artist_id: &str) -> Result<ArtistDetails> {
        self.get(endpoints::artist_details(artist_id)).await
    }

    /// Look up full track details, including lyrics sections, by track key.
    pub async fn song_details(&self, track_id: &str) -> Result<Track> {
        self.get(endpoints::song_details(track_id)).await
    }

    /// Fetch tracks related to the given track key.
    pub async fn related_songs(&self, track_id: &str) -> Result<Vec<Track>> {
        self.get(endpoints::related_songs(track_id)).await
    }

    /// Internal method to perform GET requests with retry on 429.
    async fn get<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let url = spec.url(&self.base_url)?;

        trace!(target: "shazamcore", "GET {}", url);

        let response = send_with_retry(&self.retry_policy, || {
            self.request(self.client.get(url.clone())).send()
        })
        .await?;

        let status = response.status();
        debug!(target: "shazamcore", "response status: {}", status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ShazamError::RateLimited {
                attempts: self.retry_policy.max_retries.max(1),
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ShazamError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ShazamError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        trace!(target: "shazamcore", "response body: {}", body);

        serde_json::from_str(&body)
            .map_err(|e| ShazamError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    fn request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => request
                .header("x-rapidapi-key", key.trim())
                .header("x-rapidapi-host", RAPIDAPI_HOST),
            _ => request,
        }
    }
}

/// Builder for configuring a Shazam Core client.
#[derive(Debug)]
pub struct ShazamClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    retry_policy: RetryPolicy,
}

impl Default for ShazamClientBuilder {
    fn default() -> Self {
        Self {
            base_url: SHAZAM_API_BASE.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl ShazamClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the RapidAPI key sent with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry policy for rate-limited responses.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Build the Shazam Core client.
    pub fn build(self) -> Result<ShazamClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(ShazamClient {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
            retry_policy: self.retry_policy,
        })
    }
}
