// SPDX-License-Identifier: GPL-3.0-or-later

//! Request descriptors for the Shazam Core API operations.
//!
//! Each operation maps typed parameters to a [`RequestSpec`]: the endpoint
//! path plus its query parameters, independent of any base URL or transport.
//! Query values are percent-encoded when the URL is built.

use crate::models::Genre;
use url::Url;

/// Path and query parameters for one API operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Endpoint path relative to the API base URL, without a leading slash.
    pub path: &'static str,
    /// Query parameters, appended in order.
    pub query: Vec<(&'static str, String)>,
}

impl RequestSpec {
    /// Resolve the descriptor against a base URL.
    pub fn url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path
        ))?;

        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}

/// Worldwide top charts.
pub fn top_charts() -> RequestSpec {
    RequestSpec {
        path: "v1/charts/world",
        query: Vec::new(),
    }
}

/// Worldwide charts for a single genre.
pub fn charts_by_genre(genre: Genre) -> RequestSpec {
    RequestSpec {
        path: "v1/charts/genre-world",
        query: vec![("genre_code", genre.code().to_string())],
    }
}

/// Charts for a country, identified by its ISO 3166-1 alpha-2 code.
pub fn charts_by_country(country_code: &str) -> RequestSpec {
    RequestSpec {
        path: "v1/charts/country",
        query: vec![("country_code", country_code.to_string())],
    }
}

/// Combined song and artist search.
pub fn search(term: &str) -> RequestSpec {
    RequestSpec {
        path: "v1/search/multi",
        query: vec![
            ("search_type", "SONGS_ARTISTS".to_string()),
            ("query", term.to_string()),
        ],
    }
}

/// Artist details by Apple Music artist ID (`adamid`).
pub fn artist_details(artist_id: &str) -> RequestSpec {
    RequestSpec {
        path: "v2/artists/details",
        query: vec![("artist_id", artist_id.to_string())],
    }
}

/// Track details by Shazam track key.
pub fn song_details(track_id: &str) -> RequestSpec {
    RequestSpec {
        path: "v1/tracks/details",
        query: vec![("track_id", track_id.to_string())],
    }
}

/// Tracks related to the given track.
pub fn related_songs(track_id: &str) -> RequestSpec {
    RequestSpec {
        path: "v1/tracks/related",
        query: vec![("track_id", track_id.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_charts_has_no_query() {
        let spec = top_charts();
        assert_eq!(spec.path, "v1/charts/world");
        assert!(spec.query.is_empty());
    }

    #[test]
    fn test_charts_by_genre_uses_genre_code() {
        let spec = charts_by_genre(Genre::HipHopRap);
        assert_eq!(spec.path, "v1/charts/genre-world");
        assert_eq!(spec.query, vec![("genre_code", "HIP_HOP_RAP".to_string())]);
    }

    #[test]
    fn test_charts_by_country() {
        let spec = charts_by_country("DE");
        assert_eq!(spec.path, "v1/charts/country");
        assert_eq!(spec.query, vec![("country_code", "DE".to_string())]);
    }

    #[test]
    fn test_search_pins_search_type() {
        let spec = search("Paranoid Android");
        assert_eq!(spec.path, "v1/search/multi");
        assert_eq!(spec.query[0], ("search_type", "SONGS_ARTISTS".to_string()));
        assert_eq!(spec.query[1], ("query", "Paranoid Android".to_string()));
    }

    #[test]
    fn test_detail_endpoints_carry_ids() {
        assert_eq!(
            artist_details("42").query,
            vec![("artist_id", "42".to_string())]
        );
        assert_eq!(
            song_details("296831279").query,
            vec![("track_id", "296831279".to_string())]
        );
        assert_eq!(
            related_songs("296831279").query,
            vec![("track_id", "296831279".to_string())]
        );
    }

    #[test]
    fn test_url_joins_base_and_trims_trailing_slash() {
        let url = top_charts().url("http://127.0.0.1:9000/").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/v1/charts/world");
    }

    #[test]
    fn test_url_encodes_query_values() {
        let url = search("Nina Simone").url("https://shazam-core.p.rapidapi.com").unwrap();
        assert_eq!(
            url.as_str(),
            "https://shazam-core.p.rapidapi.com/v1/search/multi?search_type=SONGS_ARTISTS&query=Nina+Simone"
        );
    }
}
