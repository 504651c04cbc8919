// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart genres accepted by the genre-chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Pop,
    HipHopRap,
    Dance,
    Electronic,
    SoulRnb,
    Alternative,
    Rock,
    Latin,
    FilmTv,
    Country,
    AfroBeats,
    Worldwide,
    ReggaeDancehall,
    House,
    KPop,
}

impl Genre {
    /// Wire code passed as the `genre_code` query parameter.
    pub fn code(&self) -> &'static str {
        match self {
            Genre::Pop => "POP",
            Genre::HipHopRap => "HIP_HOP_RAP",
            Genre::Dance => "DANCE",
            Genre::Electronic => "ELECTRONIC",
            Genre::SoulRnb => "SOUL_RNB",
            Genre::Alternative => "ALTERNATIVE",
            Genre::Rock => "ROCK",
            Genre::Latin => "LATIN",
            Genre::FilmTv => "FILM_TV",
            Genre::Country => "COUNTRY",
            Genre::AfroBeats => "AFRO_BEATS",
            Genre::Worldwide => "WORLDWIDE",
            Genre::ReggaeDancehall => "REGGAE_DANCE_HALL",
            Genre::House => "HOUSE",
            Genre::KPop => "K_POP",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Genre::Pop => "Pop",
            Genre::HipHopRap => "Hip-Hop/Rap",
            Genre::Dance => "Dance",
            Genre::Electronic => "Electronic",
            Genre::SoulRnb => "Soul/R&B",
            Genre::Alternative => "Alternative",
            Genre::Rock => "Rock",
            Genre::Latin => "Latin",
            Genre::FilmTv => "Film & TV",
            Genre::Country => "Country",
            Genre::AfroBeats => "Afro Beats",
            Genre::Worldwide => "Worldwide",
            Genre::ReggaeDancehall => "Reggae/Dancehall",
            Genre::House => "House",
            Genre::KPop => "K-Pop",
        };
        f.write_str(label)
    }
}

/// A track as returned by the chart, search, and detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Shazam track key, used for detail and related-track lookups.
    pub key: String,
    /// Track title.
    pub title: String,
    /// Artist line shown under the title.
    pub subtitle: String,
    /// Cover and background artwork URLs.
    #[serde(default)]
    pub images: Option<TrackImages>,
    /// Credited artists with their Apple Music IDs.
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    /// Canonical Shazam page for the track.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub genres: Option<TrackGenres>,
    #[serde(default)]
    pub hub: Option<Hub>,
    /// Detail sections (song metadata, lyrics, video). Only populated by the
    /// track-details endpoint.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Track {
    /// Lyrics lines from the `LYRICS` detail section, when present.
    pub fn lyrics(&self) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|section| section.section_type == "LYRICS")
            .map(|section| section.text.as_slice())
    }
}

/// Artwork URLs attached to a track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackImages {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub coverart: Option<String>,
    #[serde(default)]
    pub coverarthq: Option<String>,
}

/// Artist credit on a track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackArtist {
    /// Apple Music artist ID, accepted by the artist-details endpoint.
    pub adamid: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackGenres {
    #[serde(default)]
    pub primary: Option<String>,
}

/// Provider actions for a track (preview audio, store links).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hub {
    #[serde(rename = "type", default)]
    pub hub_type: Option<String>,
    #[serde(default)]
    pub actions: Vec<HubAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HubAction {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub action_type: String,
    /// Preview audio or deep-link URI, depending on the action type.
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// One block of the track-details response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Section discriminator: `SONG`, `LYRICS`, `VIDEO`, ...
    #[serde(rename = "type")]
    pub section_type: String,
    #[serde(default)]
    pub metadata: Vec<SectionMetadata>,
    /// Lyrics lines for `LYRICS` sections.
    #[serde(default)]
    pub text: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionMetadata {
    pub title: String,
    pub text: String,
}

/// Combined search response: song hits and artist hits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<TrackHits>,
    #[serde(default)]
    pub artists: Option<ArtistHits>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackHits {
    #[serde(default)]
    pub hits: Vec<TrackHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackHit {
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistHits {
    #[serde(default)]
    pub hits: Vec<ArtistHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistHit {
    pub artist: ArtistSummary,
}

/// Artist search hit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistSummary {
    pub name: String,
    /// Apple Music artist ID, accepted by the artist-details endpoint.
    pub adamid: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
}

/// Artist-details response. The v2 endpoint wraps its payload in an Apple
/// Music style `data` envelope with at most one element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistDetails {
    #[serde(default)]
    pub data: Vec<ArtistData>,
}

impl ArtistDetails {
    /// The artist object, when the lookup matched.
    pub fn artist(&self) -> Option<&ArtistData> {
        self.data.first()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistData {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: ArtistAttributes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtistAttributes {
    pub name: String,
    #[serde(rename = "genreNames", default)]
    pub genre_names: Vec<String>,
    #[serde(default)]
    pub artwork: Option<Artwork>,
    /// Country or city of origin.
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(rename = "bornOrFormed", default)]
    pub born_or_formed: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "artistBio", default)]
    pub artist_bio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(rename = "bgColor", default)]
    pub bg_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_codes_round_trip_known_values() {
        assert_eq!(Genre::Pop.code(), "POP");
        assert_eq!(Genre::SoulRnb.code(), "SOUL_RNB");
        assert_eq!(Genre::ReggaeDancehall.code(), "REGGAE_DANCE_HALL");
        assert_eq!(Genre::KPop.code(), "K_POP");
    }

    #[test]
    fn test_genre_display_labels() {
        assert_eq!(Genre::HipHopRap.to_string(), "Hip-Hop/Rap");
        assert_eq!(Genre::FilmTv.to_string(), "Film & TV");
    }

    #[test]
    fn test_track_lyrics_picks_lyrics_section() {
        let track: Track = serde_json::from_value(serde_json::json!({
            "key": "296831279",
            "title": "Paranoid Android",
            "subtitle": "Radiohead",
            "sections": [
                {"type": "SONG", "metadata": [{"title": "Album", "text": "OK Computer"}]},
                {"type": "LYRICS", "text": ["Please could you stop the noise", "I'm trying to get some rest"]}
            ]
        }))
        .unwrap();

        let lyrics = track.lyrics().unwrap();
        assert_eq!(lyrics.len(), 2);
        assert_eq!(lyrics[0], "Please could you stop the noise");
    }

    #[test]
    fn test_track_without_sections_has_no_lyrics() {
        let track: Track = serde_json::from_value(serde_json::json!({
            "key": "296831279",
            "title": "Paranoid Android",
            "subtitle": "Radiohead"
        }))
        .unwrap();

        assert!(track.lyrics().is_none());
        assert!(track.sections.is_empty());
        assert!(track.artists.is_empty());
    }
}
