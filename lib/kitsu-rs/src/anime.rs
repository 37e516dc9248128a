use std::collections::HashMap;
use url::Url;

/// Anime attributes.
/// [Spec](https://kitsu.docs.apiary.io/#reference/anime)
///
/// Only the fields this crate projects are modeled;
/// everything else in the response is ignored.
#[derive(Debug, serde::Deserialize)]
pub struct Anime {
    /// Titles keyed by language tag, like "en" or "ja_jp"
    #[serde(default)]
    pub titles: HashMap<String, Option<String>>,

    #[serde(rename = "canonicalTitle")]
    pub canonical_title: Option<String>,

    pub synopsis: Option<String>,

    /// The average rating, a numeric string
    #[serde(rename = "averageRating")]
    pub average_rating: Option<String>,

    #[serde(rename = "popularityRank")]
    pub popularity_rank: Option<u64>,

    #[serde(rename = "episodeCount")]
    pub episode_count: Option<u64>,

    #[serde(rename = "posterImage")]
    pub poster_image: Option<PosterImage>,
}

impl Anime {
    /// Get the English title, if the api has one.
    pub fn title_en(&self) -> Option<&str> {
        self.titles.get("en").and_then(|title| title.as_deref())
    }
}

/// Poster image data
#[derive(Debug, serde::Deserialize)]
pub struct PosterImage {
    /// The full-size poster url
    pub original: Option<Url>,
}
