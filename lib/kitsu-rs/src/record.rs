use crate::Anime;
use url::Url;

/// The marker rendered in place of a missing optional field.
pub const UNAVAILABLE: &str = "N/A";

/// The reduced display shape of a single looked-up anime.
///
/// Every field is copied verbatim from the api response;
/// missing optional attributes stay `None` and are rendered
/// with [`UNAVAILABLE`] by the display layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimeRecord {
    /// The English title
    pub title_english: Option<String>,

    /// The synopsis
    pub synopsis: Option<String>,

    /// The episode count
    pub episode_count: Option<u64>,

    /// The average rating, as the numeric string the api returned
    pub average_rating: Option<String>,

    /// The popularity rank
    pub popularity_rank: Option<u64>,

    /// The full-size poster url
    pub poster_image_url: Option<Url>,
}

impl AnimeRecord {
    /// The title to display, falling back to the [`UNAVAILABLE`] marker.
    pub fn display_title(&self) -> &str {
        self.title_english.as_deref().unwrap_or(UNAVAILABLE)
    }
}

impl From<Anime> for AnimeRecord {
    fn from(anime: Anime) -> Self {
        let title_english = anime.title_en().map(|title| title.to_string());

        Self {
            title_english,
            synopsis: anime.synopsis,
            episode_count: anime.episode_count,
            average_rating: anime.average_rating,
            popularity_rank: anime.popularity_rank,
            poster_image_url: anime.poster_image.and_then(|poster| poster.original),
        }
    }
}

/// One bar of a ratings chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    /// `"{english title} (Episodes: {count})"`, with "N/A" for missing parts
    pub label: String,

    /// The average rating, `None` when the api has none
    pub rating: Option<f64>,
}

impl RankingRow {
    /// Project a search result into a chart row.
    ///
    /// A result with no attributes object still produces a row
    /// so the server's row count and order are preserved.
    pub(crate) fn from_attributes(attributes: Option<Anime>) -> Self {
        let Some(anime) = attributes else {
            return Self {
                label: format!("{UNAVAILABLE} (Episodes: {UNAVAILABLE})"),
                rating: None,
            };
        };

        let title = anime.title_en().unwrap_or(UNAVAILABLE);
        let label = match anime.episode_count {
            Some(count) => format!("{title} (Episodes: {count})"),
            None => format!("{title} (Episodes: {UNAVAILABLE})"),
        };
        let rating = anime
            .average_rating
            .as_deref()
            .and_then(|rating| rating.parse().ok());

        Self { label, rating }
    }
}
