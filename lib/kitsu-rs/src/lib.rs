mod anime;
mod client;
mod document;
mod query;
mod record;

pub use crate::anime::Anime;
pub use crate::anime::PosterImage;
pub use crate::client::Client;
pub use crate::client::BASE_URL;
pub use crate::document::JsonDocument;
pub use crate::document::ResourceObject;
pub use crate::query::SearchQuery;
pub use crate::query::SortDirection;
pub use crate::record::AnimeRecord;
pub use crate::record::RankingRow;
pub use crate::record::UNAVAILABLE;

/// The error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A HTTP error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// The api responded with a non-success status code.
    ///
    /// The body is not read when this is returned.
    #[error("kitsu responded with status code {status}")]
    Status {
        /// The status code
        status: reqwest::StatusCode,
    },

    /// Failed to build a request url
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Get the status code of a failed response, if there is one.
    pub fn status_code(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Reqwest(error) => error.status(),
            Self::InvalidUrl(_) => None,
        }
    }
}
