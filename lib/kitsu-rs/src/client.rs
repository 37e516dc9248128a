use crate::Anime;
use crate::AnimeRecord;
use crate::Error;
use crate::JsonDocument;
use crate::RankingRow;
use crate::ResourceObject;
use crate::SearchQuery;
use crate::SortDirection;
use url::Url;

/// The production api base url
pub const BASE_URL: &str = "https://kitsu.io/api/edge/";

/// The page size of a ranking request
const RANKING_PAGE_LIMIT: u8 = 10;

/// The kitsu api client
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,

    /// The api base url
    base_url: Url,
}

impl Client {
    /// Make a new client against the production api.
    pub fn new() -> Self {
        let base_url = Url::parse(BASE_URL).expect("invalid base url");
        Self::with_base_url(base_url)
    }

    /// Make a new client against the given base url.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Perform a search for anime.
    ///
    /// Issues exactly one GET request. A non-success status is returned
    /// as [`Error::Status`] without reading the body.
    pub async fn search(
        &self,
        query: &SearchQuery<'_>,
    ) -> Result<JsonDocument<Vec<ResourceObject<Anime>>>, Error> {
        let url = query.to_url(&self.base_url)?;
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status });
        }

        Ok(response.json().await?)
    }

    /// Look up the first anime matching a title.
    ///
    /// `Ok(None)` means no match, which is not an error.
    /// A blank title short-circuits to `Ok(None)` without touching the network.
    pub async fn lookup(&self, title: &str) -> Result<Option<AnimeRecord>, Error> {
        if title.trim().is_empty() {
            return Ok(None);
        }

        let document = self
            .search(&SearchQuery {
                text: title,
                limit: 1,
                sort: None,
            })
            .await?;

        let record = document
            .data
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|resource| resource.attributes)
            .map(AnimeRecord::from);

        Ok(record)
    }

    /// Fetch up to ten matches for a title, ordered server-side by average
    /// rating, and project them into chart rows.
    ///
    /// Row order is exactly the server's order; rows are never re-sorted,
    /// deduplicated, or dropped. An empty vec means no matches, which is
    /// not an error. A blank title short-circuits like [`Client::lookup`].
    pub async fn rank_by_rating(
        &self,
        title: &str,
        direction: SortDirection,
    ) -> Result<Vec<RankingRow>, Error> {
        if title.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document = self
            .search(&SearchQuery {
                text: title,
                limit: RANKING_PAGE_LIMIT,
                sort: Some(direction),
            })
            .await?;

        let rows = document
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|resource| RankingRow::from_attributes(resource.attributes))
            .collect();

        Ok(rows)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
