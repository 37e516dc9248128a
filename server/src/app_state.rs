use kitsu::AnimeRecord;
use kitsu::RankingRow;
use kitsu::SortDirection;
use tracing::info;

/// Shared request services.
///
/// Holds the api client and nothing else. Every handler call issues at
/// most one upstream request and no result is cached between requests.
#[derive(Debug)]
pub struct AppState {
    kitsu: kitsu::Client,
}

impl AppState {
    /// Make an app state against the production api.
    pub fn new() -> Self {
        Self::with_client(kitsu::Client::new())
    }

    /// Make an app state around the given client.
    pub fn with_client(kitsu: kitsu::Client) -> Self {
        Self { kitsu }
    }

    /// Look up the first anime matching a title.
    pub async fn lookup_anime(&self, title: &str) -> Result<Option<AnimeRecord>, kitsu::Error> {
        info!("looking up \"{title}\"");
        self.kitsu.lookup(title).await
    }

    /// Fetch the chart rows for a title.
    pub async fn rank_anime(
        &self,
        title: &str,
        direction: SortDirection,
    ) -> Result<Vec<RankingRow>, kitsu::Error> {
        info!("ranking \"{title}\"");
        self.kitsu.rank_by_rating(title, direction).await
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
