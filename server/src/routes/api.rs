use crate::AppState;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::Json;
use axum::Router;
use kitsu::SortDirection;
use std::sync::Arc;
use tracing::error;
use tracing::warn;

#[derive(Debug, serde::Serialize)]
struct ApiError {
    messages: Vec<String>,
}

impl ApiError {
    fn from_anyhow(error: anyhow::Error) -> Self {
        Self {
            messages: error.chain().map(|e| e.to_string()).collect(),
        }
    }

    fn from_message(message: String) -> Self {
        Self {
            messages: vec![message],
        }
    }
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/anime", get(api_anime_get))
        .route("/anime/ranking", get(api_anime_ranking_get))
}

/// An upstream failure is never fatal; it becomes a typed response
/// carrying the upstream status code in its message.
fn upstream_error_response(error: kitsu::Error) -> Response {
    error!("{error}");

    let status = match error.status_code() {
        Some(_) => StatusCode::BAD_GATEWAY,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ApiError::from_anyhow(error.into()))).into_response()
}

#[derive(Debug, serde::Deserialize)]
struct LookupParams {
    text: Option<String>,

    /// Whether to include the poster image url
    #[serde(default)]
    poster: bool,

    /// Whether to include the popularity rank
    #[serde(default)]
    rank: bool,
}

#[derive(Debug, serde::Serialize)]
struct ApiAnime {
    title: String,
    synopsis: Option<String>,
    episode_count: Option<u64>,
    average_rating: Option<String>,

    /// Present only when the rank toggle is set;
    /// null when set but the api has no rank.
    #[serde(skip_serializing_if = "Option::is_none")]
    popularity_rank: Option<Option<u64>>,

    /// Present only when the poster toggle is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    poster: Option<Option<String>>,
}

async fn api_anime_get(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<LookupParams>,
) -> Response {
    let text = params.text.unwrap_or_default();

    match app_state.lookup_anime(&text).await {
        Ok(Some(record)) => {
            let title = record.display_title().to_string();
            let anime = ApiAnime {
                title,
                synopsis: record.synopsis,
                episode_count: record.episode_count,
                average_rating: record.average_rating,
                popularity_rank: params.rank.then_some(record.popularity_rank),
                poster: params
                    .poster
                    .then(|| record.poster_image_url.map(|url| url.to_string())),
            };

            (StatusCode::OK, Json(anime)).into_response()
        }
        Ok(None) => {
            warn!("no anime found matching \"{text}\"");
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::from_message(format!(
                    "no anime found matching \"{text}\", check the exact title"
                ))),
            )
                .into_response()
        }
        Err(error) => upstream_error_response(error),
    }
}

#[derive(Debug, serde::Deserialize)]
struct RankingParams {
    text: Option<String>,

    #[serde(default)]
    direction: ApiSortDirection,
}

#[derive(Debug, Default, Clone, Copy, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
enum ApiSortDirection {
    #[default]
    Highest,
    Lowest,
}

impl From<ApiSortDirection> for SortDirection {
    fn from(direction: ApiSortDirection) -> Self {
        match direction {
            ApiSortDirection::Highest => Self::Descending,
            ApiSortDirection::Lowest => Self::Ascending,
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct ApiRankingRow {
    label: String,
    rating: Option<f64>,
}

async fn api_anime_ranking_get(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<RankingParams>,
) -> Response {
    let text = params.text.unwrap_or_default();

    match app_state.rank_anime(&text, params.direction.into()).await {
        Ok(rows) if rows.is_empty() => {
            warn!("no anime found with the title \"{text}\"");
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::from_message(format!(
                    "no anime found with the title \"{text}\""
                ))),
            )
                .into_response()
        }
        Ok(rows) => {
            let rows: Vec<ApiRankingRow> = rows
                .into_iter()
                .map(|row| ApiRankingRow {
                    label: row.label,
                    rating: row.rating,
                })
                .collect();

            (StatusCode::OK, Json(rows)).into_response()
        }
        Err(error) => upstream_error_response(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::body::Body;
    use axum::http::header;
    use axum::http::Request;
    use tower::ServiceExt;
    use url::Url;

    const FOUND: &str = r#"{
        "data": [
            {
                "id": "11",
                "type": "anime",
                "attributes": {
                    "titles": { "en": "Naruto", "ja_jp": "ナルト" },
                    "canonicalTitle": "Naruto",
                    "synopsis": "A hyperactive ninja.",
                    "averageRating": "8.2",
                    "episodeCount": 220,
                    "posterImage": {
                        "original": "https://media.kitsu.io/anime/poster_images/11/original.png"
                    }
                }
            }
        ],
        "meta": { "count": 1 }
    }"#;

    const RANKED: &str = r#"{
        "data": [
            {
                "id": "1",
                "type": "anime",
                "attributes": {
                    "titles": { "en": "A" },
                    "averageRating": "9.1",
                    "episodeCount": 12
                }
            },
            {
                "id": "2",
                "type": "anime",
                "attributes": {
                    "titles": { "en": "B" },
                    "averageRating": "7.4",
                    "episodeCount": 24
                }
            },
            {
                "id": "3",
                "type": "anime",
                "attributes": {
                    "titles": { "en": "C" },
                    "averageRating": "8.8",
                    "episodeCount": 1
                }
            }
        ],
        "meta": { "count": 3 }
    }"#;

    const EMPTY: &str = r#"{ "data": [], "meta": { "count": 0 } }"#;

    async fn mock_upstream(status: StatusCode, body: &'static str) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind");
        let addr = listener.local_addr().expect("missing local addr");
        let router = Router::new().route(
            "/anime",
            get(move || async move {
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }),
        );
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("mock upstream error");
        });

        Url::parse(&format!("http://{addr}/")).expect("invalid mock url")
    }

    fn app(base_url: Url) -> Router {
        let app_state = Arc::new(AppState::with_client(kitsu::Client::with_base_url(
            base_url,
        )));
        routes().with_state(app_state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let value = serde_json::from_slice(&body).expect("invalid response body");

        (status, value)
    }

    #[tokio::test]
    async fn lookup_with_toggles_off_omits_fields() {
        let base_url = mock_upstream(StatusCode::OK, FOUND).await;

        let (status, body) = get_json(app(base_url), "/anime?text=Naruto").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Naruto");
        assert_eq!(body["episode_count"], 220);
        assert_eq!(body["average_rating"], "8.2");
        assert!(body.get("poster").is_none());
        assert!(body.get("popularity_rank").is_none());
    }

    #[tokio::test]
    async fn lookup_with_toggles_on_includes_fields() {
        let base_url = mock_upstream(StatusCode::OK, FOUND).await;

        let (status, body) =
            get_json(app(base_url), "/anime?text=Naruto&poster=true&rank=true").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["poster"],
            "https://media.kitsu.io/anime/poster_images/11/original.png"
        );
        // Requested but absent upstream, so it is present and null.
        assert_eq!(body["popularity_rank"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn lookup_not_found_warns() {
        let base_url = mock_upstream(StatusCode::OK, EMPTY).await;

        let (status, body) = get_json(app(base_url), "/anime?text=zzzzzz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let message = body["messages"][0].as_str().expect("missing message");
        assert!(message.contains("check the exact title"));
    }

    #[tokio::test]
    async fn lookup_upstream_failure_carries_status() {
        let base_url = mock_upstream(StatusCode::SERVICE_UNAVAILABLE, "").await;

        let (status, body) = get_json(app(base_url), "/anime?text=Naruto").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let message = body["messages"][0].as_str().expect("missing message");
        assert!(message.contains("503"));
    }

    #[tokio::test]
    async fn ranking_preserves_order() {
        let base_url = mock_upstream(StatusCode::OK, RANKED).await;

        let (status, body) = get_json(app(base_url), "/anime/ranking?text=a").await;
        assert_eq!(status, StatusCode::OK);

        let rows = body.as_array().expect("expected an array");
        let ratings: Vec<f64> = rows
            .iter()
            .map(|row| row["rating"].as_f64().expect("missing rating"))
            .collect();
        assert_eq!(ratings, vec![9.1, 7.4, 8.8]);
        assert_eq!(rows[0]["label"], "A (Episodes: 12)");
    }

    #[tokio::test]
    async fn ranking_empty_result_warns() {
        let base_url = mock_upstream(StatusCode::OK, EMPTY).await;

        let (status, body) = get_json(app(base_url), "/anime/ranking?text=zzzzzz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let message = body["messages"][0].as_str().expect("missing message");
        assert!(message.contains("no anime found"));
    }

    #[tokio::test]
    async fn ranking_direction_param_parses() {
        let base_url = mock_upstream(StatusCode::OK, RANKED).await;

        let (status, _body) =
            get_json(app(base_url), "/anime/ranking?text=a&direction=lowest").await;
        assert_eq!(status, StatusCode::OK);
    }
}
