/// A JSON:API document envelope.
///
/// Every response body from the api is wrapped in one of these.
#[derive(Debug, serde::Deserialize)]
pub struct JsonDocument<T> {
    /// The primary data, if any
    pub data: Option<T>,
}

/// A resource object inside a document.
#[derive(Debug, serde::Deserialize)]
pub struct ResourceObject<T> {
    /// The resource id
    pub id: Option<String>,

    /// The resource type, like "anime"
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// The resource attributes
    pub attributes: Option<T>,
}
