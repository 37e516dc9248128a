use url::Url;

/// Server-side result ordering by average rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Best-rated first
    Descending,

    /// Worst-rated first
    Ascending,
}

impl SortDirection {
    /// The api's sort parameter value, where a leading `-` marks descending.
    pub fn as_sort_param(self) -> &'static str {
        match self {
            Self::Descending => "-averageRating",
            Self::Ascending => "averageRating",
        }
    }
}

/// A single anime search request.
///
/// Built fresh per request and never reused.
#[derive(Debug, Clone, Copy)]
pub struct SearchQuery<'a> {
    /// The free-text title filter
    pub text: &'a str,

    /// The page size
    pub limit: u8,

    /// Server-side ordering, if any
    pub sort: Option<SortDirection>,
}

impl SearchQuery<'_> {
    /// Build the request url for this query.
    pub(crate) fn to_url(&self, base_url: &Url) -> Result<Url, url::ParseError> {
        let endpoint = base_url.join("anime")?;

        let mut limit_buffer = itoa::Buffer::new();
        let limit = limit_buffer.format(self.limit);

        let mut url = Url::parse_with_params(
            endpoint.as_str(),
            [("filter[text]", self.text), ("page[limit]", limit)],
        )?;
        if let Some(sort) = self.sort {
            url.query_pairs_mut()
                .append_pair("sort", sort.as_sort_param());
        }

        Ok(url)
    }
}
