/// Fixed search endpoint.
pub const SEARCH_ENDPOINT: &str = "/api/search";

/// Normalized query specification built fresh on every submission.
///
/// Flag fields carry no explicit false: an unchecked box means "don't
/// filter" and contributes nothing to the wire query. The builder never
/// emits a key for an unset/empty control.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub query: Option<String>,
    pub is_open: bool,
    pub has_water: bool,
    pub has_restrooms: bool,
    pub forest: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }

    /// Serializes the set fields as a wire query string.
    ///
    /// Key order is fixed (query, is_open, has_water, has_restrooms, forest,
    /// start, end) so identical filters always produce byte-identical
    /// strings. Returns an empty string when nothing is set.
    pub fn to_query_string(&self) -> String {
        let mut qs = form_urlencoded::Serializer::new(String::new());

        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            qs.append_pair("query", query);
        }
        if self.is_open {
            qs.append_pair("is_open", "true");
        }
        if self.has_water {
            qs.append_pair("has_water", "true");
        }
        if self.has_restrooms {
            qs.append_pair("has_restrooms", "true");
        }
        if let Some(forest) = self.forest.as_deref().filter(|f| !f.is_empty()) {
            qs.append_pair("forest", forest);
        }
        if let Some(start) = self.start.as_deref().filter(|s| !s.is_empty()) {
            qs.append_pair("start", start);
        }
        if let Some(end) = self.end.as_deref().filter(|e| !e.is_empty()) {
            qs.append_pair("end", end);
        }

        qs.finish()
    }

    /// Full search URL, omitting the `?` when no filter is set.
    pub fn to_request_url(&self) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            SEARCH_ENDPOINT.to_string()
        } else {
            format!("{SEARCH_ENDPOINT}?{qs}")
        }
    }
}
