use foundation::diag::{DiagnosticsLog, Severity};
use foundation::http::HttpFetch;

use crate::point::CampsitePoint;

/// Fixed feed endpoint; one best-effort request per page load.
pub const CAMPSITES_ENDPOINT: &str = "/api/map/campsites";

/// Decodes a feed body into campsite points.
///
/// A non-array or otherwise unparseable payload decodes to zero points.
/// Malformed elements inside a well-formed array are skipped individually so
/// one bad record cannot blank the whole map.
pub fn decode_points(body: &str) -> Vec<CampsitePoint> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| serde_json::from_value::<CampsitePoint>(item.clone()).ok())
        .collect()
}

/// Fetches the campsite feed, degrading every failure to an empty list.
///
/// "No points" and "fetch failed" are deliberately indistinguishable to
/// callers; the failure detail goes into the diagnostics log only. No retry,
/// no timeout, no cancellation.
pub async fn fetch_points_or_empty(
    client: &impl HttpFetch,
    diag: &mut DiagnosticsLog,
) -> Vec<CampsitePoint> {
    match client.get(CAMPSITES_ENDPOINT).await {
        Err(err) => {
            diag.emit(
                Severity::Error,
                "feed",
                format!("{CAMPSITES_ENDPOINT} request failed: {err}"),
            );
            Vec::new()
        }
        Ok(resp) if !resp.is_success() => {
            diag.emit(
                Severity::Error,
                "feed",
                format!(
                    "{CAMPSITES_ENDPOINT} returned status {}: {}",
                    resp.status, resp.body
                ),
            );
            Vec::new()
        }
        Ok(resp) => decode_points(&resp.body),
    }
}

#[cfg(test)]
mod tests {
    use super::{CAMPSITES_ENDPOINT, decode_points, fetch_points_or_empty};
    use crate::point::SiteId;
    use foundation::diag::{DiagnosticsLog, Severity};
    use foundation::http::{HttpFetch, HttpResponse, TransportError};
    use pretty_assertions::assert_eq;

    struct CannedFetch(Result<HttpResponse, TransportError>);

    impl HttpFetch for CannedFetch {
        async fn get(&self, _url: &str) -> Result<HttpResponse, TransportError> {
            self.0.clone()
        }
    }

    #[test]
    fn decodes_well_formed_array() {
        let body = r#"[
            {"id": 1, "name": "Pinecrest", "latitude": 38.19, "longitude": -119.99, "forest_name": "Stanislaus"},
            {"id": "rec-2", "name": "Lost Claim", "latitude": 37.82, "longitude": -120.1}
        ]"#;
        let points = decode_points(body);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].id, SiteId::Number(1));
        assert_eq!(points[1].id, SiteId::Text("rec-2".to_string()));
        assert_eq!(points[1].forest_group(), "Other");
    }

    #[test]
    fn malformed_elements_are_skipped_not_fatal() {
        let body = r#"[
            {"id": 1, "name": "Pinecrest", "latitude": 38.19, "longitude": -119.99},
            {"latitude": "not a point"},
            {"id": 3, "name": "Summit Ranger", "latitude": 38.3, "longitude": -120.01}
        ]"#;
        let points = decode_points(body);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "Pinecrest");
        assert_eq!(points[1].name, "Summit Ranger");
    }

    #[test]
    fn non_array_payloads_decode_to_empty() {
        assert!(decode_points("{\"error\": \"nope\"}").is_empty());
        assert!(decode_points("not json at all").is_empty());
        assert!(decode_points("null").is_empty());
    }

    #[test]
    fn non_success_status_degrades_to_empty_with_diagnostic() {
        let client = CannedFetch(Ok(HttpResponse::new(500, "boom")));
        let mut diag = DiagnosticsLog::new();

        let points = pollster::block_on(fetch_points_or_empty(&client, &mut diag));

        assert!(points.is_empty());
        assert_eq!(diag.entries().len(), 1);
        let entry = &diag.entries()[0];
        assert_eq!(entry.severity, Severity::Error);
        assert!(entry.message.contains(CAMPSITES_ENDPOINT));
        assert!(entry.message.contains("500"));
        assert!(entry.message.contains("boom"));
    }

    #[test]
    fn transport_failure_degrades_to_empty_with_diagnostic() {
        let client = CannedFetch(Err(TransportError("connection refused".to_string())));
        let mut diag = DiagnosticsLog::new();

        let points = pollster::block_on(fetch_points_or_empty(&client, &mut diag));

        assert!(points.is_empty());
        assert_eq!(diag.entries().len(), 1);
        assert!(diag.entries()[0].message.contains("connection refused"));
    }

    #[test]
    fn successful_fetch_records_no_diagnostics() {
        let body = r#"[{"id": 7, "name": "Herring Creek", "latitude": 38.2, "longitude": -119.9}]"#;
        let client = CannedFetch(Ok(HttpResponse::new(200, body)));
        let mut diag = DiagnosticsLog::new();

        let points = pollster::block_on(fetch_points_or_empty(&client, &mut diag));

        assert_eq!(points.len(), 1);
        assert!(diag.entries().is_empty());
    }
}
