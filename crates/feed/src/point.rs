use foundation::geo::LatLon;
use serde::{Deserialize, Serialize};

/// Forest grouping used when a point carries no forest name.
pub const OTHER_FOREST_GROUP: &str = "Other";

/// Campsite identifier as it appears on the wire.
///
/// The backend is loose about this: ids arrive as JSON integers or strings
/// depending on the endpoint. Both forms round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SiteId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteId::Number(n) => write!(f, "{n}"),
            SiteId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for SiteId {
    fn from(n: i64) -> Self {
        SiteId::Number(n)
    }
}

impl From<&str> for SiteId {
    fn from(s: &str) -> Self {
        SiteId::Text(s.to_string())
    }
}

/// One map-renderable campsite record from the feed.
///
/// A point with either coordinate absent is invalid for rendering and gets
/// skipped, not repaired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampsitePoint {
    pub id: SiteId,
    pub name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub forest_name: Option<String>,
}

impl CampsitePoint {
    /// Position iff both coordinates are present.
    pub fn position(&self) -> Option<LatLon> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(LatLon::new(lat, lon)),
            _ => None,
        }
    }

    /// Forest grouping for color assignment, defaulting to `"Other"` when
    /// the feed carries no forest name or an empty one.
    pub fn forest_group(&self) -> &str {
        match self.forest_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => OTHER_FOREST_GROUP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CampsitePoint, SiteId};
    use foundation::geo::LatLon;
    use pretty_assertions::assert_eq;

    fn point(lat: Option<f64>, lon: Option<f64>, forest: Option<&str>) -> CampsitePoint {
        CampsitePoint {
            id: SiteId::from(1),
            name: "Pinecrest".to_string(),
            latitude: lat,
            longitude: lon,
            forest_name: forest.map(str::to_string),
        }
    }

    #[test]
    fn position_requires_both_coordinates() {
        assert_eq!(
            point(Some(38.2), Some(-119.9), None).position(),
            Some(LatLon::new(38.2, -119.9))
        );
        assert_eq!(point(Some(38.2), None, None).position(), None);
        assert_eq!(point(None, Some(-119.9), None).position(), None);
        assert_eq!(point(None, None, None).position(), None);
    }

    #[test]
    fn forest_group_defaults_to_other() {
        assert_eq!(point(None, None, Some("Stanislaus")).forest_group(), "Stanislaus");
        assert_eq!(point(None, None, Some("")).forest_group(), "Other");
        assert_eq!(point(None, None, Some("   ")).forest_group(), "Other");
        assert_eq!(point(None, None, None).forest_group(), "Other");
    }

    #[test]
    fn site_id_decodes_numbers_and_strings() {
        let n: SiteId = serde_json::from_str("42").expect("number id");
        let s: SiteId = serde_json::from_str("\"rec-42\"").expect("string id");
        assert_eq!(n, SiteId::Number(42));
        assert_eq!(s, SiteId::Text("rec-42".to_string()));
        assert_eq!(n.to_string(), "42");
        assert_eq!(s.to_string(), "rec-42");
    }
}
