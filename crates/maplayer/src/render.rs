use feed::point::{CampsitePoint, SiteId};
use foundation::diag::{DiagnosticsLog, Severity};
use foundation::geo::LatLonBounds;

use crate::surface::{FIT_PADDING_PX, MapSurface, MarkerId, MarkerSpec, MarkerStyle};
use crate::symbology::ForestColorAssigner;

/// Counts for one render pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    pub placed: usize,
    pub skipped: usize,
}

/// Associates placed markers with the campsite they represent, so click
/// routing can resolve a surface callback back to a site id.
#[derive(Debug, Default)]
pub struct MarkerIndex {
    entries: Vec<(MarkerId, SiteId)>,
}

impl MarkerIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, marker: MarkerId, site: SiteId) {
        self.entries.push((marker, site));
    }

    pub fn site_for(&self, marker: MarkerId) -> Option<&SiteId> {
        self.entries
            .iter()
            .find(|(m, _)| *m == marker)
            .map(|(_, site)| site)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Places one marker per valid point, in feed order, then frames the result.
///
/// A point is valid iff both coordinates are present. Color assignment order
/// is tied to feed order through the assigner. With zero valid points the
/// viewport is left untouched and a diagnostic is recorded; there is no
/// user-visible error for an empty map.
pub fn render_campsites(
    surface: &mut impl MapSurface,
    points: &[CampsitePoint],
    assigner: &mut ForestColorAssigner,
    diag: &mut DiagnosticsLog,
) -> (RenderSummary, MarkerIndex) {
    let mut summary = RenderSummary::default();
    let mut index = MarkerIndex::new();
    let mut bounds: Option<LatLonBounds> = None;

    for point in points {
        let Some(position) = point.position() else {
            summary.skipped += 1;
            continue;
        };

        let color = assigner.color_for(point.forest_group());
        let spec = MarkerSpec {
            position,
            style: MarkerStyle::dot(color),
            title: point.name.clone(),
            detail_href: format!("/campsite/{}", point.id),
        };

        let marker = surface.add_marker(&spec);
        index.insert(marker, point.id.clone());
        summary.placed += 1;

        match bounds.as_mut() {
            Some(b) => b.extend(position),
            None => bounds = Some(LatLonBounds::from_point(position)),
        }
    }

    match bounds {
        Some(b) => surface.fit_bounds(&b, FIT_PADDING_PX),
        None => diag.emit(
            Severity::Warn,
            "map",
            "feed returned no mappable campsite points",
        ),
    }

    (summary, index)
}

#[cfg(test)]
mod tests {
    use super::{MarkerIndex, render_campsites};
    use crate::surface::{MarkerId, RecordingSurface};
    use crate::symbology::{FOREST_PALETTE, ForestColorAssigner};
    use feed::point::{CampsitePoint, SiteId};
    use foundation::diag::{DiagnosticsLog, Severity};
    use foundation::geo::LatLon;
    use pretty_assertions::assert_eq;

    fn site(id: i64, name: &str, lat: Option<f64>, lon: Option<f64>, forest: Option<&str>) -> CampsitePoint {
        CampsitePoint {
            id: SiteId::from(id),
            name: name.to_string(),
            latitude: lat,
            longitude: lon,
            forest_name: forest.map(str::to_string),
        }
    }

    #[test]
    fn places_exactly_the_coordinate_complete_points() {
        let points = vec![
            site(1, "Pinecrest", Some(38.19), Some(-119.99), Some("Stanislaus")),
            site(2, "No Latitude", None, Some(-120.0), None),
            site(3, "No Longitude", Some(38.0), None, None),
            site(4, "Lost Claim", Some(37.82), Some(-120.1), Some("Stanislaus")),
        ];
        let mut surface = RecordingSurface::new();
        let mut assigner = ForestColorAssigner::default();
        let mut diag = DiagnosticsLog::new();

        let (summary, index) =
            render_campsites(&mut surface, &points, &mut assigner, &mut diag);

        assert_eq!(summary.placed, 2);
        assert_eq!(summary.skipped, 2);
        assert_eq!(surface.markers.len(), 2);
        assert_eq!(index.len(), 2);
        assert_eq!(surface.markers[0].title, "Pinecrest");
        assert_eq!(surface.markers[0].detail_href, "/campsite/1");
        assert!(diag.entries().is_empty());
    }

    #[test]
    fn marker_colors_follow_first_seen_forest_order() {
        let points = vec![
            site(1, "A", Some(38.0), Some(-120.0), Some("Eldorado")),
            site(2, "B", Some(38.1), Some(-120.1), Some("Stanislaus")),
            site(3, "C", Some(38.2), Some(-120.2), Some("Eldorado")),
        ];
        let mut surface = RecordingSurface::new();
        let mut assigner = ForestColorAssigner::default();
        let mut diag = DiagnosticsLog::new();

        render_campsites(&mut surface, &points, &mut assigner, &mut diag);

        assert_eq!(surface.markers[0].style.color, FOREST_PALETTE[0]);
        assert_eq!(surface.markers[1].style.color, FOREST_PALETTE[1]);
        assert_eq!(surface.markers[2].style.color, FOREST_PALETTE[0]);
    }

    #[test]
    fn fits_bounds_covering_all_placed_markers() {
        let points = vec![
            site(1, "South", Some(36.5), Some(-121.0), None),
            site(2, "North", Some(39.0), Some(-119.5), None),
        ];
        let mut surface = RecordingSurface::new();
        let mut assigner = ForestColorAssigner::default();
        let mut diag = DiagnosticsLog::new();

        render_campsites(&mut surface, &points, &mut assigner, &mut diag);

        let (bounds, padding) = surface.fitted.expect("bounds fitted");
        assert_eq!(bounds.south_west, LatLon::new(36.5, -121.0));
        assert_eq!(bounds.north_east, LatLon::new(39.0, -119.5));
        assert_eq!(padding, 30.0);
    }

    #[test]
    fn zero_valid_points_leaves_viewport_alone_and_logs() {
        let points = vec![site(1, "No Coords", None, None, None)];
        let mut surface = RecordingSurface::new();
        let mut assigner = ForestColorAssigner::default();
        let mut diag = DiagnosticsLog::new();

        let (summary, index) =
            render_campsites(&mut surface, &points, &mut assigner, &mut diag);

        assert_eq!(summary.placed, 0);
        assert!(index.is_empty());
        assert!(surface.fitted.is_none());
        assert_eq!(diag.entries().len(), 1);
        assert_eq!(diag.entries()[0].severity, Severity::Warn);
    }

    #[test]
    fn index_resolves_markers_back_to_sites() {
        let mut index = MarkerIndex::new();
        index.insert(MarkerId(0), SiteId::from(7));
        index.insert(MarkerId(1), SiteId::from("rec-9"));

        assert_eq!(index.site_for(MarkerId(0)), Some(&SiteId::from(7)));
        assert_eq!(index.site_for(MarkerId(1)), Some(&SiteId::from("rec-9")));
        assert_eq!(index.site_for(MarkerId(2)), None);
    }
}
