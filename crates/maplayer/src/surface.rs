use foundation::color::Color;
use foundation::geo::{LatLon, LatLonBounds};

/// Fixed starting region: central Sierra Nevada.
pub const DEFAULT_CENTER: LatLon = LatLon::new(37.3, -119.5);
pub const DEFAULT_ZOOM: f64 = 5.5;

/// Padding applied when fitting the viewport to the placed markers.
pub const FIT_PADDING_PX: f64 = 30.0;

/// Handle to a marker placed on the surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

/// Circle-marker styling.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    pub color: Color,
    pub radius_px: f64,
    pub weight_px: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub fn dot(color: Color) -> Self {
        Self {
            color,
            radius_px: 5.0,
            weight_px: 1.2,
            fill_opacity: 0.9,
        }
    }
}

/// Everything the surface needs to place one campsite marker, including the
/// hover tooltip content (campsite name plus a detail-view link).
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLon,
    pub style: MarkerStyle,
    pub title: String,
    pub detail_href: String,
}

/// Capability contract for the external mapping widget.
///
/// The renderer is written against this set, not a concrete library: view
/// construction, marker placement with tooltip registration, and bounds
/// fitting. Tile fetching and drawing live entirely on the other side.
pub trait MapSurface {
    fn set_view(&mut self, center: LatLon, zoom: f64);
    fn add_marker(&mut self, spec: &MarkerSpec) -> MarkerId;
    fn fit_bounds(&mut self, bounds: &LatLonBounds, padding_px: f64);
}

/// Surface that records every call, for tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub view: Option<(LatLon, f64)>,
    pub markers: Vec<MarkerSpec>,
    pub fitted: Option<(LatLonBounds, f64)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for RecordingSurface {
    fn set_view(&mut self, center: LatLon, zoom: f64) {
        self.view = Some((center, zoom));
    }

    fn add_marker(&mut self, spec: &MarkerSpec) -> MarkerId {
        self.markers.push(spec.clone());
        MarkerId(self.markers.len() as u64 - 1)
    }

    fn fit_bounds(&mut self, bounds: &LatLonBounds, padding_px: f64) {
        self.fitted = Some((*bounds, padding_px));
    }
}
