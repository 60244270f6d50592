/// A geographic position in WGS84 degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        LatLon { lat, lon }
    }
}

/// Axis-aligned geographic bounds, grown point by point.
///
/// A bounds always contains at least one position; callers that may end up
/// with zero positions carry an `Option<LatLonBounds>` instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLonBounds {
    pub south_west: LatLon,
    pub north_east: LatLon,
}

impl LatLonBounds {
    pub fn from_point(p: LatLon) -> Self {
        LatLonBounds {
            south_west: p,
            north_east: p,
        }
    }

    pub fn extend(&mut self, p: LatLon) {
        self.south_west.lat = self.south_west.lat.min(p.lat);
        self.south_west.lon = self.south_west.lon.min(p.lon);
        self.north_east.lat = self.north_east.lat.max(p.lat);
        self.north_east.lon = self.north_east.lon.max(p.lon);
    }

    pub fn contains(&self, p: LatLon) -> bool {
        p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
            && p.lon >= self.south_west.lon
            && p.lon <= self.north_east.lon
    }
}
