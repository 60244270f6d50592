use feed::point::SiteId;
use foundation::nav::Navigate;

use crate::render::MarkerIndex;
use crate::surface::MarkerId;

/// Read access to the search panel's date-range controls.
///
/// Marker clicks forward the *current* values, so implementations must read
/// the live controls on every call rather than caching them.
pub trait DateRangeRead {
    fn start(&self) -> Option<String>;
    fn end(&self) -> Option<String>;
}

/// Fixed start/end pair, mostly useful in tests.
#[derive(Debug, Default, Clone)]
pub struct FixedDateRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DateRangeRead for FixedDateRange {
    fn start(&self) -> Option<String> {
        self.start.clone()
    }

    fn end(&self) -> Option<String> {
        self.end.clone()
    }
}

/// Detail-view target for a campsite, with `start`/`end` appended only when
/// the corresponding control holds a value.
pub fn marker_click_target(site: &SiteId, dates: &impl DateRangeRead) -> String {
    let mut qs = form_urlencoded::Serializer::new(String::new());
    if let Some(start) = dates.start().filter(|s| !s.is_empty()) {
        qs.append_pair("start", &start);
    }
    if let Some(end) = dates.end().filter(|s| !s.is_empty()) {
        qs.append_pair("end", &end);
    }

    let qs = qs.finish();
    if qs.is_empty() {
        format!("/campsite/{site}")
    } else {
        format!("/campsite/{site}?{qs}")
    }
}

/// Routes a surface click callback to the detail view for that marker's
/// campsite. A callback for an unknown marker is ignored.
pub fn handle_marker_click(
    index: &MarkerIndex,
    marker: MarkerId,
    dates: &impl DateRangeRead,
    nav: &mut impl Navigate,
) {
    if let Some(site) = index.site_for(marker) {
        nav.go(&marker_click_target(site, dates));
    }
}
