use foundation::geo::{LatLon, LatLonBounds};
use maplayer::surface::{MapSurface, MarkerId, MarkerSpec};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Page-provided mapping widget (a thin Leaflet shim). The renderer only
// talks to `MapSurface`; these bindings are the whole integration.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = campsearchMapInit)]
    fn widget_init(center_lat: f64, center_lon: f64, zoom: f64);

    #[wasm_bindgen(js_name = campsearchMapAddMarker)]
    fn widget_add_marker(
        lat: f64,
        lon: f64,
        color: &str,
        radius_px: f64,
        weight_px: f64,
        fill_opacity: f64,
        title: &str,
        detail_href: &str,
    ) -> u32;

    #[wasm_bindgen(js_name = campsearchMapFitBounds)]
    fn widget_fit_bounds(south: f64, west: f64, north: f64, east: f64, padding_px: f64);

    #[wasm_bindgen(js_name = campsearchMapOnMarkerClick)]
    fn widget_on_marker_click(callback: &Closure<dyn FnMut(u32)>);
}

/// Whether the page actually loaded the mapping widget. Calling into an
/// absent global would throw, so every entry point checks this first.
pub fn available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let global: JsValue = window.into();
    js_sys::Reflect::has(&global, &JsValue::from_str("campsearchMapInit")).unwrap_or(false)
}

/// `MapSurface` over the page's mapping widget.
pub struct WidgetSurface;

impl MapSurface for WidgetSurface {
    fn set_view(&mut self, center: LatLon, zoom: f64) {
        widget_init(center.lat, center.lon, zoom);
    }

    fn add_marker(&mut self, spec: &MarkerSpec) -> MarkerId {
        let handle = widget_add_marker(
            spec.position.lat,
            spec.position.lon,
            &spec.style.color.to_hex(),
            spec.style.radius_px,
            spec.style.weight_px,
            spec.style.fill_opacity,
            &spec.title,
            &spec.detail_href,
        );
        MarkerId(handle as u64)
    }

    fn fit_bounds(&mut self, bounds: &LatLonBounds, padding_px: f64) {
        widget_fit_bounds(
            bounds.south_west.lat,
            bounds.south_west.lon,
            bounds.north_east.lat,
            bounds.north_east.lon,
            padding_px,
        );
    }
}

/// Registers the marker-click callback with the widget. The closure must be
/// kept alive by the caller for as long as clicks should be routed.
pub fn register_marker_clicks(handler: impl FnMut(u32) + 'static) -> Closure<dyn FnMut(u32)> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(u32)>);
    widget_on_marker_click(&closure);
    closure
}
