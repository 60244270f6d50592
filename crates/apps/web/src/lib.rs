use console_error_panic_hook::set_once;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod dom;
mod map_widget;
mod theme;
mod transport;

use dom::{
    AlertNotices, DomForm, ListenerHandle, WindowNavigator, console_error, console_log,
    drain_to_console,
};
use feed::client::fetch_points_or_empty;
use foundation::diag::DiagnosticsLog;
use maplayer::click::handle_marker_click;
use maplayer::render::{MarkerIndex, render_campsites};
use maplayer::surface::{DEFAULT_CENTER, DEFAULT_ZOOM, MapSurface, MarkerId};
use maplayer::symbology::ForestColorAssigner;
use search::controller::run_search;
use transport::GlooHttp;

thread_local! {
    static MARKER_INDEX: RefCell<Option<MarkerIndex>> = const { RefCell::new(None) };
    static MARKER_CLICKS: RefCell<Option<Closure<dyn FnMut(u32)>>> = const { RefCell::new(None) };
    static SUBMIT_HANDLER: RefCell<Option<ListenerHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Page entry point, called once the DOM is ready.
#[wasm_bindgen]
pub fn init_page() {
    theme::init_theme();
    init_map();
    init_search();
}

/// Sets up the map viewport, fetches the campsite feed, and renders markers.
///
/// Without the mapping widget this logs and does nothing; the rest of the
/// page is unaffected. A failed or empty feed leaves the viewport at its
/// default view.
#[wasm_bindgen]
pub fn init_map() {
    if !map_widget::available() {
        console_error("mapping widget is not available; map cannot be initialized");
        return;
    }

    let mut surface = map_widget::WidgetSurface;
    surface.set_view(DEFAULT_CENTER, DEFAULT_ZOOM);

    spawn_local(async move {
        let mut diag = DiagnosticsLog::new();
        let points = fetch_points_or_empty(&GlooHttp, &mut diag).await;
        if !points.is_empty() {
            console_log(&format!("loaded {} campsite points for the map", points.len()));
        }

        let mut surface = map_widget::WidgetSurface;
        let mut assigner = ForestColorAssigner::default();
        let (_summary, index) = render_campsites(&mut surface, &points, &mut assigner, &mut diag);
        MARKER_INDEX.with(|slot| *slot.borrow_mut() = Some(index));

        // Clicks read the date controls live and forward them to the
        // campsite detail view.
        let clicks = map_widget::register_marker_clicks(|handle| {
            MARKER_INDEX.with(|slot| {
                if let Some(index) = slot.borrow().as_ref() {
                    handle_marker_click(
                        index,
                        MarkerId(handle as u64),
                        &DomForm,
                        &mut WindowNavigator,
                    );
                }
            });
        });
        MARKER_CLICKS.with(|slot| *slot.borrow_mut() = Some(clicks));

        drain_to_console(&mut diag);
    });
}

/// Wires the search form's submit event to one submission cycle per event.
#[wasm_bindgen]
pub fn init_search() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(form) = document.get_element_by_id("searchForm") else {
        return;
    };

    let attached = ListenerHandle::attach(form.into(), "submit", |event| {
        event.prevent_default();
        spawn_local(async {
            let mut nav = WindowNavigator;
            let mut notices = AlertNotices;
            let mut diag = DiagnosticsLog::new();
            let _ = run_search(&DomForm, &GlooHttp, &mut nav, &mut notices, &mut diag).await;
            drain_to_console(&mut diag);
        });
    });

    match attached {
        Ok(handle) => SUBMIT_HANDLER.with(|slot| {
            if let Some(old) = slot.borrow_mut().replace(handle) {
                old.detach();
            }
        }),
        Err(err) => console_error(&format!("failed to wire the search form: {err:?}")),
    }
}
