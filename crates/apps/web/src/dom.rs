use foundation::diag::{DiagnosticsLog, Severity};
use foundation::nav::Navigate;
use maplayer::click::DateRangeRead;
use search::controller::{Notice, NoticeSink};
use search::form::{FormRead, controls};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// Maps a filter-control name to the id of its input element.
fn element_id(name: &str) -> &str {
    match name {
        controls::QUERY => "searchInput",
        controls::START => "start_date",
        controls::END => "end_date",
        other => other,
    }
}

fn input_by_id(id: &str) -> Option<web_sys::HtmlInputElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
}

/// Live view over the filter panel. Values are read from the DOM on every
/// call, never cached, so marker clicks and submissions see current state.
pub struct DomForm;

impl FormRead for DomForm {
    fn value(&self, name: &str) -> Option<String> {
        input_by_id(element_id(name)).map(|input| input.value())
    }

    fn checked(&self, name: &str) -> bool {
        input_by_id(element_id(name)).is_some_and(|input| input.checked())
    }
}

impl DateRangeRead for DomForm {
    fn start(&self) -> Option<String> {
        self.value(controls::START)
    }

    fn end(&self) -> Option<String> {
        self.value(controls::END)
    }
}

/// Client-side redirects through `window.location`.
pub struct WindowNavigator;

impl Navigate for WindowNavigator {
    fn go(&mut self, target: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(target);
        }
    }
}

/// User notices as blocking alerts, matching the page's existing behavior.
pub struct AlertNotices;

impl NoticeSink for AlertNotices {
    fn notify(&mut self, notice: Notice) {
        let message = match notice {
            Notice::NoResults => "No campsites found.",
            Notice::SearchFailed => "Something went wrong.",
        };
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Forwards accumulated diagnostics to the browser console.
pub fn drain_to_console(diag: &mut DiagnosticsLog) {
    for entry in diag.drain() {
        let line = JsValue::from_str(&format!("[{}] {}", entry.kind, entry.message));
        match entry.severity {
            Severity::Warn => web_sys::console::warn_1(&line),
            Severity::Error => web_sys::console::error_1(&line),
        }
    }
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// A registered DOM event handler; dropping or detaching it unregisters the
/// listener and releases the closure.
pub struct ListenerHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerHandle {
    pub fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }

    pub fn detach(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
