use std::cell::RefCell;

use prefs::{
    EffectiveTheme, LocalStoragePreferenceStore, THEME_STORAGE_KEY, ThemeController, ThemeMode,
    ThemeSink,
};
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

use crate::dom::ListenerHandle;

const TOGGLE_BUTTON_SELECTOR: &str = ".theme-toggle-btn";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

thread_local! {
    static THEME: RefCell<Option<ThemeController<LocalStoragePreferenceStore, DomThemeSink>>> =
        const { RefCell::new(None) };
    static SYSTEM_LISTENER: RefCell<Option<ListenerHandle>> = const { RefCell::new(None) };
    static BUTTON_LISTENERS: RefCell<Vec<ListenerHandle>> = const { RefCell::new(Vec::new()) };
}

/// Applies the theme to the document root and highlights the matching
/// toggle button.
pub struct DomThemeSink;

impl ThemeSink for DomThemeSink {
    fn apply(&mut self, mode: ThemeMode, effective: EffectiveTheme) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if let Some(root) = document.document_element() {
            let value = match effective {
                EffectiveTheme::Light => "light",
                EffectiveTheme::Dark => "dark",
            };
            let _ = root.set_attribute("data-theme", value);
        }

        let Ok(buttons) = document.query_selector_all(TOGGLE_BUTTON_SELECTOR) else {
            return;
        };
        for i in 0..buttons.length() {
            let Some(node) = buttons.item(i) else { continue };
            let Ok(el) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let Some(choice) = el.get_attribute("data-theme-choice") else {
                continue;
            };
            let _ = el
                .class_list()
                .toggle_with_force("is-active", choice == mode.as_str());
        }
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .is_some_and(|mql| mql.matches())
}

/// Keeps the OS signal listener registered exactly while the stored
/// preference is `System`.
fn sync_system_listener() {
    let wants = THEME.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|c| c.wants_system_signal())
    });

    SYSTEM_LISTENER.with(|slot| {
        let mut listener = slot.borrow_mut();
        if wants && listener.is_none() {
            *listener = attach_system_listener();
        } else if !wants && let Some(handle) = listener.take() {
            handle.detach();
        }
    });
}

fn attach_system_listener() -> Option<ListenerHandle> {
    let mql = web_sys::window()?.match_media(DARK_SCHEME_QUERY).ok()??;
    let target: EventTarget = mql.into();
    ListenerHandle::attach(target, "change", |event| {
        let Some(change) = event.dyn_ref::<web_sys::MediaQueryListEvent>() else {
            return;
        };
        let is_dark = change.matches();
        THEME.with(|slot| {
            if let Some(controller) = slot.borrow_mut().as_mut() {
                controller.system_signal_changed(is_dark);
            }
        });
    })
    .ok()
}

fn wire_toggle_buttons() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(buttons) = document.query_selector_all(TOGGLE_BUTTON_SELECTOR) else {
        return;
    };

    let mut handles = Vec::new();
    for i in 0..buttons.length() {
        let Some(node) = buttons.item(i) else { continue };
        let Ok(el) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };

        let button = el.clone();
        let attached = ListenerHandle::attach(el.into(), "click", move |_event| {
            let Some(choice) = button.get_attribute("data-theme-choice") else {
                return;
            };
            let mode = ThemeMode::from_stored(&choice);
            THEME.with(|slot| {
                if let Some(controller) = slot.borrow_mut().as_mut() {
                    controller.set_mode(mode);
                }
            });
            sync_system_listener();
        });
        if let Ok(handle) = attached {
            handles.push(handle);
        }
    }

    BUTTON_LISTENERS.with(|slot| {
        let mut listeners = slot.borrow_mut();
        for old in listeners.drain(..) {
            old.detach();
        }
        *listeners = handles;
    });
}

/// Loads and applies the stored preference, then wires the toggle buttons
/// and (while the preference is `System`) the OS dark-mode signal.
pub fn init_theme() {
    let store = LocalStoragePreferenceStore::new(THEME_STORAGE_KEY);
    let mut controller = ThemeController::new(store, DomThemeSink, system_prefers_dark());
    controller.init();
    THEME.with(|slot| *slot.borrow_mut() = Some(controller));

    sync_system_listener();
    wire_toggle_buttons();
}
