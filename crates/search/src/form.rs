use std::collections::BTreeMap;

use crate::filters::SearchFilters;

/// Filter-control names the builder reads.
pub mod controls {
    pub const QUERY: &str = "query";
    pub const IS_OPEN: &str = "is_open";
    pub const HAS_WATER: &str = "has_water";
    pub const HAS_RESTROOMS: &str = "has_restrooms";
    pub const FOREST: &str = "forest";
    pub const START: &str = "start";
    pub const END: &str = "end";
}

/// Minimal "read named field" capability over the filter panel.
///
/// The builder is written against this seam instead of a widget tree so it
/// can be exercised with a synthetic form in tests; the browser app supplies
/// a DOM-backed implementation.
pub trait FormRead {
    fn value(&self, name: &str) -> Option<String>;
    fn checked(&self, name: &str) -> bool;
}

/// Synthetic form state for tests and headless callers.
#[derive(Debug, Default, Clone)]
pub struct InMemoryForm {
    values: BTreeMap<String, String>,
    checked: BTreeMap<String, bool>,
}

impl InMemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_checked(mut self, name: &str, checked: bool) -> Self {
        self.checked.insert(name.to_string(), checked);
        self
    }
}

impl FormRead for InMemoryForm {
    fn value(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn checked(&self, name: &str) -> bool {
        self.checked.get(name).copied().unwrap_or(false)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Pure transform from current control state to a normalized query.
///
/// The free-text query is trimmed; every unset/empty control is omitted.
/// Deterministic: identical form state yields identical filters.
pub fn build_filters(form: &impl FormRead) -> SearchFilters {
    let query = form
        .value(controls::QUERY)
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty());

    SearchFilters {
        query,
        is_open: form.checked(controls::IS_OPEN),
        has_water: form.checked(controls::HAS_WATER),
        has_restrooms: form.checked(controls::HAS_RESTROOMS),
        forest: non_empty(form.value(controls::FOREST)),
        start: non_empty(form.value(controls::START)),
        end: non_empty(form.value(controls::END)),
    }
}
