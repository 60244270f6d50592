use feed::point::SiteId;
use foundation::diag::{DiagnosticsLog, Severity};
use foundation::http::HttpFetch;
use foundation::nav::Navigate;
use serde::Deserialize;

use crate::filters::SearchFilters;
use crate::form::{FormRead, build_filters};

/// User-facing notices a submission can raise.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Notice {
    NoResults,
    SearchFailed,
}

pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

/// Test/dry-run sink that records raised notices.
#[derive(Debug, Default)]
pub struct RecordingNotices {
    pub raised: Vec<Notice>,
}

impl NoticeSink for RecordingNotices {
    fn notify(&mut self, notice: Notice) {
        self.raised.push(notice);
    }
}

/// One search-result summary; the wire shape carries at least an id and may
/// carry more, which is ignored here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultSummary {
    pub id: SiteId,
}

/// Where one submission cycle ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    NoMatches,
    SingleMatch(SiteId),
    MultipleMatches(usize),
    Failed,
}

/// Runs one submission cycle: build filters, issue the request, branch on
/// result cardinality.
///
/// - 404 or an empty result set raises [`Notice::NoResults`]; no navigation.
/// - Exactly one match navigates straight to that campsite's detail view,
///   forwarding the query string used for the search.
/// - More than one match navigates to the results listing with the same
///   query string.
/// - A transport or decode failure raises [`Notice::SearchFailed`] and
///   records the detail as a diagnostic.
///
/// No retries, no cancellation, no debouncing: each submission is handled
/// independently and an earlier in-flight request is not aborted.
pub async fn run_search(
    form: &impl FormRead,
    transport: &impl HttpFetch,
    nav: &mut impl Navigate,
    notices: &mut impl NoticeSink,
    diag: &mut DiagnosticsLog,
) -> SearchOutcome {
    let filters = build_filters(form);
    submit_filters(&filters, transport, nav, notices, diag).await
}

/// Same cycle for callers that already hold built filters.
pub async fn submit_filters(
    filters: &SearchFilters,
    transport: &impl HttpFetch,
    nav: &mut impl Navigate,
    notices: &mut impl NoticeSink,
    diag: &mut DiagnosticsLog,
) -> SearchOutcome {
    let qs = filters.to_query_string();
    let url = filters.to_request_url();

    let resp = match transport.get(&url).await {
        Ok(resp) => resp,
        Err(err) => {
            diag.emit(
                Severity::Error,
                "search",
                format!("{url} request failed: {err}"),
            );
            notices.notify(Notice::SearchFailed);
            return SearchOutcome::Failed;
        }
    };

    if resp.is_not_found() {
        notices.notify(Notice::NoResults);
        return SearchOutcome::NoMatches;
    }

    if !resp.is_success() {
        diag.emit(
            Severity::Error,
            "search",
            format!("{url} returned status {}: {}", resp.status, resp.body),
        );
        notices.notify(Notice::SearchFailed);
        return SearchOutcome::Failed;
    }

    let results = match serde_json::from_str::<Vec<ResultSummary>>(&resp.body) {
        Ok(results) => results,
        Err(err) => {
            diag.emit(
                Severity::Error,
                "search",
                format!("{url} returned an undecodable body: {err}"),
            );
            notices.notify(Notice::SearchFailed);
            return SearchOutcome::Failed;
        }
    };

    match results.as_slice() {
        [] => {
            notices.notify(Notice::NoResults);
            SearchOutcome::NoMatches
        }
        [only] => {
            nav.go(&with_query_string(
                &format!("/campsite/{}", only.id),
                &qs,
            ));
            SearchOutcome::SingleMatch(only.id.clone())
        }
        many => {
            nav.go(&with_query_string("/results", &qs));
            SearchOutcome::MultipleMatches(many.len())
        }
    }
}

fn with_query_string(path: &str, qs: &str) -> String {
    if qs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{qs}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Notice, RecordingNotices, SearchOutcome, run_search};
    use crate::form::{InMemoryForm, controls};
    use feed::point::SiteId;
    use foundation::diag::DiagnosticsLog;
    use foundation::http::{HttpFetch, HttpResponse, TransportError};
    use foundation::nav::RecordingNavigator;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct CannedFetch {
        response: Result<HttpResponse, TransportError>,
        requested: RefCell<Vec<String>>,
    }

    impl CannedFetch {
        fn ok(status: u16, body: &str) -> Self {
            Self {
                response: Ok(HttpResponse::new(status, body)),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(TransportError(message.to_string())),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpFetch for CannedFetch {
        async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            self.requested.borrow_mut().push(url.to_string());
            self.response.clone()
        }
    }

    fn pine_form() -> InMemoryForm {
        InMemoryForm::new()
            .with_value(controls::QUERY, "pine")
            .with_value(controls::START, "2024-06-01")
    }

    #[test]
    fn empty_results_raise_no_results_without_navigating() {
        let transport = CannedFetch::ok(200, "[]");
        let mut nav = RecordingNavigator::new();
        let mut notices = RecordingNotices::default();
        let mut diag = DiagnosticsLog::new();

        let outcome = pollster::block_on(run_search(
            &pine_form(),
            &transport,
            &mut nav,
            &mut notices,
            &mut diag,
        ));

        assert_eq!(outcome, SearchOutcome::NoMatches);
        assert_eq!(notices.raised, vec![Notice::NoResults]);
        assert!(nav.targets.is_empty());
        assert!(diag.entries().is_empty());
    }

    #[test]
    fn http_404_is_treated_as_no_results() {
        let transport = CannedFetch::ok(404, "{\"error\": \"not found\"}");
        let mut nav = RecordingNavigator::new();
        let mut notices = RecordingNotices::default();
        let mut diag = DiagnosticsLog::new();

        let outcome = pollster::block_on(run_search(
            &pine_form(),
            &transport,
            &mut nav,
            &mut notices,
            &mut diag,
        ));

        assert_eq!(outcome, SearchOutcome::NoMatches);
        assert_eq!(notices.raised, vec![Notice::NoResults]);
        assert!(nav.targets.is_empty());
    }

    #[test]
    fn single_match_navigates_to_detail_with_the_search_query() {
        let transport = CannedFetch::ok(200, "[{\"id\": 42}]");
        let mut nav = RecordingNavigator::new();
        let mut notices = RecordingNotices::default();
        let mut diag = DiagnosticsLog::new();

        let outcome = pollster::block_on(run_search(
            &pine_form(),
            &transport,
            &mut nav,
            &mut notices,
            &mut diag,
        ));

        assert_eq!(outcome, SearchOutcome::SingleMatch(SiteId::from(42)));
        assert_eq!(
            nav.last(),
            Some("/campsite/42?query=pine&start=2024-06-01")
        );
        assert!(notices.raised.is_empty());
        assert_eq!(
            transport.requested.borrow().as_slice(),
            ["/api/search?query=pine&start=2024-06-01"]
        );
    }

    #[test]
    fn multiple_matches_navigate_to_the_results_listing() {
        let transport = CannedFetch::ok(200, "[{\"id\": 1}, {\"id\": 2}, {\"id\": 3}]");
        let mut nav = RecordingNavigator::new();
        let mut notices = RecordingNotices::default();
        let mut diag = DiagnosticsLog::new();

        let outcome = pollster::block_on(run_search(
            &pine_form(),
            &transport,
            &mut nav,
            &mut notices,
            &mut diag,
        ));

        assert_eq!(outcome, SearchOutcome::MultipleMatches(3));
        assert_eq!(nav.last(), Some("/results?query=pine&start=2024-06-01"));
    }

    #[test]
    fn empty_form_single_match_navigates_without_query_suffix() {
        let transport = CannedFetch::ok(200, "[{\"id\": 5}]");
        let mut nav = RecordingNavigator::new();
        let mut notices = RecordingNotices::default();
        let mut diag = DiagnosticsLog::new();

        let outcome = pollster::block_on(run_search(
            &InMemoryForm::new(),
            &transport,
            &mut nav,
            &mut notices,
            &mut diag,
        ));

        assert_eq!(outcome, SearchOutcome::SingleMatch(SiteId::from(5)));
        assert_eq!(nav.last(), Some("/campsite/5"));
        assert_eq!(transport.requested.borrow().as_slice(), ["/api/search"]);
    }

    #[test]
    fn transport_failure_raises_the_generic_notice() {
        let transport = CannedFetch::failing("network unreachable");
        let mut nav = RecordingNavigator::new();
        let mut notices = RecordingNotices::default();
        let mut diag = DiagnosticsLog::new();

        let outcome = pollster::block_on(run_search(
            &pine_form(),
            &transport,
            &mut nav,
            &mut notices,
            &mut diag,
        ));

        assert_eq!(outcome, SearchOutcome::Failed);
        assert_eq!(notices.raised, vec![Notice::SearchFailed]);
        assert!(nav.targets.is_empty());
        assert_eq!(diag.entries().len(), 1);
        assert!(diag.entries()[0].message.contains("network unreachable"));
    }

    #[test]
    fn undecodable_body_fails_with_a_diagnostic() {
        let transport = CannedFetch::ok(200, "<html>oops</html>");
        let mut nav = RecordingNavigator::new();
        let mut notices = RecordingNotices::default();
        let mut diag = DiagnosticsLog::new();

        let outcome = pollster::block_on(run_search(
            &pine_form(),
            &transport,
            &mut nav,
            &mut notices,
            &mut diag,
        ));

        assert_eq!(outcome, SearchOutcome::Failed);
        assert_eq!(notices.raised, vec![Notice::SearchFailed]);
        assert_eq!(diag.entries().len(), 1);
    }

    #[test]
    fn server_error_status_fails_with_a_diagnostic() {
        let transport = CannedFetch::ok(500, "internal error");
        let mut nav = RecordingNavigator::new();
        let mut notices = RecordingNotices::default();
        let mut diag = DiagnosticsLog::new();

        let outcome = pollster::block_on(run_search(
            &pine_form(),
            &transport,
            &mut nav,
            &mut notices,
            &mut diag,
        ));

        assert_eq!(outcome, SearchOutcome::Failed);
        assert!(diag.entries()[0].message.contains("500"));
    }
}
