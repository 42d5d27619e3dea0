//! Paged list controller.
//!
//! [`PagedListState`] is plain data: page, filter, search text and the rows
//! of the last applied response. Every request it issues carries an id and
//! only the response to the latest one is applied, so a slow answer to an old
//! query can never overwrite a newer page. [`use_paged_loader`] wires the
//! state to a fetch function inside a component.

use std::future::Future;

use contracts::shared::Page;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::http::ApiError;
use super::notifications::{NotificationService, Notify};

/// Status filter with an "everything" sentinel that omits the parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S: Clone> StatusFilter<S> {
    /// Value for the query string, `None` for [`StatusFilter::All`]
    pub fn param(&self) -> Option<S> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(s) => Some(s.clone()),
        }
    }
}

/// Snapshot of what one request asks for
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest<S> {
    pub request_id: u64,
    pub page: u32,
    pub filter: StatusFilter<S>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// Newer request in flight; response dropped
    Stale,
    /// Applied, but the page fell outside the new page count and was clamped
    Clamped,
}

/// Query inputs only; a change here means a new request
#[derive(Debug, Clone, PartialEq)]
pub struct QueryKey<S> {
    page: u32,
    filter: StatusFilter<S>,
    search: String,
    reload: u64,
}

#[derive(Debug, Clone)]
pub struct PagedListState<T, S> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub filter: StatusFilter<S>,
    pub search_text: String,
    pub loading: bool,
    latest_request: u64,
    reload: u64,
}

impl<T, S: Clone + PartialEq> PagedListState<T, S> {
    pub fn new(filter: StatusFilter<S>) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 1,
            total_elements: 0,
            filter,
            search_text: String::new(),
            loading: false,
            latest_request: 0,
            reload: 0,
        }
    }

    pub fn query_key(&self) -> QueryKey<S> {
        QueryKey {
            page: self.page,
            filter: self.filter.clone(),
            search: self.search_text.clone(),
            reload: self.reload,
        }
    }

    /// Starts a request for the current query
    pub fn begin_fetch(&mut self) -> PageRequest<S> {
        self.latest_request += 1;
        self.loading = true;
        let search = self.search_text.trim();
        PageRequest {
            request_id: self.latest_request,
            page: self.page,
            filter: self.filter.clone(),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    pub fn is_latest(&self, request_id: u64) -> bool {
        request_id == self.latest_request
    }

    /// Full page swap, if `request_id` is still the latest
    pub fn apply_page(&mut self, request_id: u64, page: Page<T>) -> FetchOutcome {
        if !self.is_latest(request_id) {
            return FetchOutcome::Stale;
        }
        self.items = page.items;
        self.total_pages = page.info.total_pages.max(1);
        self.total_elements = page.info.total_elements;
        self.loading = false;
        if self.page > self.total_pages {
            self.page = self.total_pages;
            FetchOutcome::Clamped
        } else {
            FetchOutcome::Applied
        }
    }

    /// Clears the rows after a failed request; `false` when the failure is stale
    pub fn apply_error(&mut self, request_id: u64) -> bool {
        if !self.is_latest(request_id) {
            return false;
        }
        self.items.clear();
        self.loading = false;
        true
    }

    pub fn set_filter(&mut self, filter: StatusFilter<S>) -> bool {
        if self.filter == filter {
            return false;
        }
        self.filter = filter;
        self.page = 1;
        true
    }

    pub fn set_search(&mut self, text: &str) -> bool {
        if self.search_text == text {
            return false;
        }
        self.search_text = text.to_string();
        self.page = 1;
        true
    }

    /// Moves to `page`, clamped to `1..=total_pages`
    pub fn go_to_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.total_pages.max(1));
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.go_to_page(self.page.saturating_sub(1))
    }

    /// Re-issues the current query
    pub fn reload(&mut self) {
        self.reload += 1;
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages.max(1))
    }
}

/// Issues `fetch` whenever the list query changes and applies the latest
/// response. Failures clear the table and raise `error_text`.
pub fn use_paged_loader<T, S, F, Fut>(
    state: RwSignal<PagedListState<T, S>>,
    notifier: NotificationService,
    error_text: &'static str,
    fetch: F,
) where
    T: Clone + Send + Sync + 'static,
    S: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(PageRequest<S>) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let query = Memo::new(move |_| state.with(|s| s.query_key()));

    Effect::new(move |_| {
        query.track();
        let Some(request) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let request_id = request.request_id;
        let pending = fetch(request);
        spawn_local(async move {
            let result = pending.await;
            let _ = state.try_update(|s| match result {
                Ok(page) => match s.apply_page(request_id, page) {
                    FetchOutcome::Stale => {
                        log::debug!("dropped stale page response #{}", request_id)
                    }
                    FetchOutcome::Clamped => {
                        log::debug!("page clamped to {} after response #{}", s.page, request_id)
                    }
                    FetchOutcome::Applied => {}
                },
                Err(e) => {
                    if s.apply_error(request_id) {
                        notifier.error(e.user_message(error_text));
                    } else {
                        log::debug!("dropped stale failure #{}: {}", request_id, e);
                    }
                }
            });
        });
    });
}

/// Re-issues the current query each time `token` moves past its first value
pub fn reload_on<T, S>(state: RwSignal<PagedListState<T, S>>, token: impl Fn() -> u64 + 'static)
where
    T: Send + Sync + 'static,
    S: Clone + PartialEq + Send + Sync + 'static,
{
    Effect::new(move |prev: Option<u64>| {
        let current = token();
        if prev.is_some_and(|p| p != current) {
            let _ = state.try_update(|s| s.reload());
        }
        current
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::VerificationStatus;
    use contracts::shared::PageResponse;

    fn page(items: Vec<&'static str>, total_pages: u32, total: u64) -> Page<&'static str> {
        Page {
            items,
            info: PageResponse {
                current_page: 1,
                total_pages,
                total_elements: total,
            },
        }
    }

    fn requested() -> PagedListState<&'static str, VerificationStatus> {
        PagedListState::new(StatusFilter::Only(VerificationStatus::Requested))
    }

    #[test]
    fn applies_first_page_of_requested_consultants() {
        let mut state = requested();
        let req = state.begin_fetch();
        assert_eq!(req.page, 1);
        assert_eq!(req.filter.param(), Some(VerificationStatus::Requested));
        assert_eq!(req.search, None);
        assert!(state.loading);

        assert_eq!(state.apply_page(req.request_id, page(vec!["Acme"], 3, 25)), FetchOutcome::Applied);
        assert_eq!(state.items, vec!["Acme"]);
        assert_eq!(state.page_label(), "Page 1 of 3");
        assert!(state.has_next());
        assert!(!state.has_prev());
        assert!(!state.loading);
    }

    #[test]
    fn only_latest_response_is_applied() {
        let mut state = requested();
        let first = state.begin_fetch();
        state.set_search("acme");
        let second = state.begin_fetch();

        assert_eq!(state.apply_page(second.request_id, page(vec!["new"], 1, 1)), FetchOutcome::Applied);
        assert_eq!(state.apply_page(first.request_id, page(vec!["old"], 5, 50)), FetchOutcome::Stale);
        assert_eq!(state.items, vec!["new"]);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn filter_and_search_reset_to_first_page() {
        let mut state = requested();
        let req = state.begin_fetch();
        state.apply_page(req.request_id, page(vec!["a"], 4, 40));
        assert!(state.go_to_page(3));

        assert!(state.set_filter(StatusFilter::All));
        assert_eq!(state.page, 1);
        let req = state.begin_fetch();
        assert_eq!(req.filter, StatusFilter::All);
        assert_eq!(req.page, 1);

        state.apply_page(req.request_id, page(vec!["a"], 4, 40));
        state.go_to_page(2);
        assert!(state.set_search("pune"));
        assert_eq!(state.page, 1);
        assert!(!state.set_search("pune"));
    }

    #[test]
    fn page_is_clamped_to_known_range() {
        let mut state = requested();
        let req = state.begin_fetch();
        state.apply_page(req.request_id, page(vec!["a"], 3, 25));

        assert!(!state.go_to_page(0));
        assert_eq!(state.page, 1);
        assert!(state.go_to_page(99));
        assert_eq!(state.page, 3);
        assert!(!state.next_page());

        let req = state.begin_fetch();
        assert_eq!(state.apply_page(req.request_id, page(vec![], 2, 12)), FetchOutcome::Clamped);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn failure_clears_rows_unless_stale() {
        let mut state = requested();
        let req = state.begin_fetch();
        state.apply_page(req.request_id, page(vec!["a", "b"], 1, 2));

        let old = state.begin_fetch();
        let new = state.begin_fetch();
        assert!(!state.apply_error(old.request_id));
        assert_eq!(state.items.len(), 2);
        assert!(state.apply_error(new.request_id));
        assert!(state.items.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn blank_search_is_not_sent() {
        let mut state = requested();
        state.set_search("   ");
        assert_eq!(state.begin_fetch().search, None);
        state.set_search(" acme ");
        assert_eq!(state.begin_fetch().search.as_deref(), Some("acme"));
    }

    #[test]
    fn reload_changes_query_key_only() {
        let mut state = requested();
        let before = state.query_key();
        state.begin_fetch();
        assert_eq!(state.query_key(), before);
        state.reload();
        assert_ne!(state.query_key(), before);
    }
}
