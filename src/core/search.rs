//! # Search Store
//!
//! Debounced search-as-you-type.
//!
//! ```text
//! SearchQuery(q) ─► cancel pending ─► QueryUpdated(q)
//!                                        │
//!                    q blank? ───yes───► Cleared
//!                       │no
//!                       ▼
//!                 sleep(300ms) ─► SearchStarted ─► SearchCountries(q) ─► Succeeded | Failed
//! ```
//!
//! A newer `SearchQuery` aborts the sleeping (or in-flight) task, so only the
//! last query typed within the window reaches the repository. Validation
//! failures from the use case (query too short or too long) are shown as
//! `error` like any other failure.

use std::time::Duration;

use log::debug;

use crate::core::store::StoreCore;
use crate::domain::error::user_message;
use crate::domain::{Country, SearchCountries};

/// Quiet period after the last keystroke before a search is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

const DEFAULT_ERROR: &str = "Search failed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    SearchQuery(String),
    ClearSearch,
    SelectCountry(String),
    Retry,
    GoBack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchLabel {
    NavigateToDetails(String),
    NavigateBack,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Country>,
    pub is_loading: bool,
    pub is_searching: bool,
    pub error: Option<String>,
}

impl SearchState {
    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Nothing typed yet: the screen shows its prompt.
    pub fn show_initial_state(&self) -> bool {
        !self.has_query() && !self.is_loading && !self.has_error()
    }

    /// A query ran and matched nothing.
    pub fn show_empty_state(&self) -> bool {
        self.has_query() && !self.is_loading && !self.has_results() && !self.has_error()
    }
}

#[derive(Debug)]
enum Msg {
    QueryUpdated(String),
    SearchStarted,
    Succeeded(Vec<Country>),
    Failed(String),
    Cleared,
}

fn reduce(state: &mut SearchState, msg: Msg) {
    match msg {
        Msg::QueryUpdated(query) => {
            state.query = query;
            state.error = None;
        }
        Msg::SearchStarted => {
            state.is_loading = true;
            state.is_searching = true;
            state.error = None;
        }
        Msg::Succeeded(results) => {
            state.is_loading = false;
            state.is_searching = false;
            state.results = results;
            state.error = None;
        }
        Msg::Failed(error) => {
            state.is_loading = false;
            state.is_searching = false;
            state.error = Some(error);
        }
        Msg::Cleared => {
            state.results.clear();
            state.is_loading = false;
            state.is_searching = false;
            state.error = None;
        }
    }
}

pub struct SearchStore {
    core: StoreCore<SearchState, Msg, SearchLabel>,
    search_countries: SearchCountries,
    /// Last query typed, kept for `Retry`.
    current_query: String,
}

impl SearchStore {
    pub fn new(search_countries: SearchCountries) -> Self {
        Self {
            core: StoreCore::new("SearchStore", SearchState::default(), reduce),
            search_countries,
            current_query: String::new(),
        }
    }

    pub fn state(&self) -> &SearchState {
        self.core.state()
    }

    pub fn on_intent(&mut self, intent: SearchIntent) {
        debug!("SearchStore intent: {:?}", intent);
        match intent {
            SearchIntent::SearchQuery(query) => self.search_query(query),
            SearchIntent::ClearSearch => self.clear_search(),
            SearchIntent::SelectCountry(code) => {
                self.core.publish(SearchLabel::NavigateToDetails(code));
            }
            SearchIntent::Retry => self.retry(),
            SearchIntent::GoBack => {
                self.core.cancel();
                self.core.publish(SearchLabel::NavigateBack);
            }
        }
    }

    fn search_query(&mut self, query: String) {
        self.core.cancel();
        self.current_query = query.clone();
        self.core.dispatch(Msg::QueryUpdated(query.clone()));

        if query.trim().is_empty() {
            self.core.dispatch(Msg::Cleared);
            return;
        }

        self.perform_search(query, Some(SEARCH_DEBOUNCE));
    }

    fn clear_search(&mut self) {
        self.core.cancel();
        self.current_query.clear();
        self.core.dispatch(Msg::Cleared);
        self.core.dispatch(Msg::QueryUpdated(String::new()));
    }

    fn retry(&mut self) {
        if self.current_query.trim().is_empty() {
            debug!("SearchStore retry ignored: no query");
            return;
        }
        self.perform_search(self.current_query.clone(), None);
    }

    fn perform_search(&mut self, query: String, delay: Option<Duration>) {
        let use_case = self.search_countries.clone();
        self.core.launch(move |dispatcher| async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            dispatcher.dispatch(Msg::SearchStarted);
            let msg = match use_case.execute(&query).await {
                Ok(results) => Msg::Succeeded(results),
                Err(e) => Msg::Failed(user_message(&e, DEFAULT_ERROR)),
            };
            dispatcher.dispatch(msg);
        });
    }

    pub fn drain(&mut self) -> bool {
        self.core.drain()
    }

    pub async fn settle(&mut self) -> bool {
        self.core.settle().await
    }

    pub fn is_busy(&self) -> bool {
        self.core.is_busy()
    }

    pub fn take_labels(&mut self) -> Vec<SearchLabel> {
        self.core.take_labels()
    }
}
