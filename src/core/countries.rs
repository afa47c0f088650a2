//! # Countries Store
//!
//! State behind the country list screen.
//!
//! ```text
//! LoadCountries / Retry ──► LoadingStarted { refresh: false } ──► GetCountries ──► Loaded | Failed
//! Refresh               ──► LoadingStarted { refresh: true }  ──► GetCountries ──► Loaded | Failed
//! SelectCountry(code)   ──► label NavigateToDetails(code)
//! ```
//!
//! A failed load keeps whatever list was already shown and only sets `error`.

use log::debug;

use crate::core::store::StoreCore;
use crate::domain::error::user_message;
use crate::domain::{Country, GetCountries};

const DEFAULT_ERROR: &str = "Unknown error occurred";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountriesIntent {
    LoadCountries,
    Refresh,
    Retry,
    SelectCountry(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountriesLabel {
    NavigateToDetails(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountriesState {
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub countries: Vec<Country>,
    pub error: Option<String>,
}

impl CountriesState {
    pub fn has_data(&self) -> bool {
        !self.countries.is_empty()
    }

    /// Nothing to show and nothing pending: not loading, no data, no error.
    pub fn is_empty(&self) -> bool {
        !self.is_loading && !self.has_data() && self.error.is_none()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug)]
enum Msg {
    LoadingStarted { refresh: bool },
    Loaded(Vec<Country>),
    Failed(String),
}

fn reduce(state: &mut CountriesState, msg: Msg) {
    match msg {
        Msg::LoadingStarted { refresh } => {
            state.is_loading = !refresh;
            state.is_refreshing = refresh;
            state.error = None;
        }
        Msg::Loaded(countries) => {
            state.is_loading = false;
            state.is_refreshing = false;
            state.countries = countries;
            state.error = None;
        }
        Msg::Failed(error) => {
            state.is_loading = false;
            state.is_refreshing = false;
            state.error = Some(error);
        }
    }
}

pub struct CountriesStore {
    core: StoreCore<CountriesState, Msg, CountriesLabel>,
    get_countries: GetCountries,
}

impl CountriesStore {
    /// Creates the store in its idle state. Nothing is fetched until
    /// `LoadCountries` is dispatched.
    pub fn new(get_countries: GetCountries) -> Self {
        Self {
            core: StoreCore::new("CountriesStore", CountriesState::default(), reduce),
            get_countries,
        }
    }

    pub fn state(&self) -> &CountriesState {
        self.core.state()
    }

    pub fn on_intent(&mut self, intent: CountriesIntent) {
        debug!("CountriesStore intent: {:?}", intent);
        match intent {
            CountriesIntent::LoadCountries | CountriesIntent::Retry => self.load(false),
            CountriesIntent::Refresh => self.load(true),
            CountriesIntent::SelectCountry(code) => {
                self.core.publish(CountriesLabel::NavigateToDetails(code));
            }
        }
    }

    fn load(&mut self, refresh: bool) {
        self.core.dispatch(Msg::LoadingStarted { refresh });

        let use_case = self.get_countries.clone();
        self.core.launch(move |dispatcher| async move {
            let msg = match use_case.execute().await {
                Ok(countries) => Msg::Loaded(countries),
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

    pub fn take_labels(&mut self) -> Vec<CountriesLabel> {
        self.core.take_labels()
    }
}
