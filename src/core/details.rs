//! # Details Store
//!
//! State behind the detail screen for one fixed country code. Loads itself
//! once on construction.
//!
//! A failed load or retry sets `error` and leaves a previously loaded
//! `country` in place; only a successful load replaces it.

use log::debug;

use crate::core::store::StoreCore;
use crate::domain::error::user_message;
use crate::domain::{Country, GetCountryDetails};

const DEFAULT_ERROR: &str = "Unknown error occurred";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsIntent {
    LoadDetails,
    Retry,
    GoBack,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsLabel {
    NavigateBack,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsState {
    pub country_code: String,
    pub is_loading: bool,
    pub country: Option<Country>,
    pub error: Option<String>,
}

impl DetailsState {
    pub fn has_data(&self) -> bool {
        self.country.is_some()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug)]
enum Msg {
    LoadingStarted,
    Loaded(Country),
    Failed(String),
}

fn reduce(state: &mut DetailsState, msg: Msg) {
    match msg {
        Msg::LoadingStarted => {
            state.is_loading = true;
            state.error = None;
        }
        Msg::Loaded(country) => {
            state.is_loading = false;
            state.country = Some(country);
            state.error = None;
        }
        Msg::Failed(error) => {
            state.is_loading = false;
            state.error = Some(error);
        }
    }
}

pub struct DetailsStore {
    core: StoreCore<DetailsState, Msg, DetailsLabel>,
    country_code: String,
    get_country_details: GetCountryDetails,
}

impl DetailsStore {
    /// Creates the store and immediately starts loading `country_code`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(country_code: impl Into<String>, get_country_details: GetCountryDetails) -> Self {
        let country_code = country_code.into();
        let initial = DetailsState {
            country_code: country_code.clone(),
            ..Default::default()
        };
        let mut store = Self {
            core: StoreCore::new("DetailsStore", initial, reduce),
            country_code,
            get_country_details,
        };
        store.on_intent(DetailsIntent::LoadDetails);
        store
    }

    pub fn state(&self) -> &DetailsState {
        self.core.state()
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn on_intent(&mut self, intent: DetailsIntent) {
        debug!("DetailsStore[{}] intent: {:?}", self.country_code, intent);
        match intent {
            DetailsIntent::LoadDetails | DetailsIntent::Retry => self.load(),
            DetailsIntent::GoBack => self.core.publish(DetailsLabel::NavigateBack),
        }
    }

    fn load(&mut self) {
        self.core.dispatch(Msg::LoadingStarted);

        let use_case = self.get_country_details.clone();
        let code = self.country_code.clone();
        self.core.launch(move |dispatcher| async move {
            let msg = match use_case.execute(&code).await {
                Ok(country) => Msg::Loaded(country),
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

    pub fn take_labels(&mut self) -> Vec<DetailsLabel> {
        self.core.take_labels()
    }
}
