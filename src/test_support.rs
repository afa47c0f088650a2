//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Continent, Country, CountryError, CountryRepository, ErrorKind, Language};

type Outcome<T> = Result<T, (ErrorKind, String)>;

fn to_error((kind, message): (ErrorKind, String)) -> CountryError {
    match kind {
        ErrorKind::Validation => CountryError::Validation(message),
        ErrorKind::NotFound => CountryError::NotFound(message),
        ErrorKind::Network => CountryError::Network(message),
        ErrorKind::Protocol => CountryError::Protocol(message),
        ErrorKind::Unknown => CountryError::Unknown(message),
    }
}

struct Inner {
    countries: Outcome<Vec<Country>>,
    details: Outcome<Country>,
    search: Outcome<Vec<Country>>,
    get_countries_calls: usize,
    details_calls: Vec<String>,
    search_calls: Vec<String>,
}

/// In-memory repository with configurable responses that records every call.
///
/// Defaults: countries = US, CA, FR; details = US; search = empty.
pub struct MockRepository {
    inner: Mutex<Inner>,
    latency: Option<Duration>,
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                countries: Ok(test_countries()),
                details: Ok(country_us()),
                search: Ok(Vec::new()),
                get_countries_calls: 0,
                details_calls: Vec::new(),
                search_calls: Vec::new(),
            }),
            latency: None,
        }
    }

    /// Every call sleeps for `latency` (tokio time) before answering.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::new()
        }
    }

    pub fn set_countries(&self, countries: Vec<Country>) {
        self.inner.lock().unwrap().countries = Ok(countries);
    }

    pub fn fail_countries(&self, kind: ErrorKind, message: &str) {
        self.inner.lock().unwrap().countries = Err((kind, message.to_string()));
    }

    pub fn set_details(&self, country: Country) {
        self.inner.lock().unwrap().details = Ok(country);
    }

    pub fn fail_details(&self, kind: ErrorKind, message: &str) {
        self.inner.lock().unwrap().details = Err((kind, message.to_string()));
    }

    pub fn set_search(&self, countries: Vec<Country>) {
        self.inner.lock().unwrap().search = Ok(countries);
    }

    pub fn fail_search(&self, kind: ErrorKind, message: &str) {
        self.inner.lock().unwrap().search = Err((kind, message.to_string()));
    }

    pub fn get_countries_calls(&self) -> usize {
        self.inner.lock().unwrap().get_countries_calls
    }

    pub fn details_calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().details_calls.clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().search_calls.clone()
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl CountryRepository for MockRepository {
    async fn get_countries(&self) -> Result<Vec<Country>, CountryError> {
        let outcome = {
            let mut inner = self.inner.lock().unwrap();
            inner.get_countries_calls += 1;
            inner.countries.clone()
        };
        self.delay().await;
        outcome.map_err(to_error)
    }

    async fn get_country_details(&self, code: &str) -> Result<Country, CountryError> {
        let outcome = {
            let mut inner = self.inner.lock().unwrap();
            inner.details_calls.push(code.to_string());
            inner.details.clone()
        };
        self.delay().await;
        outcome.map_err(to_error)
    }

    async fn search_countries(&self, query: &str) -> Result<Vec<Country>, CountryError> {
        let outcome = {
            let mut inner = self.inner.lock().unwrap();
            inner.search_calls.push(query.to_string());
            inner.search.clone()
        };
        self.delay().await;
        outcome.map_err(to_error)
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn north_america() -> Continent {
    Continent::new("NA", "North America")
}

fn europe() -> Continent {
    Continent::new("EU", "Europe")
}

pub fn country_us() -> Country {
    Country {
        code: "US".to_string(),
        name: "United States".to_string(),
        capital: Some("Washington D.C.".to_string()),
        emoji: "🇺🇸".to_string(),
        emoji_u: Some("U+1F1FA U+1F1F8".to_string()),
        currency: Some("USD".to_string()),
        currencies: vec!["USD".to_string()],
        phone: Some("1".to_string()),
        phones: vec!["1".to_string()],
        native: Some("United States".to_string()),
        continent: north_america(),
        languages: vec![Language::new("en", "English")],
        aws_region: Some("us-east-1".to_string()),
    }
}

pub fn country_ca() -> Country {
    Country {
        code: "CA".to_string(),
        name: "Canada".to_string(),
        capital: Some("Ottawa".to_string()),
        emoji: "🇨🇦".to_string(),
        emoji_u: Some("U+1F1E8 U+1F1E6".to_string()),
        currency: Some("CAD".to_string()),
        currencies: vec!["CAD".to_string()],
        phone: Some("1".to_string()),
        phones: vec!["1".to_string()],
        native: Some("Canada".to_string()),
        continent: north_america(),
        languages: vec![Language::new("en", "English"), Language::new("fr", "French")],
        aws_region: Some("ca-central-1".to_string()),
    }
}

pub fn country_fr() -> Country {
    Country {
        code: "FR".to_string(),
        name: "France".to_string(),
        capital: Some("Paris".to_string()),
        emoji: "🇫🇷".to_string(),
        emoji_u: Some("U+1F1EB U+1F1F7".to_string()),
        currency: Some("EUR".to_string()),
        currencies: vec!["EUR".to_string()],
        phone: Some("33".to_string()),
        phones: vec!["33".to_string()],
        native: Some("France".to_string()),
        continent: europe(),
        languages: vec![Language::new("fr", "French")],
        aws_region: Some("eu-west-3".to_string()),
    }
}

pub fn country_gb() -> Country {
    Country {
        code: "GB".to_string(),
        name: "United Kingdom".to_string(),
        capital: Some("London".to_string()),
        emoji: "🇬🇧".to_string(),
        emoji_u: Some("U+1F1EC U+1F1E7".to_string()),
        currency: Some("GBP".to_string()),
        currencies: vec!["GBP".to_string()],
        phone: Some("44".to_string()),
        phones: vec!["44".to_string()],
        native: Some("United Kingdom".to_string()),
        continent: europe(),
        languages: vec![Language::new("en", "English")],
        aws_region: Some("eu-west-2".to_string()),
    }
}

/// US, CA, FR.
pub fn test_countries() -> Vec<Country> {
    vec![country_us(), country_ca(), country_fr()]
}
