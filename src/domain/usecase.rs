//! # Use Cases
//!
//! One struct per application operation. Each validates its input, calls the
//! repository and wraps repository failures with context. Validation errors
//! are returned as-is and never reach the repository.
//!
//! Use cases are plain async functions: the stores run them inside spawned
//! tokio tasks (the background context) and hand the result back to the
//! store's owner through its message channel.

use std::sync::Arc;

use log::{debug, warn};

use super::error::CountryError;
use super::model::Country;
use super::repository::CountryRepository;

/// Shortest accepted search query, in characters, after trimming.
pub const MIN_QUERY_LENGTH: usize = 2;
/// Longest accepted search query, in characters, after trimming.
pub const MAX_QUERY_LENGTH: usize = 50;

#[derive(Clone)]
pub struct GetCountries {
    repository: Arc<dyn CountryRepository>,
}

impl GetCountries {
    pub fn new(repository: Arc<dyn CountryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Country>, CountryError> {
        let countries = self
            .repository
            .get_countries()
            .await
            .map_err(|e| e.context("Failed to retrieve countries"))?;
        debug!("GetCountries returned {} countries", countries.len());
        Ok(countries)
    }
}

#[derive(Clone)]
pub struct GetCountryDetails {
    repository: Arc<dyn CountryRepository>,
}

impl GetCountryDetails {
    pub fn new(repository: Arc<dyn CountryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, country_code: &str) -> Result<Country, CountryError> {
        let code = normalize_country_code(country_code)?;
        self.repository
            .get_country_details(&code)
            .await
            .map_err(|e| {
                e.context(format!(
                    "Failed to retrieve country details for '{country_code}'"
                ))
            })
    }
}

/// Trims and uppercases a country code, rejecting anything that is not
/// 2-3 letters.
pub fn normalize_country_code(country_code: &str) -> Result<String, CountryError> {
    if country_code.trim().is_empty() {
        warn!("Rejected blank country code");
        return Err(CountryError::Validation(
            "Country code cannot be blank or empty".to_string(),
        ));
    }

    let code = country_code.trim().to_uppercase();
    let length = code.chars().count();
    if !(2..=3).contains(&length) || !code.chars().all(char::is_alphabetic) {
        warn!("Rejected malformed country code '{country_code}'");
        return Err(CountryError::Validation(format!(
            "Invalid country code format: '{country_code}'. \
             Expected 2-3 letter country code (e.g., 'US', 'CA', 'FR')"
        )));
    }
    Ok(code)
}

#[derive(Clone)]
pub struct SearchCountries {
    repository: Arc<dyn CountryRepository>,
}

impl SearchCountries {
    pub fn new(repository: Arc<dyn CountryRepository>) -> Self {
        Self { repository }
    }

    /// Blank queries succeed with no results without touching the repository.
    pub async fn execute(&self, query: &str) -> Result<Vec<Country>, CountryError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }

        let length = trimmed.chars().count();
        if length < MIN_QUERY_LENGTH {
            warn!("Rejected short search query '{query}'");
            return Err(CountryError::Validation(format!(
                "Search query must be at least {MIN_QUERY_LENGTH} characters long. \
                 Current query: '{query}' ({length} characters)"
            )));
        }
        if length > MAX_QUERY_LENGTH {
            warn!("Rejected long search query ({length} characters)");
            return Err(CountryError::Validation(format!(
                "Search query is too long. Maximum allowed length is {MAX_QUERY_LENGTH} characters. \
                 Current query length: {length} characters"
            )));
        }

        self.repository
            .search_countries(trimmed)
            .await
            .map_err(|e| e.context(format!("Failed to search countries with query '{query}'")))
    }
}

/// The three use cases over one repository, constructed once and handed to
/// the root store. Cloning shares the repository.
#[derive(Clone)]
pub struct UseCases {
    pub get_countries: GetCountries,
    pub get_country_details: GetCountryDetails,
    pub search_countries: SearchCountries,
}

impl UseCases {
    pub fn new(repository: Arc<dyn CountryRepository>) -> Self {
        Self {
            get_countries: GetCountries::new(repository.clone()),
            get_country_details: GetCountryDetails::new(repository.clone()),
            search_countries: SearchCountries::new(repository),
        }
    }
}
