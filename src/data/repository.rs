use async_trait::async_trait;
use log::{debug, info};

use crate::domain::{Country, CountryError, CountryRepository};

use super::graphql::GraphQlClient;
use super::types::{
    COUNTRIES_QUERY, COUNTRY_QUERY, CountriesData, CountryData, CountryVariables, NoVariables,
};

/// Production [`CountryRepository`] backed by the countries GraphQL endpoint.
///
/// The endpoint has no search operation, so search fetches the full list and
/// filters it locally.
pub struct GraphQlCountryRepository {
    client: GraphQlClient,
}

impl GraphQlCountryRepository {
    pub fn new(client: GraphQlClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CountryRepository for GraphQlCountryRepository {
    async fn get_countries(&self) -> Result<Vec<Country>, CountryError> {
        let data: CountriesData = self.client.execute(COUNTRIES_QUERY, NoVariables {}).await?;
        info!(
            "Fetched {} countries from {}",
            data.countries.len(), self.client.endpoint()
        );
        Ok(data.countries.into_iter().map(Country::from).collect())
    }

    async fn get_country_details(&self, code: &str) -> Result<Country, CountryError> {
        if code.trim().is_empty() {
            return Err(CountryError::Validation(
                "Country code cannot be blank".to_string(),
            ));
        }

        let code = code.to_uppercase();
        let data: CountryData = self
            .client
            .execute(COUNTRY_QUERY, CountryVariables { code: &code })
            .await?;

        data.country
            .map(Country::from)
            .ok_or_else(|| CountryError::NotFound(format!("Country with code '{code}' not found")))
    }

    async fn search_countries(&self, query: &str) -> Result<Vec<Country>, CountryError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let countries = self.get_countries().await?;
        let matches = filter_countries(countries, query);
        debug!("Search '{}' matched {} countries", query, matches.len());
        Ok(matches)
    }
}

/// Keeps countries whose name, code or capital contains `query`,
/// case-insensitively. Order is preserved.
pub fn filter_countries(countries: Vec<Country>, query: &str) -> Vec<Country> {
    let needle = query.to_lowercase();
    countries
        .into_iter()
        .filter(|country| {
            country.name.to_lowercase().contains(&needle)
                || country.code.to_lowercase().contains(&needle)
                || country
                    .capital
                    .as_deref()
                    .is_some_and(|capital| capital.to_lowercase().contains(&needle))
        })
        .collect()
}
