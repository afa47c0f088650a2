use async_trait::async_trait;

use super::error::CountryError;
use super::model::Country;

/// Data-access boundary between the use cases and a remote source.
///
/// The production adapter is `data::GraphQlCountryRepository`; tests inject
/// an in-memory double. Implementations are shared across stores behind an
/// `Arc`, so they must be `Send + Sync`.
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// All countries, in the order the source returns them.
    async fn get_countries(&self) -> Result<Vec<Country>, CountryError>;

    /// Full details for one country. `code` is already normalized by the caller.
    async fn get_country_details(&self, code: &str) -> Result<Country, CountryError>;

    /// Countries matching `query` on name, code or capital.
    async fn search_countries(&self, query: &str) -> Result<Vec<Country>, CountryError>;
}
