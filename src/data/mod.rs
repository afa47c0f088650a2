//! # Data Layer
//!
//! Everything that talks to the network. Translates between the countries
//! GraphQL schema and the domain models, and implements the domain's
//! [`CountryRepository`](crate::domain::CountryRepository) port.

pub mod graphql;
pub mod repository;
pub mod types;

pub use graphql::GraphQlClient;
pub use repository::GraphQlCountryRepository;
