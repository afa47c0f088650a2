//! # Domain
//!
//! What the app knows about countries, independent of where the data comes
//! from or how it is shown. No I/O happens here; the repository is a trait.

pub mod error;
pub mod model;
pub mod repository;
pub mod usecase;

pub use error::{CountryError, ErrorKind};
pub use model::{Continent, Country, Language};
pub use repository::CountryRepository;
pub use usecase::{GetCountries, GetCountryDetails, SearchCountries, UseCases};
