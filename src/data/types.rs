//! Wire types for the countries GraphQL schema and their mapping into the
//! domain models.
//!
//! The list query only asks for what the list and search screens show; the
//! detail query asks for everything. Fields the list query omits are filled
//! with defaults by the mapper.

use serde::{Deserialize, Serialize};

use crate::domain::{Continent, Country, Language};

// ============================================================================
// Queries
// ============================================================================

pub const COUNTRIES_QUERY: &str = "\
query Countries {
  countries {
    code
    name
    capital
    emoji
    continent { code name }
    languages { code name }
  }
}";

pub const COUNTRY_QUERY: &str = "\
query Country($code: ID!) {
  country(code: $code) {
    code
    name
    native
    capital
    emoji
    emojiU
    currency
    currencies
    phone
    phones
    awsRegion
    continent { code name }
    languages { code name native rtl }
  }
}";

#[derive(Serialize, Debug)]
pub struct NoVariables {}

#[derive(Serialize, Debug)]
pub struct CountryVariables<'a> {
    pub code: &'a str,
}

// ============================================================================
// Response payloads
// ============================================================================

#[derive(Deserialize, Debug)]
pub struct CountriesData {
    pub countries: Vec<CountryDto>,
}

#[derive(Deserialize, Debug)]
pub struct CountryData {
    pub country: Option<CountryDto>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ContinentDto {
    pub code: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LanguageDto {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub native: Option<String>,
    #[serde(default)]
    pub rtl: Option<bool>,
}

/// One country as returned by either query.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CountryDto {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub capital: Option<String>,
    pub emoji: String,
    #[serde(default)]
    pub emoji_u: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub currencies: Option<Vec<String>>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phones: Option<Vec<String>>,
    #[serde(default)]
    pub native: Option<String>,
    #[serde(default)]
    pub aws_region: Option<String>,
    pub continent: ContinentDto,
    #[serde(default)]
    pub languages: Vec<LanguageDto>,
}

// ============================================================================
// Mapping
// ============================================================================

impl From<ContinentDto> for Continent {
    fn from(dto: ContinentDto) -> Self {
        Continent {
            code: dto.code,
            name: dto.name,
        }
    }
}

impl From<LanguageDto> for Language {
    fn from(dto: LanguageDto) -> Self {
        Language {
            code: dto.code,
            name: dto.name,
            native: dto.native,
            rtl: dto.rtl.unwrap_or(false),
        }
    }
}

impl From<CountryDto> for Country {
    fn from(dto: CountryDto) -> Self {
        Country {
            code: dto.code,
            name: dto.name,
            capital: dto.capital,
            emoji: dto.emoji,
            emoji_u: dto.emoji_u,
            currency: dto.currency,
            currencies: dto.currencies.unwrap_or_default(),
            phone: dto.phone,
            phones: dto.phones.unwrap_or_default(),
            native: dto.native,
            continent: dto.continent.into(),
            languages: dto.languages.into_iter().map(Language::from).collect(),
            aws_region: dto.aws_region,
        }
    }
}
