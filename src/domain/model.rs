//! # Domain Models
//!
//! Immutable value records for what the app displays. These are the types
//! the stores hold; wire DTOs live in `data::types` and are mapped into these.
//!
//! ```text
//! Country
//! ├── code: String               // ISO identifier, identity key
//! ├── name / capital / emoji
//! ├── currency + currencies      // primary + full list
//! ├── phone + phones             // primary + full list
//! ├── continent: Continent       // embedded, never persisted alone
//! └── languages: Vec<Language>
//! ```

/// A continent, embedded in every [`Country`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Continent {
    pub code: String,
    pub name: String,
}

impl Continent {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// An official language of a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
    /// Spelling of the language name in the language itself.
    pub native: Option<String>,
    pub rtl: bool,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            native: None,
            rtl: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub capital: Option<String>,
    pub emoji: String,
    /// Unicode code points of the flag, e.g. `"U+1F1FA U+1F1F8"`.
    pub emoji_u: Option<String>,
    pub currency: Option<String>,
    pub currencies: Vec<String>,
    pub phone: Option<String>,
    pub phones: Vec<String>,
    pub native: Option<String>,
    pub continent: Continent,
    pub languages: Vec<Language>,
    pub aws_region: Option<String>,
}

impl Country {
    /// Flag glyph followed by the name, e.g. `"🇫🇷 France"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }

    /// Explicit currency, falling back to the first of the list.
    pub fn primary_currency(&self) -> Option<&str> {
        self.currency
            .as_deref()
            .or_else(|| self.currencies.first().map(String::as_str))
    }

    /// Explicit phone prefix, falling back to the first of the list.
    pub fn primary_phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .or_else(|| self.phones.first().map(String::as_str))
    }

    pub fn has_capital(&self) -> bool {
        self.capital.as_deref().is_some_and(|c| !c.trim().is_empty())
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn is_in_continent(&self, continent_code: &str) -> bool {
        self.continent.code.eq_ignore_ascii_case(continent_code)
    }
}
