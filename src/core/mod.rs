//! # Core Application Logic
//!
//! The stores behind each screen and the navigation stack that owns them.
//! Nothing in here knows about the terminal.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │       RootStore         │
//!                    │  (navigation stack)     │
//!                    └───────────┬─────────────┘
//!                                │ owns
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │ Countries  │      │  Details   │      │   Search   │
//!     │   Store    │      │   Store    │      │   Store    │
//!     └─────┬──────┘      └─────┬──────┘      └─────┬──────┘
//!           └───────────────────┼───────────────────┘
//!                               ▼
//!                    StoreCore (state + reducer +
//!                    generation-tagged task messages)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: layered settings (defaults → file → env → CLI)
//! - [`store`]: the generic store runtime every feature store is built on
//! - [`countries`], [`details`], [`search`]: one store per screen
//! - [`navigation`]: the root stack and label routing

pub mod config;
pub mod countries;
pub mod details;
pub mod navigation;
pub mod search;
pub mod store;

pub use countries::{CountriesIntent, CountriesLabel, CountriesState, CountriesStore};
pub use details::{DetailsIntent, DetailsLabel, DetailsState, DetailsStore};
pub use navigation::{Child, Configuration, Entry, RootIntent, RootStore};
pub use search::{SEARCH_DEBOUNCE, SearchIntent, SearchLabel, SearchState, SearchStore};
