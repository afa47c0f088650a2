//! # TUI Components
//!
//! One component per screen plus the pieces they share.
//!
//! Components follow the persistent state + transient wrapper pattern:
//! the `*State` structs live in `TuiState` across frames (selection, scroll)
//! and map keys to store intents; the wrappers are built each frame from
//! borrowed store state and render it.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status bar)
//! ├── country_list.rs    (selectable list, shared)
//! ├── countries_view.rs  (home screen)
//! ├── details_view.rs    (one country)
//! └── search_view.rs     (query field + results)
//! ```

pub mod countries_view;
pub mod country_list;
pub mod details_view;
pub mod search_view;
mod title_bar;

pub use countries_view::{CountriesView, CountriesViewEvent, CountriesViewState};
pub use details_view::{DetailsView, DetailsViewState};
pub use search_view::{SearchView, SearchViewState};
pub use title_bar::TitleBar;
