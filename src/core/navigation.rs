//! # Root Navigation
//!
//! A stack of screens. Each entry pairs the configuration that describes the
//! screen with the store that backs it:
//!
//! ```text
//!   ┌────────────────────┐
//!   │ Details { "FR" }   │  ◄── active (top)
//!   ├────────────────────┤
//!   │ Search             │
//!   ├────────────────────┤
//!   │ Countries          │  ◄── root, never popped
//!   └────────────────────┘
//! ```
//!
//! Child stores are created when their entry is pushed and dropped (aborting
//! any running fetch) when it is popped. Navigation labels emitted by the
//! active child are routed after every forwarded intent and every drain.

use log::{debug, info, warn};

use crate::core::countries::{CountriesIntent, CountriesLabel, CountriesStore};
use crate::core::details::{DetailsIntent, DetailsLabel, DetailsStore};
use crate::core::search::{SearchIntent, SearchLabel, SearchStore};
use crate::domain::UseCases;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Configuration {
    Countries,
    Details { country_code: String },
    Search,
}

impl Configuration {
    pub fn title(&self) -> &'static str {
        match self {
            Configuration::Countries => "Countries",
            Configuration::Details { .. } => "Country Details",
            Configuration::Search => "Search Countries",
        }
    }
}

pub enum Child {
    Countries(CountriesStore),
    Details(Box<DetailsStore>),
    Search(SearchStore),
}

impl Child {
    fn drain(&mut self) -> bool {
        match self {
            Child::Countries(store) => store.drain(),
            Child::Details(store) => store.drain(),
            Child::Search(store) => store.drain(),
        }
    }

    async fn settle(&mut self) -> bool {
        match self {
            Child::Countries(store) => store.settle().await,
            Child::Details(store) => store.settle().await,
            Child::Search(store) => store.settle().await,
        }
    }

    fn is_busy(&self) -> bool {
        match self {
            Child::Countries(store) => store.is_busy(),
            Child::Details(store) => store.is_busy(),
            Child::Search(store) => store.is_busy(),
        }
    }
}

pub struct Entry {
    pub configuration: Configuration,
    pub child: Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootIntent {
    OpenSearch,
    GoBack,
    OpenDetails(String),
}

/// What the root should do after reading a child's labels.
enum Route {
    Push(Configuration),
    Pop,
}

pub struct RootStore {
    use_cases: UseCases,
    stack: Vec<Entry>,
}

impl RootStore {
    /// Starts on the Countries screen and kicks off its first load.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(use_cases: UseCases) -> Self {
        let mut root = Self {
            use_cases,
            stack: Vec::new(),
        };
        root.push(Configuration::Countries);
        root
    }

    pub fn stack(&self) -> &[Entry] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The topmost entry.
    pub fn active(&self) -> &Entry {
        // The root entry is pushed in `new` and never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn configurations(&self) -> Vec<Configuration> {
        self.stack.iter().map(|e| e.configuration.clone()).collect()
    }

    /// Applies a navigation intent. Returns `false` only for `GoBack` on the
    /// root screen, which leaves the stack untouched.
    pub fn on_intent(&mut self, intent: RootIntent) -> bool {
        info!("RootStore intent: {:?}", intent);
        match intent {
            RootIntent::OpenSearch => {
                self.push(Configuration::Search);
                true
            }
            RootIntent::OpenDetails(country_code) => {
                self.push(Configuration::Details { country_code });
                true
            }
            RootIntent::GoBack => self.pop(),
        }
    }

    pub fn countries_intent(&mut self, intent: CountriesIntent) {
        match self.active_child_mut() {
            Child::Countries(store) => store.on_intent(intent),
            _ => {
                warn!("Dropping {:?}: Countries is not the active screen", intent);
                return;
            }
        }
        self.route_labels();
    }

    pub fn details_intent(&mut self, intent: DetailsIntent) {
        match self.active_child_mut() {
            Child::Details(store) => store.on_intent(intent),
            _ => {
                warn!("Dropping {:?}: Details is not the active screen", intent);
                return;
            }
        }
        self.route_labels();
    }

    pub fn search_intent(&mut self, intent: SearchIntent) {
        match self.active_child_mut() {
            Child::Search(store) => store.on_intent(intent),
            _ => {
                warn!("Dropping {:?}: Search is not the active screen", intent);
                return;
            }
        }
        self.route_labels();
    }

    /// Drains every stacked store, covered ones included, then routes labels.
    /// Returns `true` if any state changed.
    pub fn drain(&mut self) -> bool {
        let mut changed = false;
        for entry in &mut self.stack {
            changed |= entry.child.drain();
        }
        changed | self.route_labels()
    }

    /// Waits for every stacked store's in-flight work, then routes labels.
    pub async fn settle(&mut self) -> bool {
        let mut changed = false;
        for entry in &mut self.stack {
            changed |= entry.child.settle().await;
        }
        changed | self.route_labels()
    }

    pub fn is_busy(&self) -> bool {
        self.stack.iter().any(|e| e.child.is_busy())
    }

    // ========================================================================
    // Stack operations
    // ========================================================================

    fn active_child_mut(&mut self) -> &mut Child {
        let top = self.stack.len() - 1;
        &mut self.stack[top].child
    }

    fn push(&mut self, configuration: Configuration) {
        let child = match &configuration {
            Configuration::Countries => {
                let mut store = CountriesStore::new(self.use_cases.get_countries.clone());
                store.on_intent(CountriesIntent::LoadCountries);
                Child::Countries(store)
            }
            Configuration::Details { country_code } => {
                Child::Details(Box::new(DetailsStore::new(
                    country_code.clone(),
                    self.use_cases.get_country_details.clone(),
                )))
            }
            Configuration::Search => {
                Child::Search(SearchStore::new(self.use_cases.search_countries.clone()))
            }
        };
        debug!(
            "Pushing {:?} (depth {})",
            configuration, self.stack.len() + 1
        );
        self.stack.push(Entry {
            configuration,
            child,
        });
    }

    fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            debug!("GoBack on root screen ignored");
            return false;
        }
        if let Some(entry) = self.stack.pop() {
            debug!(
                "Popped {:?} (depth {})",
                entry.configuration, self.stack.len()
            );
        }
        true
    }

    /// Consumes the active child's labels and applies them. Returns `true`
    /// if the stack changed.
    fn route_labels(&mut self) -> bool {
        let routes: Vec<Route> = match self.active_child_mut() {
            Child::Countries(store) => store
                .take_labels()
                .into_iter()
                .map(|label| match label {
                    CountriesLabel::NavigateToDetails(code) => {
                        Route::Push(Configuration::Details { country_code: code })
                    }
                })
                .collect(),
            Child::Details(store) => store
                .take_labels()
                .into_iter()
                .map(|label| match label {
                    DetailsLabel::NavigateBack => Route::Pop,
                })
                .collect(),
            Child::Search(store) => store
                .take_labels()
                .into_iter()
                .map(|label| match label {
                    SearchLabel::NavigateToDetails(code) => {
                        Route::Push(Configuration::Details { country_code: code })
                    }
                    SearchLabel::NavigateBack => Route::Pop,
                })
                .collect(),
        };

        let changed = !routes.is_empty();
        for route in routes {
            match route {
                Route::Push(configuration) => self.push(configuration),
                Route::Pop => {
                    self.pop();
                }
            }
        }
        changed
    }
}
