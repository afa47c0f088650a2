//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the active
//! screen, and translates keyboard events into store intents.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Busy** (a store has a fetch in flight): draws every ~80ms so the
//!   spinner turns and finished fetches show up promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resizes or when
//!   draining the stores changed something.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::time::{Duration, Instant};

use crate::core::{Child, Configuration, RootIntent, RootStore};
use crate::tui::components::{
    CountriesViewEvent, CountriesViewState, DetailsViewState, SearchViewState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the stores)
#[derive(Debug, Default)]
pub struct TuiState {
    pub countries: CountriesViewState,
    pub details: DetailsViewState,
    pub search: SearchViewState,
}

/// Whether the loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run(mut root: RootStore) -> std::io::Result<()> {
    let mut tui = TuiState::default();
    let mut terminal = ratatui::init();

    let result = event_loop(&mut terminal, &mut root, &mut tui);

    ratatui::restore();
    info!("Atlas shutting down");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    root: &mut RootStore,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if root.drain() {
            needs_redraw = true;
        }
        let busy = root.is_busy();
        if busy {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, root, tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while fetching, long when idle
        let timeout = if busy {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };

        // Process first event + drain ALL pending events before next draw
        let mut next = poll_event_timeout(timeout)?;
        while let Some(event) = next {
            needs_redraw = true;
            if handle_event(root, tui, event) == Flow::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Routes one event to the active screen and applies what it asks for.
pub fn handle_event(root: &mut RootStore, tui: &mut TuiState, event: TuiEvent) -> Flow {
    match event {
        TuiEvent::ForceQuit => return Flow::Quit,
        TuiEvent::Resize => return Flow::Continue,
        _ => {}
    }

    let depth = root.depth();
    let flow = match &root.active().child {
        Child::Countries(store) => match tui.countries.handle_event(&event, store.state()) {
            Some(CountriesViewEvent::Intent(intent)) => {
                root.countries_intent(intent);
                Flow::Continue
            }
            Some(CountriesViewEvent::OpenSearch) => {
                root.on_intent(RootIntent::OpenSearch);
                Flow::Continue
            }
            Some(CountriesViewEvent::Quit) => {
                if root.on_intent(RootIntent::GoBack) {
                    Flow::Continue
                } else {
                    Flow::Quit
                }
            }
            None => Flow::Continue,
        },
        Child::Details(_) => {
            if let Some(intent) = tui.details.handle_event(&event) {
                root.details_intent(intent);
            }
            Flow::Continue
        }
        Child::Search(store) => {
            if let Some(intent) = tui.search.handle_event(&event, store.state()) {
                root.search_intent(intent);
            }
            Flow::Continue
        }
    };

    // A freshly pushed screen starts at the top.
    if root.depth() > depth {
        debug!("Entered {:?}", root.active().configuration);
        match root.active().configuration {
            Configuration::Details { .. } => tui.details = DetailsViewState::default(),
            Configuration::Search => tui.search = SearchViewState::default(),
            Configuration::Countries => {}
        }
    }
    flow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UseCases;
    use crate::test_support::MockRepository;
    use std::sync::Arc;

    fn setup() -> (RootStore, TuiState) {
        let root = RootStore::new(UseCases::new(Arc::new(MockRepository::default())));
        (root, TuiState::default())
    }

    #[tokio::test]
    async fn test_escape_on_home_screen_quits() {
        let (mut root, mut tui) = setup();
        assert_eq!(
            handle_event(&mut root, &mut tui, TuiEvent::Escape),
            Flow::Quit
        );
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_from_any_screen() {
        let (mut root, mut tui) = setup();
        handle_event(&mut root, &mut tui, TuiEvent::InputChar('/'));
        assert_eq!(
            handle_event(&mut root, &mut tui, TuiEvent::ForceQuit),
            Flow::Quit
        );
    }

    #[tokio::test]
    async fn test_enter_opens_details_and_escape_returns() {
        let (mut root, mut tui) = setup();
        root.settle().await;

        handle_event(&mut root, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut root, &mut tui, TuiEvent::Submit);
        assert!(matches!(
            root.active().configuration,
            Configuration::Details { .. }
        ));

        assert_eq!(
            handle_event(&mut root, &mut tui, TuiEvent::Escape),
            Flow::Continue
        );
        assert_eq!(root.configurations(), vec![Configuration::Countries]);
    }

    #[tokio::test]
    async fn test_letters_on_search_screen_are_text() {
        let (mut root, mut tui) = setup();
        handle_event(&mut root, &mut tui, TuiEvent::InputChar('/'));
        handle_event(&mut root, &mut tui, TuiEvent::InputChar('q'));
        handle_event(&mut root, &mut tui, TuiEvent::InputChar('r'));

        match &root.active().child {
            Child::Search(store) => assert_eq!(store.state().query, "qr"),
            _ => panic!("expected search screen"),
        }
    }
}
