use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::{Child, RootStore};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountriesView, DetailsView, SearchView, TitleBar};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, root: &RootStore, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let entry = root.active();
    let spinner = SPINNER[spinner_frame % SPINNER.len()];

    let (status, is_error, help) = match &entry.child {
        Child::Countries(store) => {
            let state = store.state();
            CountriesView::new(state, &mut tui.countries).render(frame, main_area);
            let status = if state.is_loading {
                format!("{spinner} Loading...")
            } else if state.is_refreshing {
                format!("{spinner} Refreshing...")
            } else {
                String::new()
            };
            (
                status,
                false,
                " ↑/↓ Move  Enter Details  / Search  r Refresh  Esc/q Quit ",
            )
        }
        Child::Details(store) => {
            let state = store.state();
            DetailsView::new(state, &mut tui.details).render(frame, main_area);
            let status = if state.is_loading {
                format!("{spinner} Loading {}...", state.country_code)
            } else {
                String::new()
            };
            (status, false, " ↑/↓ Scroll  r Retry  Esc Back ")
        }
        Child::Search(store) => {
            let state = store.state();
            SearchView::new(state, &mut tui.search).render(frame, main_area);
            let status = if state.is_searching {
                format!("{spinner} Searching...")
            } else if state.has_error() {
                "Search failed".to_string()
            } else {
                String::new()
            };
            (
                status,
                state.has_error(),
                " Type to search  ↑/↓ Move  Enter Details  Ctrl+U Clear  Ctrl+R Retry  Esc Back ",
            )
        }
    };

    TitleBar::new(entry.configuration.title(), status, is_error).render(frame, title_area);
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
