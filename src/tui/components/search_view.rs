//! # Search View
//!
//! Query field on top, body below. The body shows one of: the initial
//! prompt, a searching indicator, an error, the "no matches" message, or
//! the result list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::{SearchIntent, SearchState};
use crate::tui::component::Component;
use crate::tui::components::country_list::{CountryList, CountryListState};
use crate::tui::event::TuiEvent;

#[derive(Debug, Default)]
pub struct SearchViewState {
    pub results: CountryListState,
}

impl SearchViewState {
    pub fn handle_event(&mut self, event: &TuiEvent, search: &SearchState) -> Option<SearchIntent> {
        match event {
            TuiEvent::Escape => Some(SearchIntent::GoBack),
            TuiEvent::Retry => Some(SearchIntent::Retry),
            TuiEvent::ClearInput => {
                self.results.reset();
                Some(SearchIntent::ClearSearch)
            }
            TuiEvent::InputChar(c) => {
                self.results.reset();
                let mut query = search.query.clone();
                query.push(*c);
                Some(SearchIntent::SearchQuery(query))
            }
            TuiEvent::Backspace => {
                if search.query.is_empty() {
                    return None;
                }
                self.results.reset();
                let mut query = search.query.clone();
                query.pop();
                Some(SearchIntent::SearchQuery(query))
            }
            _ => self
                .results
                .handle_event(event, &search.results)
                .map(SearchIntent::SelectCountry),
        }
    }
}

pub struct SearchView<'a> {
    search: &'a SearchState,
    view: &'a mut SearchViewState,
}

impl<'a> SearchView<'a> {
    pub fn new(search: &'a SearchState, view: &'a mut SearchViewState) -> Self {
        Self { search, view }
    }
}

impl Component for SearchView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, body_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let input = Paragraph::new(Line::from(vec![
            Span::raw(self.search.query.clone()),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::bordered().title(" Search by name, code or capital "));
        frame.render_widget(input, input_area);

        let message = if self.search.is_loading {
            Some(("Searching...".to_string(), Style::default().fg(Color::Yellow)))
        } else if let Some(error) = &self.search.error {
            Some((
                format!("{error}\n\nCtrl+R to retry"),
                Style::default().fg(Color::Red),
            ))
        } else if self.search.show_initial_state() {
            Some((
                "Type at least 2 characters to search".to_string(),
                Style::default().fg(Color::DarkGray),
            ))
        } else if self.search.show_empty_state() {
            Some((
                format!("No countries match '{}'", self.search.query.trim()),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            None
        };

        match message {
            Some((text, style)) => {
                let paragraph = Paragraph::new(text)
                    .style(style)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(Block::bordered());
                frame.render_widget(paragraph, body_area);
            }
            None => {
                CountryList::new(&mut self.view.results, &self.search.results, "Results")
                    .render(frame, body_area);
            }
        }
    }
}
