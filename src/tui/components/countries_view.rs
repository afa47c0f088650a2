//! # Countries View
//!
//! The home screen: every country, or a loading / error / empty message when
//! there is nothing to list yet.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::{CountriesIntent, CountriesState};
use crate::tui::component::Component;
use crate::tui::components::country_list::{CountryList, CountryListState};
use crate::tui::event::TuiEvent;

/// What a key on the list screen asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountriesViewEvent {
    Intent(CountriesIntent),
    OpenSearch,
    Quit,
}

#[derive(Debug, Default)]
pub struct CountriesViewState {
    pub list: CountryListState,
}

impl CountriesViewState {
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        countries: &CountriesState,
    ) -> Option<CountriesViewEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(CountriesViewEvent::Quit),
            TuiEvent::InputChar('/') => Some(CountriesViewEvent::OpenSearch),
            TuiEvent::InputChar('r') | TuiEvent::Retry => {
                let intent = if countries.has_error() && !countries.has_data() {
                    CountriesIntent::Retry
                } else {
                    CountriesIntent::Refresh
                };
                Some(CountriesViewEvent::Intent(intent))
            }
            _ => self
                .list
                .handle_event(event, &countries.countries)
                .map(|code| CountriesViewEvent::Intent(CountriesIntent::SelectCountry(code))),
        }
    }
}

pub struct CountriesView<'a> {
    countries: &'a CountriesState,
    view: &'a mut CountriesViewState,
}

impl<'a> CountriesView<'a> {
    pub fn new(countries: &'a CountriesState, view: &'a mut CountriesViewState) -> Self {
        Self { countries, view }
    }
}

impl Component for CountriesView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.countries.has_data() {
            let list_area = match &self.countries.error {
                Some(error) => {
                    let [banner, rest] =
                        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
                    frame.render_widget(
                        Paragraph::new(format!("{error} (press r to retry)"))
                            .style(Style::default().fg(Color::Red)),
                        banner,
                    );
                    rest
                }
                None => area,
            };
            CountryList::new(&mut self.view.list, &self.countries.countries, "Countries")
                .render(frame, list_area);
            return;
        }

        let (text, style) = if self.countries.is_loading {
            ("Loading countries...".to_string(), Style::default().fg(Color::Yellow))
        } else if let Some(error) = &self.countries.error {
            (
                format!("{error}\n\nPress r to retry"),
                Style::default().fg(Color::Red),
            )
        } else {
            (
                "No countries found".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        };
        let paragraph = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" Countries "));
        frame.render_widget(paragraph, area);
    }
}
