//! # Country List Component
//!
//! Selectable list of countries, shared by the list and search screens.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CountryListState` lives in `TuiState`
//! - `CountryList` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use crate::domain::Country;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

const PAGE_SIZE: usize = 10;

/// Persistent selection for a country list.
#[derive(Debug, Default)]
pub struct CountryListState {
    pub list_state: ListState,
}

impl CountryListState {
    pub fn reset(&mut self) {
        self.list_state = ListState::default();
    }

    /// Selected index, clamped to a list of `len` items.
    pub fn selected(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.list_state.selected().unwrap_or(0).min(len - 1))
    }

    /// Moves the selection. Returns the selected country's code on `Submit`.
    pub fn handle_event(&mut self, event: &TuiEvent, countries: &[Country]) -> Option<String> {
        let len = countries.len();
        if len == 0 {
            return None;
        }
        let current = self.selected(len).unwrap_or(0);
        let next = match event {
            TuiEvent::CursorUp => current.saturating_sub(1),
            TuiEvent::CursorDown => (current + 1).min(len - 1),
            TuiEvent::PageUp => current.saturating_sub(PAGE_SIZE),
            TuiEvent::PageDown => (current + PAGE_SIZE).min(len - 1),
            TuiEvent::Submit => return countries.get(current).map(|c| c.code.clone()),
            _ => return None,
        };
        self.list_state.select(Some(next));
        None
    }
}

/// Transient render wrapper for a list of countries.
pub struct CountryList<'a> {
    state: &'a mut CountryListState,
    countries: &'a [Country],
    title: &'a str,
}

impl<'a> CountryList<'a> {
    pub fn new(state: &'a mut CountryListState, countries: &'a [Country], title: &'a str) -> Self {
        Self {
            state,
            countries,
            title,
        }
    }
}

impl Component for CountryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .countries
            .iter()
            .map(|country| {
                let name =
                    truncate_to_width(&country.display_name(), inner_width.saturating_sub(28));
                let mut spans = vec![
                    Span::styled(
                        format!("{:<4}", country.code),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(name),
                ];
                if let Some(capital) = country
                    .capital
                    .as_deref()
                    .filter(|_| country.has_capital())
                {
                    spans.push(Span::styled(
                        format!("  {capital}"),
                        Style::default().fg(Color::Gray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let selected = self.state.selected(self.countries.len());
        self.state.list_state.select(selected);

        let list = List::new(items)
            .block(Block::bordered().title(format!(" {} ({}) ", self.title, self.countries.len())))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD))
            .highlight_symbol("> ");

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}
