//! # Details View
//!
//! Everything known about one country, grouped into sections:
//!
//! ```text
//! ┌ 🇫🇷 France ─────────────────────┐
//! │ Basic Information               │
//! │   Name        France            │
//! │   ...                           │
//! │ Location                        │
//! │ Languages (1)                   │
//! │ Currency                        │
//! │ Phone                           │
//! │ Technical                       │
//! └─────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::{DetailsIntent, DetailsState};
use crate::domain::Country;
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Default)]
pub struct DetailsViewState {
    pub scroll: u16,
}

impl DetailsViewState {
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailsIntent> {
        match event {
            TuiEvent::Escape => Some(DetailsIntent::GoBack),
            TuiEvent::InputChar('r') | TuiEvent::Retry => Some(DetailsIntent::Retry),
            TuiEvent::CursorUp => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            TuiEvent::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                None
            }
            TuiEvent::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                None
            }
            _ => None,
        }
    }
}

pub struct DetailsView<'a> {
    details: &'a DetailsState,
    view: &'a mut DetailsViewState,
}

impl<'a> DetailsView<'a> {
    pub fn new(details: &'a DetailsState, view: &'a mut DetailsViewState) -> Self {
        Self { details, view }
    }
}

impl Component for DetailsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(country) = &self.details.country else {
            let (text, style) = if self.details.is_loading {
                (
                    format!("Loading details for {}...", self.details.country_code),
                    Style::default().fg(Color::Yellow),
                )
            } else if let Some(error) = &self.details.error {
                (
                    format!("{error}\n\nPress r to retry or Esc to go back"),
                    Style::default().fg(Color::Red),
                )
            } else {
                (String::new(), Style::default())
            };
            let paragraph = Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title(format!(" {} ", self.details.country_code)));
            frame.render_widget(paragraph, area);
            return;
        };

        let mut lines = Vec::new();
        if let Some(error) = &self.details.error {
            lines.push(Line::from(Span::styled(
                format!("{error} (press r to retry)"),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::default());
        }
        lines.extend(country_lines(country));

        // Keep the last line reachable but never scroll past it.
        let max_scroll = (lines.len() as u16).saturating_sub(area.height.saturating_sub(2));
        self.view.scroll = self.view.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .scroll((self.view.scroll, 0))
            .block(Block::bordered().title(format!(" {} ", country.display_name())));
        frame.render_widget(paragraph, area);
    }
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn field<S: AsRef<str>>(label: &str, value: Option<S>) -> Line<'static> {
    let value = value
        .as_ref()
        .map(AsRef::<str>::as_ref)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(NOT_AVAILABLE);
    Line::from(vec![
        Span::styled(
            format!("  {label:<14}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value.to_string()),
    ])
}

fn country_lines(country: &Country) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Basic Information"),
        field("Name", Some(&country.name)),
        field("Native name", country.native.as_deref()),
        field("Code", Some(&country.code)),
        field("Flag", Some(&country.emoji)),
        field(
            "Capital",
            country.capital.as_deref().filter(|_| country.has_capital()),
        ),
        Line::default(),
        section("Location"),
        field("Continent", Some(&country.continent.name)),
        field("Continent code", Some(&country.continent.code)),
        Line::default(),
        section(&format!("Languages ({})", country.language_count())),
    ];

    if country.languages.is_empty() {
        lines.push(field("Languages", None::<&str>));
    }
    for language in &country.languages {
        let mut value = language.name.clone();
        if let Some(native) = language.native.as_deref().filter(|n| *n != language.name) {
            value.push_str(&format!(" ({native})"));
        }
        if language.rtl {
            value.push_str(" [RTL]");
        }
        lines.push(field(&language.code, Some(&value)));
    }

    let all_currencies = country.currencies.join(", ");
    let all_phones = country.phones.join(", ");
    lines.extend([
        Line::default(),
        section("Currency"),
        field("Primary", country.primary_currency()),
        field("All", Some(&all_currencies)),
        Line::default(),
        section("Phone"),
        field(
            "Country code",
            country.primary_phone().map(|p| format!("+{p}")),
        ),
        field("All", Some(&all_phones)),
        Line::default(),
        section("Technical"),
        field("ISO code", Some(&country.code)),
        field("Emoji code", country.emoji_u.as_deref()),
        field("AWS region", country.aws_region.as_deref()),
    ]);
    lines
}
