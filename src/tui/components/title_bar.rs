//! # TitleBar Component
//!
//! Top status bar: screen name, app version and a transient status.
//!
//! Stateless: all three props come from the caller, so the bar renders the
//! same thing for the same input.
//!
//! ```text
//! Atlas v0.1.0 | Countries | ⠋ Loading...
//! Atlas v0.1.0 | Country Details
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Title of the active screen (e.g., "Countries")
    pub screen: String,
    /// Status message (e.g., "Loading..."), empty when idle
    pub status_message: String,
    /// Whether the status is an error, shown in red
    pub is_error: bool,
}

impl TitleBar {
    pub fn new(
        screen: impl Into<String>,
        status_message: impl Into<String>,
        is_error: bool,
    ) -> Self {
        Self {
            screen: screen.into(),
            status_message: status_message.into(),
            is_error,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!("Atlas v{}", env!("CARGO_PKG_VERSION")),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::raw(self.screen.clone()),
        ];

        if !self.status_message.is_empty() {
            let status_style = if self.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status_message.clone(), status_style));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Countries", "Loading...", false);
        let text = rendered(&mut title_bar);

        assert!(text.contains("Atlas v"));
        assert!(text.contains("Countries"));
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let mut title_bar = TitleBar::new("Search Countries", "", false);
        let text = rendered(&mut title_bar);

        assert!(text.contains("Search Countries"));
        assert_eq!(text.matches('|').count(), 1);
    }
}
