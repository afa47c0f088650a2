use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may borrow persistent
/// presentation state (`&mut` fields), and render into a `Rect`.
///
/// `render` takes `&mut self` so components can update presentation state
/// such as list selection or scroll offsets while drawing, in the spirit of
/// ratatui's `StatefulWidget`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
