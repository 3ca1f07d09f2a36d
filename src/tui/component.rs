use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable terminal view.
///
/// Views follow the props pattern:
/// - They receive data via struct fields, read from the page each frame.
/// - They may hold a `&mut` reference to persistent presentation state.
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a view can update that presentation state
/// (e.g. scroll offsets) during the render pass, as with ratatui's
/// `StatefulWidget`.
pub trait Component {
    /// Render the view into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
