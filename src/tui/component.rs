use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields, usually borrows
/// from `App`) and draw themselves into a `Rect` of the frame. Stateful
/// components additionally hold a `&mut` to their persistent `*State`
/// struct, which lives in `TuiState` and survives across frames.
///
/// `render` takes `&mut self` so a component can update presentation state
/// (scroll offsets, cached layout) during the render pass, matching
/// Ratatui's `StatefulWidget` shape.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
///
/// Implementations translate low-level `TuiEvent`s into an optional
/// high-level event for the event loop to act on (e.g. the post list
/// emitting "open this post"). Returning `None` means the event was either
/// consumed internally or ignored.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
