use ratatui::layout::Rect;
use ratatui::Frame;

/// The render contract every view component implements.
///
/// A view is constructed once and holds its own display state. `update`
/// receives a partial property set (every field of `Props` is optional) and
/// applies only the supplied properties; omitted properties keep their
/// previous display state. `draw` paints only the view's own region of the
/// frame. Containers compose children by drawing them into sub-areas.
///
/// There is no diffing: every `update` re-applies exactly the properties it
/// was passed.
pub trait View {
    type Props;

    fn update(&mut self, props: Self::Props);

    fn draw(&self, frame: &mut Frame<'_>, area: Rect);
}
