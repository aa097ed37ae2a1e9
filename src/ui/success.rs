use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::theme::{ACCENT, HEADER_TEXT, PRICE_TEXT};
use crate::ui::view::View;

/// Partial display properties of the confirmation screen.
#[derive(Default)]
pub struct SuccessProps {
    /// The server-returned total, not the locally computed one.
    pub total: Option<u64>,
}

/// Order confirmation screen.
pub struct Success {
    total: u64,
}

impl Default for Success {
    fn default() -> Self {
        Self::new()
    }
}

impl Success {
    pub fn new() -> Self {
        Self { total: 0 }
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl View for Success {
    type Props = SuccessProps;

    fn update(&mut self, props: SuccessProps) {
        if let Some(total) = props.total {
            self.total = total;
        }
    }

    fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Order accepted",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Charged ", Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format!("{} credits", self.total),
                    Style::default().fg(PRICE_TEXT).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] Back to shopping",
                Style::default().fg(ACCENT),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}
