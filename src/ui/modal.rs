use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

use crate::events::{AppEvent, EventBus};
use crate::ui::layout::centered_rect;
use crate::ui::theme::POPUP_BORDER;

/// What the modal currently hosts. Doubles as the checkout state machine:
/// Order and Contacts are the two form steps, Success closes the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalContent {
    Preview,
    Basket,
    Order,
    Contacts,
    Success,
}

impl ModalContent {
    fn title(self) -> &'static str {
        match self {
            ModalContent::Preview => " Product ",
            ModalContent::Basket => " Basket ",
            ModalContent::Order => " Checkout ",
            ModalContent::Contacts => " Checkout ",
            ModalContent::Success => " Done ",
        }
    }
}

/// Overlay host. Holds only which content is visible; the content views
/// themselves are composed by the runtime. Announces open/close on the bus
/// so the page shell can lock and unlock itself.
#[derive(Debug)]
pub struct Modal {
    events: EventBus,
    content: Option<ModalContent>,
}

impl Modal {
    pub fn new(events: EventBus) -> Self {
        Self {
            events,
            content: None,
        }
    }

    pub fn open(&mut self, content: ModalContent) {
        self.content = Some(content);
        self.events.publish(&AppEvent::ModalOpened);
    }

    pub fn close(&mut self) {
        if self.content.take().is_some() {
            self.events.publish(&AppEvent::ModalClosed);
        }
    }

    pub fn content(&self) -> Option<ModalContent> {
        self.content
    }

    /// Draw the overlay chrome and return the inner area the hosted view
    /// should be drawn into. Returns `None` while closed.
    pub fn draw_frame(&self, frame: &mut Frame<'_>, area: Rect) -> Option<Rect> {
        let content = self.content?;
        let popup = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER))
            .title(content.title());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);
        Some(inner)
    }
}
