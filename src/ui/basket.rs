use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::ui::card::{format_price, Card};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, PRICE_TEXT};
use crate::ui::view::View;

/// Partial display properties of the basket panel.
#[derive(Default)]
pub struct BasketProps {
    pub items: Option<Vec<Card>>,
    pub total: Option<u64>,
}

/// The basket panel: ordered rows, total, and a checkout button that is
/// enabled only while the total is non-zero.
pub struct BasketView {
    items: Vec<Card>,
    total: u64,
    checkout_enabled: bool,
    selected: usize,
}

impl Default for BasketView {
    fn default() -> Self {
        Self::new()
    }
}

impl BasketView {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            checkout_enabled: false,
            selected: 0,
        }
    }

    /// Enable or disable the checkout control.
    pub fn toggle_button(&mut self, disabled: bool) {
        self.checkout_enabled = !disabled;
    }

    pub fn checkout_enabled(&self) -> bool {
        self.checkout_enabled
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = self.selected.checked_sub(1).unwrap_or(self.items.len() - 1);
    }
}

impl View for BasketView {
    type Props = BasketProps;

    fn update(&mut self, props: BasketProps) {
        if let Some(items) = props.items {
            self.items = items;
            if self.selected >= self.items.len() {
                self.selected = self.items.len().saturating_sub(1);
            }
        }
        if let Some(total) = props.total {
            self.total = total;
        }
    }

    fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height < 3 {
            return;
        }

        if self.items.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "The basket is empty.",
                    Style::default().fg(MUTED_TEXT),
                ))),
                area,
            );
            return;
        }

        let list_height = area.height.saturating_sub(3);
        for (index, card) in self.items.iter().enumerate().take(list_height as usize) {
            let row = Rect {
                x: area.x,
                y: area.y + index as u16,
                width: area.width,
                height: 1,
            };
            if index == self.selected {
                frame.render_widget(
                    Block::default().style(Style::default().bg(ACTIVE_HIGHLIGHT)),
                    row,
                );
            }
            card.draw(frame, row);
        }

        let total_row = Rect {
            x: area.x,
            y: area.y + area.height - 2,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Total: ", Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format_price(Some(self.total)),
                    Style::default().fg(PRICE_TEXT).add_modifier(Modifier::BOLD),
                ),
            ])),
            total_row,
        );

        let button_row = Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        };
        let button_style = if self.checkout_enabled {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[Enter] Checkout", button_style),
                Span::styled("   d: remove item", Style::default().fg(MUTED_TEXT)),
            ])),
            button_row,
        );
    }
}
