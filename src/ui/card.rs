use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::theme::{category_color, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRICE_TEXT};
use crate::ui::view::View;

pub fn format_price(price: Option<u64>) -> String {
    match price {
        Some(value) => format!("{} credits", value),
        None => "Priceless".to_string(),
    }
}

/// Which surface the card is rendered on. Mirrors the three card templates
/// of the storefront: a catalog tile, the preview modal body, a basket row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Tile,
    Preview,
    Row,
}

/// Partial display properties; only supplied fields are applied.
#[derive(Debug, Clone, Default)]
pub struct CardProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    /// Outer `Option` = "was this prop supplied"; inner = purchasable price.
    pub price: Option<Option<u64>>,
    pub button_text: Option<String>,
    /// 1-based position, shown on basket rows.
    pub index: Option<usize>,
}

/// A product card.
#[derive(Debug)]
pub struct Card {
    kind: CardKind,
    title: String,
    description: String,
    image: String,
    category: String,
    price: Option<u64>,
    button_text: String,
    index: usize,
}

impl Card {
    pub fn new(kind: CardKind) -> Self {
        Self {
            kind,
            title: String::new(),
            description: String::new(),
            image: String::new(),
            category: String::new(),
            price: None,
            button_text: String::new(),
            index: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Option<u64> {
        self.price
    }

    pub fn button_text(&self) -> &str {
        &self.button_text
    }

    fn draw_tile(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                self.category.clone(),
                Style::default().fg(category_color(&self.category)),
            )),
            Line::from(Span::styled(
                self.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format_price(self.price),
                Style::default().fg(PRICE_TEXT),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }

    fn draw_preview(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.category.clone(),
                Style::default().fg(category_color(&self.category)),
            )),
            Line::from(Span::styled(
                self.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.description.clone(),
                Style::default().fg(MUTED_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format_price(self.price),
                Style::default().fg(PRICE_TEXT),
            )),
        ];
        if !self.image.is_empty() {
            lines.push(Line::from(Span::styled(
                self.image.clone(),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            )));
        }
        if !self.button_text.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("[Enter] {}", self.button_text),
                Style::default().fg(HEADER_TEXT),
            )));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn draw_row(&self, frame: &mut Frame<'_>, area: Rect) {
        let price = format_price(self.price);
        let line = Line::from(vec![
            Span::styled(
                format!("{:>2}. ", self.index),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled(self.title.clone(), Style::default().fg(HEADER_TEXT)),
            Span::raw("  "),
            Span::styled(price, Style::default().fg(PRICE_TEXT)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl View for Card {
    type Props = CardProps;

    fn update(&mut self, props: CardProps) {
        if let Some(title) = props.title {
            self.title = title;
        }
        if let Some(description) = props.description {
            self.description = description;
        }
        if let Some(image) = props.image {
            self.image = image;
        }
        if let Some(category) = props.category {
            self.category = category;
        }
        if let Some(price) = props.price {
            self.price = price;
        }
        if let Some(button_text) = props.button_text {
            self.button_text = button_text;
        }
        if let Some(index) = props.index {
            self.index = index;
        }
    }

    fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match self.kind {
            CardKind::Tile => self.draw_tile(frame, area),
            CardKind::Preview => self.draw_preview(frame, area),
            CardKind::Row => self.draw_row(frame, area),
        }
    }
}
