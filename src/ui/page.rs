use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::card::Card;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use crate::ui::view::View;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const TILE_WIDTH: u16 = 30;
const TILE_HEIGHT: u16 = 5;

/// Partial display properties of the page shell.
#[derive(Default)]
pub struct PageProps {
    pub counter: Option<usize>,
    pub catalog: Option<Vec<Card>>,
    pub locked: Option<bool>,
}

/// The page shell: basket counter header, catalog grid, key-hint footer.
/// `locked` is set while a modal is open; the shell dims and stops taking
/// selection input.
pub struct Page {
    counter: usize,
    catalog: Vec<Card>,
    locked: bool,
    selected: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            counter: 0,
            catalog: Vec::new(),
            locked: false,
            selected: 0,
        }
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn select_next(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.catalog.len();
    }

    pub fn select_prev(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        self.selected = self.selected.checked_sub(1).unwrap_or(self.catalog.len() - 1);
    }

    fn draw_header(&self, frame: &mut Frame<'_>, area: Rect) {
        let title = " Kiosk ";
        let basket = format!("Basket [{}] ", self.counter);

        let title_width = title.chars().count();
        let basket_width = basket.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(title_width)
            .saturating_sub(basket_width);

        let line = Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding)),
            Span::styled(basket, Style::default().fg(HEADER_TEXT)),
        ]);

        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Left).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
            area,
        );
    }

    fn draw_footer(&self, frame: &mut Frame<'_>, area: Rect) {
        let hints = " ↑/↓: Browse │ Enter: Preview │ b: Basket │ q: Quit";
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        frame.render_widget(
            Paragraph::new(line).style(text_style).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            ),
            area,
        );
    }

    fn draw_catalog(&self, frame: &mut Frame<'_>, area: Rect) {
        if self.catalog.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    " Loading catalog...",
                    Style::default().fg(MUTED_TEXT),
                ))),
                area,
            );
            return;
        }

        let columns = (area.width / TILE_WIDTH).max(1);
        let rows = (area.height / TILE_HEIGHT).max(1);
        let visible = (columns * rows) as usize;

        // Keep the selection on screen by scrolling whole grid pages.
        let page_start = (self.selected / visible) * visible;

        for (slot, (index, card)) in self
            .catalog
            .iter()
            .enumerate()
            .skip(page_start)
            .take(visible)
            .enumerate()
        {
            let slot = slot as u16;
            let x = area.x + (slot % columns) * TILE_WIDTH;
            let y = area.y + (slot / columns) * TILE_HEIGHT;
            // Clamp against the body so a short terminal cannot push a
            // tile past the frame.
            let cell = Rect {
                x,
                y,
                width: TILE_WIDTH.min(area.right().saturating_sub(x)),
                height: TILE_HEIGHT.min(area.bottom().saturating_sub(y)),
            };
            card.draw(frame, cell);
            if index == self.selected && !self.locked {
                frame.render_widget(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(ACCENT)),
                    cell,
                );
            }
        }
    }
}

impl View for Page {
    type Props = PageProps;

    fn update(&mut self, props: PageProps) {
        if let Some(counter) = props.counter {
            self.counter = counter;
        }
        if let Some(catalog) = props.catalog {
            self.catalog = catalog;
            if self.selected >= self.catalog.len() {
                self.selected = self.catalog.len().saturating_sub(1);
            }
        }
        if let Some(locked) = props.locked {
            self.locked = locked;
        }
    }

    fn draw(&self, frame: &mut Frame<'_>, area: Rect) {
        let (header, body, footer) = layout_regions(area);
        self.draw_header(frame, header);
        self.draw_catalog(frame, body);
        self.draw_footer(frame, footer);
    }
}
