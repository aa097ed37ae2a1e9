use ratatui::backend::TestBackend;
use ratatui::{Frame, Terminal};

use kiosk::events::EventBus;
use kiosk::ui::basket::{BasketProps, BasketView};
use kiosk::ui::card::{Card, CardKind, CardProps};
use kiosk::ui::modal::{Modal, ModalContent};
use kiosk::ui::page::{Page, PageProps};
use kiosk::ui::view::View;

/// Draw one frame into a test backend and return its text content.
fn render<F>(width: u16, height: u16, draw: F) -> String
where
    F: FnOnce(&mut Frame<'_>),
{
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("Failed to build test terminal");
    terminal.draw(draw).expect("Failed to draw frame");

    let buffer = terminal.backend().buffer();
    let area = *buffer.area();
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let symbol = buffer.cell((x, y)).map(|cell| cell.symbol()).unwrap_or(" ");
            text.push_str(symbol);
        }
        text.push('\n');
    }
    text
}

fn tile(title: &str, price: u64) -> Card {
    let mut card = Card::new(CardKind::Tile);
    card.update(CardProps {
        title: Some(title.to_string()),
        category: Some("other".to_string()),
        price: Some(Some(price)),
        ..CardProps::default()
    });
    card
}

fn row(index: usize, title: &str, price: u64) -> Card {
    let mut card = Card::new(CardKind::Row);
    card.update(CardProps {
        index: Some(index),
        title: Some(title.to_string()),
        price: Some(Some(price)),
        ..CardProps::default()
    });
    card
}

#[test]
fn page_renders_header_catalog_grid_and_footer() {
    let mut page = Page::new();
    page.update(PageProps {
        counter: Some(2),
        catalog: Some(vec![tile("Widget", 60), tile("Gadget", 40)]),
        ..PageProps::default()
    });

    let text = render(80, 24, |frame| page.draw(frame, frame.area()));

    assert!(text.contains("Kiosk"));
    assert!(text.contains("Basket [2]"));
    assert!(text.contains("Widget"));
    assert!(text.contains("60 credits"));
    assert!(text.contains("Gadget"));
    assert!(text.contains("q: Quit"));
}

#[test]
fn page_selection_moves_within_the_grid() {
    let mut page = Page::new();
    page.update(PageProps {
        catalog: Some(vec![tile("Widget", 60), tile("Gadget", 40)]),
        ..PageProps::default()
    });

    page.select_next();
    assert_eq!(page.selected(), 1);

    // Drawing with a selection must not disturb the grid content.
    let text = render(80, 24, |frame| page.draw(frame, frame.area()));
    assert!(text.contains("Widget"));
    assert!(text.contains("Gadget"));
}

#[test]
fn page_tiles_are_clamped_on_a_short_terminal() {
    let mut page = Page::new();
    page.update(PageProps {
        catalog: Some(vec![tile("Widget", 60), tile("Gadget", 40)]),
        ..PageProps::default()
    });

    // Body region is shorter than a full tile; drawing must stay inside
    // the frame instead of pushing a tile cell past it.
    let text = render(30, 8, |frame| page.draw(frame, frame.area()));
    assert!(text.contains("Kiosk"));
}

#[test]
fn basket_renders_rows_total_and_checkout_button() {
    let mut basket = BasketView::new();
    basket.update(BasketProps {
        items: Some(vec![row(1, "Widget", 60), row(2, "Gadget", 40)]),
        total: Some(100),
    });
    basket.toggle_button(false);

    let text = render(40, 10, |frame| basket.draw(frame, frame.area()));

    assert!(text.contains("1. Widget"));
    assert!(text.contains("2. Gadget"));
    assert!(text.contains("Total:"));
    assert!(text.contains("100 credits"));
    assert!(text.contains("[Enter] Checkout"));
}

#[test]
fn empty_basket_renders_placeholder() {
    let basket = BasketView::new();
    let text = render(40, 10, |frame| basket.draw(frame, frame.area()));
    assert!(text.contains("The basket is empty."));
}

#[test]
fn modal_frame_draws_titled_chrome_and_yields_an_inner_area() {
    let mut modal = Modal::new(EventBus::new());
    modal.open(ModalContent::Basket);

    let text = render(40, 12, |frame| {
        let area = frame.area();
        let inner = modal
            .draw_frame(frame, area)
            .expect("open modal must yield an inner area");
        assert!(inner.width < area.width);
        assert!(inner.height < area.height);
    });

    assert!(text.contains(" Basket "));
}

#[test]
fn closed_modal_draws_nothing() {
    let modal = Modal::new(EventBus::new());
    let text = render(40, 12, |frame| {
        assert!(modal.draw_frame(frame, frame.area()).is_none());
    });
    assert!(text.trim().is_empty());
}
