//! Shared test utilities.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};

use kiosk::api::StoreApi;
use kiosk::config::ApiConfig;
use kiosk::events::{EventBus, EventKind};
use kiosk::model::ProductItem;
use kiosk::ui::events::RuntimeEvent;
use kiosk::ui::runtime::{wire, Ui};

pub fn make_product(id: &str, title: &str, price: Option<u64>) -> ProductItem {
    ProductItem {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("All about {}", title),
        image: format!("https://assets.test/{}.png", id),
        category: "other".to_string(),
        price,
    }
}

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// An API config pointing at a port nothing listens on, so any request a
/// test accidentally triggers fails fast instead of hanging.
pub fn unreachable_api_config() -> ApiConfig {
    let port = free_port();
    ApiConfig {
        base_url: format!("http://127.0.0.1:{}/api", port),
        assets_url: format!("http://127.0.0.1:{}/content", port),
        timeout_seconds: 5,
    }
}

/// Record the kind of every event crossing the bus, in delivery order.
pub fn record_kinds(bus: &EventBus) -> Rc<RefCell<Vec<EventKind>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    bus.subscribe_all(move |event| {
        sink.borrow_mut().push(event.kind());
        Ok(())
    });
    log
}

pub fn count_kind(log: &RefCell<Vec<EventKind>>, kind: EventKind) -> usize {
    log.borrow().iter().filter(|k| **k == kind).count()
}

/// A fully wired UI backed by an unreachable API endpoint, plus the
/// in-flight submission flag and the runtime event receiver.
pub fn build_ui() -> (Ui, Rc<Cell<bool>>, Receiver<RuntimeEvent>) {
    let (tx, rx) = mpsc::channel();
    let api = StoreApi::new(&unreachable_api_config()).expect("Failed to build API client");
    let ui = Ui::new(EventBus::new());
    let in_flight = Rc::new(Cell::new(false));
    wire(&ui, api, tx, Rc::clone(&in_flight));
    (ui, in_flight, rx)
}
