use std::sync::mpsc::Sender;
use std::thread;

use tracing::debug;

use super::client::{ApiError, StoreApi};
use super::types::OrderConfirmation;
use crate::model::order::OrderDraft;
use crate::model::product::ProductItem;
use crate::ui::events::RuntimeEvent;

/// Result of a background network call, delivered into the UI event loop.
#[derive(Debug)]
pub enum NetEvent {
    Catalog(Result<Vec<ProductItem>, ApiError>),
    OrderConfirmed(Result<OrderConfirmation, ApiError>),
}

/// Fetch the catalog on a worker thread; the result arrives as
/// `RuntimeEvent::Net(NetEvent::Catalog(..))`.
pub fn fetch_catalog(api: StoreApi, tx: Sender<RuntimeEvent>) {
    thread::spawn(move || {
        debug!("fetching product catalog");
        let result = api.get_product_list();
        let _ = tx.send(RuntimeEvent::Net(NetEvent::Catalog(result)));
    });
}

/// Submit an order draft on a worker thread; the result arrives as
/// `RuntimeEvent::Net(NetEvent::OrderConfirmed(..))`. One call, one request;
/// the runtime's in-flight guard prevents overlapping submissions.
pub fn submit_order(api: StoreApi, draft: OrderDraft, tx: Sender<RuntimeEvent>) {
    thread::spawn(move || {
        debug!(items = draft.items.len(), total = draft.total, "submitting order");
        let result = api.submit_order(&draft);
        let _ = tx.send(RuntimeEvent::Net(NetEvent::OrderConfirmed(result)));
    });
}
