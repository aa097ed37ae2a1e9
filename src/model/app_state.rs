use tracing::debug;

use crate::events::{AppEvent, EventBus, OrderField};
use crate::model::observable::Observable;
use crate::model::order::{FormErrors, OrderDraft, PaymentMethod};
use crate::model::product::ProductItem;

const MSG_PAYMENT_REQUIRED: &str = "Select a payment method";
const MSG_ADDRESS_REQUIRED: &str = "Delivery address is required";
const MSG_EMAIL_REQUIRED: &str = "Email is required";
const MSG_PHONE_REQUIRED: &str = "Phone number is required";

/// The single owner of catalog, basket, preview, order draft and validation
/// errors. Constructed once at startup with the shared dispatcher injected;
/// every mutation goes through a method here and every method that changes
/// observable data emits the corresponding event.
///
/// Basket membership is id-based for both add and remove: two item
/// instances with the same id are one basket entry.
#[derive(Debug)]
pub struct AppState {
    events: EventBus,
    catalog: Vec<ProductItem>,
    basket: Vec<ProductItem>,
    preview: Option<String>,
    order: OrderDraft,
    form_errors: FormErrors,
}

impl Observable for AppState {
    fn events(&self) -> &EventBus {
        &self.events
    }
}

impl AppState {
    pub fn new(events: EventBus) -> Self {
        Self {
            events,
            catalog: Vec::new(),
            basket: Vec::new(),
            preview: None,
            order: OrderDraft::default(),
            form_errors: FormErrors::default(),
        }
    }

    // -- catalog ----------------------------------------------------------

    /// Replace the catalog. Uniqueness of ids is the boundary adapter's
    /// responsibility; no dedup happens here.
    pub fn set_catalog(&mut self, items: Vec<ProductItem>) {
        debug!(count = items.len(), "catalog replaced");
        self.catalog = items;
        self.emit_changes(AppEvent::CatalogChanged {
            catalog: self.catalog.clone(),
        });
    }

    pub fn catalog(&self) -> &[ProductItem] {
        &self.catalog
    }

    // -- basket -----------------------------------------------------------

    /// Append `item` unless an entry with the same id is already present.
    /// On success emits `CounterChanged` then `BasketChanged`, in that order.
    pub fn add_to_basket(&mut self, item: &ProductItem) {
        if self.basket_contains(&item.id) {
            return;
        }
        debug!(id = %item.id, "added to basket");
        self.basket.push(item.clone());
        self.update_basket();
    }

    /// Remove every entry whose id matches `item.id`; emits the same two
    /// events as `add_to_basket`, in the same order.
    pub fn remove_from_basket(&mut self, item: &ProductItem) {
        debug!(id = %item.id, "removed from basket");
        self.basket.retain(|entry| entry.id != item.id);
        self.update_basket();
    }

    pub fn clear_basket(&mut self) {
        self.basket.clear();
        self.emit_changes(AppEvent::BasketCleared);
        self.update_basket();
    }

    pub fn basket(&self) -> &[ProductItem] {
        &self.basket
    }

    pub fn basket_contains(&self, id: &str) -> bool {
        self.basket.iter().any(|entry| entry.id == id)
    }

    /// Sum of the prices currently in the basket. Priceless items add
    /// nothing (the UI never lets them in, but the sum stays total anyway).
    pub fn basket_total(&self) -> u64 {
        self.basket.iter().filter_map(|entry| entry.price).sum()
    }

    fn update_basket(&mut self) {
        self.emit_changes(AppEvent::CounterChanged {
            count: self.basket.len(),
        });
        self.emit_changes(AppEvent::BasketChanged {
            items: self.basket.clone(),
            total: self.basket_total(),
        });
    }

    // -- preview ----------------------------------------------------------

    pub fn set_preview(&mut self, item: &ProductItem) {
        self.preview = Some(item.id.clone());
        self.emit_changes(AppEvent::PreviewChanged {
            item: item.clone(),
            in_basket: self.basket_contains(&item.id),
        });
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    // -- order draft ------------------------------------------------------

    /// Reset the draft to defaults. Emits nothing; callers trigger any UI
    /// refresh separately.
    pub fn clear_order(&mut self) {
        self.order = OrderDraft::default();
    }

    /// Snapshot the basket into the draft: item ids and total, atomically.
    /// Called when checkout opens; later basket mutations do not touch the
    /// snapshot until the next call.
    pub fn prepare_checkout(&mut self) {
        self.order.items = self.basket.iter().map(|entry| entry.id.clone()).collect();
        self.order.total = self.basket_total();
        debug!(items = self.order.items.len(), total = self.order.total, "checkout prepared");
    }

    /// Mutate exactly one draft field, then run a full validation pass.
    pub fn set_order_field(&mut self, field: OrderField, value: &str) {
        match field {
            OrderField::Payment => self.order.payment = PaymentMethod::from_str(value),
            OrderField::Address => self.order.address = value.to_string(),
            OrderField::Email => self.order.email = value.to_string(),
            OrderField::Phone => self.order.phone = value.to_string(),
        }
        self.validate_order_form();
    }

    /// Recompute the error mapping from scratch over the four required
    /// fields, emptiness being the sole check. Emits `FormErrorsChanged`
    /// with the full mapping and returns whether the form is valid.
    pub fn validate_order_form(&mut self) -> bool {
        let mut errors = FormErrors::default();
        if self.order.payment.is_none() {
            errors.payment = Some(MSG_PAYMENT_REQUIRED.to_string());
        }
        if self.order.address.is_empty() {
            errors.address = Some(MSG_ADDRESS_REQUIRED.to_string());
        }
        if self.order.email.is_empty() {
            errors.email = Some(MSG_EMAIL_REQUIRED.to_string());
        }
        if self.order.phone.is_empty() {
            errors.phone = Some(MSG_PHONE_REQUIRED.to_string());
        }

        self.form_errors = errors;
        self.emit_changes(AppEvent::FormErrorsChanged {
            errors: self.form_errors.clone(),
        });
        self.form_errors.is_empty()
    }

    pub fn order(&self) -> &OrderDraft {
        &self.order
    }

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }
}
