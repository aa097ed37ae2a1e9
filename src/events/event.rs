use crate::model::order::{FormErrors, PaymentMethod};
use crate::model::product::ProductItem;

/// Which form a field edit belongs to. Used by family subscriptions
/// (one handler for all edits of a form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Order,
    Contacts,
}

/// A single editable field of the order draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Payment,
    Address,
    Email,
    Phone,
}

impl OrderField {
    /// The form this field is edited on: payment and address on the first
    /// checkout step, email and phone on the second.
    pub fn form(self) -> FormKind {
        match self {
            OrderField::Payment | OrderField::Address => FormKind::Order,
            OrderField::Email | OrderField::Phone => FormKind::Contacts,
        }
    }
}

/// Fully qualified field address, e.g. `{Contacts, Email}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    pub form: FormKind,
    pub field: OrderField,
}

impl FieldPath {
    pub fn new(field: OrderField) -> Self {
        Self {
            form: field.form(),
            field,
        }
    }
}

/// Every event that crosses the bus, payload included.
///
/// Change events are emitted by [`AppState`](crate::model::AppState) and
/// carry everything their subscribers need, so view handlers never have to
/// read the state back mid-dispatch. Intent events are published by views
/// and the input router; their handlers are the only ones that mutate state.
#[derive(Debug, Clone)]
pub enum AppEvent {
    // -- change events (state -> views) --------------------------------
    CatalogChanged { catalog: Vec<ProductItem> },
    CounterChanged { count: usize },
    BasketChanged { items: Vec<ProductItem>, total: u64 },
    BasketCleared,
    PreviewChanged { item: ProductItem, in_basket: bool },
    FormErrorsChanged { errors: FormErrors },

    // -- form field edits (views -> state, family-matched) -------------
    FieldChanged { path: FieldPath, value: String },

    // -- user-intent signals (views/input -> orchestration) ------------
    CardSelected { item: ProductItem },
    ProductToggled { item: ProductItem },
    ProductAdded { item: ProductItem },
    ProductRemoved { item: ProductItem },
    PaymentToggled { method: PaymentMethod },
    BasketOpened,
    OrderOpened,
    OrderSubmitted,
    ContactsSubmitted,
    ModalOpened,
    ModalClosed,
}

/// Payload-free discriminant of [`AppEvent`], used for exact-kind matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CatalogChanged,
    CounterChanged,
    BasketChanged,
    BasketCleared,
    PreviewChanged,
    FormErrorsChanged,
    FieldChanged,
    CardSelected,
    ProductToggled,
    ProductAdded,
    ProductRemoved,
    PaymentToggled,
    BasketOpened,
    OrderOpened,
    OrderSubmitted,
    ContactsSubmitted,
    ModalOpened,
    ModalClosed,
}

impl AppEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            AppEvent::CatalogChanged { .. } => EventKind::CatalogChanged,
            AppEvent::CounterChanged { .. } => EventKind::CounterChanged,
            AppEvent::BasketChanged { .. } => EventKind::BasketChanged,
            AppEvent::BasketCleared => EventKind::BasketCleared,
            AppEvent::PreviewChanged { .. } => EventKind::PreviewChanged,
            AppEvent::FormErrorsChanged { .. } => EventKind::FormErrorsChanged,
            AppEvent::FieldChanged { .. } => EventKind::FieldChanged,
            AppEvent::CardSelected { .. } => EventKind::CardSelected,
            AppEvent::ProductToggled { .. } => EventKind::ProductToggled,
            AppEvent::ProductAdded { .. } => EventKind::ProductAdded,
            AppEvent::ProductRemoved { .. } => EventKind::ProductRemoved,
            AppEvent::PaymentToggled { .. } => EventKind::PaymentToggled,
            AppEvent::BasketOpened => EventKind::BasketOpened,
            AppEvent::OrderOpened => EventKind::OrderOpened,
            AppEvent::OrderSubmitted => EventKind::OrderSubmitted,
            AppEvent::ContactsSubmitted => EventKind::ContactsSubmitted,
            AppEvent::ModalOpened => EventKind::ModalOpened,
            AppEvent::ModalClosed => EventKind::ModalClosed,
        }
    }
}
