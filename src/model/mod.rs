//! Application data model: the observable base, the product entity, order
//! draft types, and the single mutable application state store.

mod app_state;
mod observable;
pub mod order;
pub mod product;

pub use app_state::AppState;
pub use observable::Observable;
pub use order::{FormErrors, OrderDraft, PaymentMethod};
pub use product::ProductItem;
