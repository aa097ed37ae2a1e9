//! Event-driven state synchronization: the typed event set and the
//! publish/subscribe bus that fans state changes out to views.

mod bus;
mod event;

pub use bus::{EventBus, Matcher, SubscriptionId};
pub use event::{AppEvent, EventKind, FieldPath, FormKind, OrderField};
