//! Terminal UI: the render-contract views, input routing, and the runtime
//! that wires state-change events to view updates.

pub mod basket;
pub mod card;
pub mod events;
pub mod forms;
pub mod input;
pub mod layout;
pub mod modal;
pub mod page;
pub mod runtime;
pub mod success;
pub mod terminal_guard;
pub mod theme;
pub mod view;
