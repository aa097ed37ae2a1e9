//! Terminal storefront client: browse a catalog, preview products, manage a
//! basket, and submit an order through a two-step validated form.
//!
//! The core is the event-driven state synchronization layer in [`events`]
//! and [`model`]: a typed publish/subscribe bus, a single mutable
//! application state, and the render contract ([`ui::view::View`]) that
//! keeps unrelated views consistent without direct references between them.

pub mod api;
pub mod cli;
pub mod config;
pub mod events;
pub mod logging;
pub mod model;
pub mod ui;
