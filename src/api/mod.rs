//! Store API boundary: wire shapes, the blocking HTTP client, and the
//! worker threads that keep network I/O off the UI thread.

mod client;
pub mod types;
mod worker;

pub use client::{ApiError, StoreApi};
pub use worker::{fetch_catalog, submit_order, NetEvent};
