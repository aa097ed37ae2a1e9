use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use tracing::{error, warn};

use super::event::{AppEvent, EventKind, FormKind};

/// Subscription filter: an exact event kind, or every field edit of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Kind(EventKind),
    Form(FormKind),
}

impl Matcher {
    fn accepts(&self, event: &AppEvent) -> bool {
        match self {
            Matcher::Kind(kind) => event.kind() == *kind,
            Matcher::Form(form) => {
                matches!(event, AppEvent::FieldChanged { path, .. } if path.form == *form)
            }
        }
    }
}

/// Handle returned by subscription calls, usable with [`EventBus::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Handler = Rc<RefCell<dyn FnMut(&AppEvent) -> Result<()>>>;

struct Subscription {
    id: SubscriptionId,
    /// `None` subscribes to every event (diagnostic tracing).
    matcher: Option<Matcher>,
    handler: Handler,
}

#[derive(Default)]
struct Inner {
    subscriptions: Vec<Subscription>,
    next_id: u64,
}

/// Synchronous publish/subscribe bus connecting state mutations to views.
///
/// Cheap to clone; clones share the same subscriber list. Dispatch is
/// depth-first: a handler that publishes another event runs that event's
/// entire fan-out before control returns to the outer `publish`. There is no
/// queueing and nothing runs on a later turn.
///
/// A handler that returns `Err` is logged and skipped; delivery to the
/// remaining subscribers continues. A handler cannot be re-entered while it
/// is already running; the nested invocation is dropped with a warning.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<RefCell<Inner>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for events accepted by `matcher`.
    /// Handlers run in subscription order.
    pub fn subscribe<F>(&self, matcher: Matcher, handler: F) -> SubscriptionId
    where
        F: FnMut(&AppEvent) -> Result<()> + 'static,
    {
        self.register(Some(matcher), handler)
    }

    /// Register a handler invoked for every published event.
    pub fn subscribe_all<F>(&self, handler: F) -> SubscriptionId
    where
        F: FnMut(&AppEvent) -> Result<()> + 'static,
    {
        self.register(None, handler)
    }

    /// Remove one registration. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .subscriptions
            .retain(|sub| sub.id != id);
    }

    /// Deliver `event` to every matching handler, synchronously.
    pub fn publish(&self, event: &AppEvent) {
        // Snapshot the matching handlers first so nested publishes (and
        // subscribe/unsubscribe from inside a handler) never hit a borrowed
        // subscriber list.
        let matched: Vec<Handler> = self
            .inner
            .borrow()
            .subscriptions
            .iter()
            .filter(|sub| sub.matcher.map_or(true, |m| m.accepts(event)))
            .map(|sub| Rc::clone(&sub.handler))
            .collect();

        for handler in matched {
            let Ok(mut handler) = handler.try_borrow_mut() else {
                warn!(kind = ?event.kind(), "skipping re-entrant event handler");
                continue;
            };
            if let Err(err) = handler(event) {
                error!(kind = ?event.kind(), error = %err, "event handler failed");
            }
        }
    }

    fn register<F>(&self, matcher: Option<Matcher>, handler: F) -> SubscriptionId
    where
        F: FnMut(&AppEvent) -> Result<()> + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscriptions.push(Subscription {
            id,
            matcher,
            handler: Rc::new(RefCell::new(handler)),
        });
        id
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.inner.borrow().subscriptions.len())
            .finish()
    }
}
