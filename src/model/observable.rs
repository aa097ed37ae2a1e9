use crate::events::{AppEvent, EventBus};

/// Mix-in for state objects bound to the shared dispatcher.
///
/// Implementors get [`emit_changes`](Observable::emit_changes) for free;
/// emission is always explicit, performed by whichever method mutated the
/// field. There is no automatic diffing.
pub trait Observable {
    fn events(&self) -> &EventBus;

    fn emit_changes(&self, event: AppEvent) {
        self.events().publish(&event);
    }
}
