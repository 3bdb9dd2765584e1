//! Pending unit delivery to a friendly base. Informational: the units
//! accumulate on the event and land at turn end, when `skip` flushes them
//! into the destination base.

use sortie_core::types::{merge_units, UnitMap};
use tracing::info;

use super::{Event, EventKind};

impl Event {
    /// Queue purchased units onto this delivery. Repeated deliveries to the
    /// same destination merge additively.
    pub fn deliver(&mut self, units: &UnitMap) {
        if let EventKind::UnitsDelivery { pending } = &mut self.kind {
            merge_units(pending, units);
            info!(event_id = self.id, cp = %self.to_cp, ?units, "units queued for delivery");
        }
    }

    /// Units currently queued on this delivery.
    pub fn pending_units(&self) -> Option<&UnitMap> {
        match &self.kind {
            EventKind::UnitsDelivery { pending } => Some(pending),
            _ => None,
        }
    }
}
