//! Event activation and multiplier queries.

use super::types::{EventCategory, SpecialEvent, SpecialEventId};

/// Events whose window contains `now`, in schedule order.
pub fn active_events(events: &[SpecialEvent], now: i64) -> Vec<&SpecialEvent> {
    events.iter().filter(|e| e.is_active_at(now)).collect()
}

/// Combined multiplier for `category` at `now`.
///
/// Overlapping events of the same category compound multiplicatively;
/// with none active the result is 1.
pub fn multiplier_for(events: &[SpecialEvent], category: EventCategory, now: i64) -> f64 {
    events
        .iter()
        .filter(|e| e.category() == category && e.is_active_at(now))
        .map(|e| e.multiplier)
        .product()
}

/// Recompute every `active` flag for `now`.
/// Returns the ids of events that switched on during this refresh.
pub fn refresh_event_status(events: &mut [SpecialEvent], now: i64) -> Vec<SpecialEventId> {
    let mut started = Vec::new();
    for event in events.iter_mut() {
        let active = event.is_active_at(now);
        if active && !event.active {
            started.push(event.id);
        }
        event.active = active;
    }
    started
}
