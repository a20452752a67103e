//! Special events: time-windowed multipliers on production, clicking,
//! upgrade prices and prestige gains.

pub mod data;
pub mod logic;
pub mod types;

pub use data::create_special_events;
pub use logic::{active_events, multiplier_for, refresh_event_status};
pub use types::{EventCategory, SpecialEvent, SpecialEventId};
