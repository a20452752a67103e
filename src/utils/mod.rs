//! Utility modules: persistence backends and display formatting.

pub mod format;
pub mod persistence;
pub mod save_manager;

pub use format::{format_clock, format_number, format_play_time};
pub use persistence::{decode_state, encode_state, MemoryStore, PersistenceGateway};
pub use save_manager::SaveManager;
