//! Core game state, the resource ledger and the session that drives it.

pub mod constants;
pub mod error;
pub mod game_logic;
pub mod game_loop;
pub mod game_state;
pub mod offline;
pub mod session;

pub use error::{EngineError, EngineResult};
pub use game_logic::{
    apply_click, apply_tick, click_power, production_tick, recompute_derived_rates, settle,
    ClickOutcome, Settled,
};
pub use game_loop::{GameLoop, TickResult};
pub use game_state::{GameState, PrestigeData};
pub use offline::{process_offline_progress, OfflineReport};
pub use session::{current_time_ms, Action, ActionOutcome, GameSession};
