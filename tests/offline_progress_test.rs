//! Integration test: Offline progress on load
//!
//! Saves a game, "closes" it, and loads it again later to verify that
//! production is credited once for the gap and that derived rates are
//! rebuilt from upgrade levels rather than trusted from the save.

use idle_clicker::core::game_logic::recompute_derived_rates;
use idle_clicker::utils::{decode_state, encode_state};
use idle_clicker::{GameLoop, GameSession, GameState, MemoryStore, SaveManager, UpgradeId};

const SAVED_AT: i64 = 1_700_000_000_000;

/// A blob saved at `SAVED_AT` producing 5/s from five auto clickers.
fn saved_blob() -> String {
    let mut state = GameState::new(SAVED_AT);
    state.upgrade_mut(UpgradeId::AutoClicker).level = 5;
    state.resource = 100.0;
    recompute_derived_rates(&mut state, SAVED_AT);
    assert_eq!(state.resource_per_second, 5.0);
    encode_state(&state).unwrap()
}

#[test]
fn test_two_minute_gap_credits_exactly() {
    let store = MemoryStore::with_blob(saved_blob());
    let session = GameSession::load(store, SAVED_AT + 120_000);

    let report = session.offline_report().unwrap();
    assert_eq!(report.elapsed_ms, 120_000);
    assert_eq!(report.resource_per_second, 5.0);
    assert_eq!(report.resource_gained, 600.0);

    let state = session.state();
    assert_eq!(state.resource, 700.0);
    assert_eq!(state.total_resource_earned, 600.0);
    assert_eq!(state.last_save_time, SAVED_AT + 120_000);
}

#[test]
fn test_catch_up_applies_only_once() {
    let store = MemoryStore::with_blob(saved_blob());
    let mut session = GameSession::load(&store, SAVED_AT + 60_000);
    assert_eq!(session.state().resource, 400.0);

    // Saving stamps the new time, so a reload right away credits nothing
    session.save(SAVED_AT + 60_000).unwrap();
    let reloaded = GameSession::load(&store, SAVED_AT + 60_000);
    assert_eq!(reloaded.state().resource, 400.0);
    assert_eq!(reloaded.offline_report().unwrap().resource_gained, 0.0);
}

#[test]
fn test_clock_moved_backwards_credits_nothing() {
    let store = MemoryStore::with_blob(saved_blob());
    let session = GameSession::load(store, SAVED_AT - 3_600_000);

    assert_eq!(session.offline_report().unwrap().resource_gained, 0.0);
    assert_eq!(session.state().resource, 100.0);
    assert_eq!(session.state().last_save_time, SAVED_AT - 3_600_000);
}

#[test]
fn test_tampered_click_rate_is_recomputed() {
    let mut state = decode_state(&saved_blob()).unwrap();
    state.resource_per_click = 1_000_000.0;
    state.upgrade_mut(UpgradeId::ClickPower).level = 2;
    let store = MemoryStore::with_blob(encode_state(&state).unwrap());

    let mut session = GameSession::load(store, SAVED_AT + 1_000);
    assert_eq!(session.state().resource_per_click, 3.0);

    let outcome = session.click(SAVED_AT + 1_000);
    assert_eq!(outcome.resource_gained, 3.0);
}

#[test]
fn test_malformed_blob_falls_back_to_new_game() {
    let store = MemoryStore::with_blob("{ definitely not a save");
    let session = GameSession::load(store, SAVED_AT);

    assert!(session.offline_report().is_none());
    assert_eq!(session.state().resource, 0.0);
    assert_eq!(session.state().daily_rewards.len(), 30);
    assert_eq!(session.state().upgrades.len(), UpgradeId::ALL.len());
}

#[test]
fn test_partial_blob_is_repaired() {
    // Older save without events, calendar or most upgrades
    let blob = r#"{
        "resource": 50,
        "resourcePerSecond": 1,
        "resourcePerClick": 1,
        "totalResourceEarned": 50,
        "totalClicks": 10,
        "upgrades": { "autoClicker": { "level": 1, "cost": 57, "baseEffect": 1 } },
        "lastSaveTime": 1700000000000
    }"#;
    let session = GameSession::load(MemoryStore::with_blob(blob), SAVED_AT + 10_000);
    let state = session.state();

    assert_eq!(state.resource, 60.0);
    assert_eq!(state.upgrades.len(), UpgradeId::ALL.len());
    assert_eq!(state.upgrade_level(UpgradeId::AutoClicker), 1);
    assert_eq!(state.daily_rewards.len(), 30);
    assert_eq!(state.special_events.len(), 4);
    assert_eq!(state.prestige.multiplier, 1.0);
}

#[test]
fn test_file_backed_round_trip() {
    let dir = std::env::temp_dir().join(format!("idle-clicker-offline-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let manager = SaveManager::with_path(dir.join("save.dat"));

    let mut session = GameSession::load(manager.clone(), SAVED_AT);
    for _ in 0..60 {
        session.click(SAVED_AT);
    }
    session.purchase(UpgradeId::AutoClicker, SAVED_AT).unwrap();
    session.save(SAVED_AT).unwrap();
    let balance = session.state().resource;

    let reloaded = GameSession::load(manager, SAVED_AT + 30_000);
    assert_eq!(reloaded.state().upgrade_level(UpgradeId::AutoClicker), 1);
    assert_eq!(reloaded.state().resource, balance + 30.0);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_corrupt_save_time_credits_nothing() {
    let mut state = GameState::new(0);
    state.upgrade_mut(UpgradeId::AutoClicker).level = 5;
    recompute_derived_rates(&mut state, 0);
    state.resource = 100.0;

    for bad_time in [i64::MIN, -1, i64::MAX] {
        state.last_save_time = bad_time;
        let store = MemoryStore::with_blob(encode_state(&state).unwrap());
        let session = GameSession::load(store, SAVED_AT);

        let report = session.offline_report().unwrap();
        assert_eq!(report.resource_gained, 0.0);
        assert_eq!(session.state().resource, 100.0);
        assert_eq!(session.state().last_save_time, SAVED_AT);
    }
}
