use glimmer::config::ChartConfig;
use glimmer::types::{SignalKind, SignalStatus, Trend};
use glimmer::{ChartPair, ChartSession, EngineError};

fn primary_session() -> ChartSession {
    ChartSession::new(ChartConfig::primary())
}

/// Ten small climbs: the slow EMA becomes defined on the tenth point, the
/// trend flips bullish and exactly one entry fires.
fn climb_to_entry(session: &mut ChartSession) {
    for i in 0..10 {
        let update = session.submit_value(0.1).unwrap();
        if i < 9 {
            assert!(update.events.is_empty(), "no event expected at point {}", i + 1);
        } else {
            assert_eq!(update.events.len(), 1);
            assert_eq!(update.events[0].kind, SignalKind::Entry);
        }
    }
}

#[test]
fn test_entry_fires_once_on_the_tenth_climb() {
    let mut session = primary_session();
    climb_to_entry(&mut session);
    assert_eq!(session.trend(), Trend::Bullish);
    assert_eq!(session.signal_status(), Some(SignalStatus::EntryPending));
    assert_eq!(session.stats().unwrap().hits, 0);
}

#[test]
fn test_retry_then_miss_then_fresh_entry() {
    let mut session = primary_session();
    climb_to_entry(&mut session);

    let update = session.submit_value(0.1).unwrap();
    assert_eq!(update.events.len(), 1);
    assert_eq!(update.events[0].kind, SignalKind::Retry);
    assert_eq!(session.signal_status(), Some(SignalStatus::AwaitingResult));
    assert_eq!(session.stats().unwrap().misses, 0);

    // Second miss scores, and with the chart still bullish and below the
    // ceiling a fresh entry fires on the same submission.
    let update = session.submit_value(0.1).unwrap();
    let kinds: Vec<_> = update.events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![SignalKind::Miss, SignalKind::Entry]);
    assert_eq!(session.stats().unwrap().misses, 1);
}

#[test]
fn test_immediate_hit_blocks_reentry_above_ceiling() {
    let mut session = primary_session();
    climb_to_entry(&mut session);

    let update = session.submit_value(3.0).unwrap();
    let kinds: Vec<_> = update.events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![SignalKind::Hit]);
    assert_eq!(session.stats().unwrap().hits, 1);
    // Cumulative value is now ~4.0, above the 2.0 entry ceiling.
    assert_eq!(session.signal_status(), Some(SignalStatus::Idle));
}

#[test]
fn test_large_increments_never_signal() {
    let mut session = primary_session();
    for _ in 0..5 {
        let update = session.submit_value(2.5).unwrap();
        assert!(update.events.is_empty());
    }
    assert_eq!(session.stats().unwrap().hits, 0);
    assert_eq!(session.stats().unwrap().misses, 0);
}

#[test]
fn test_six_equal_increments_stay_neutral() {
    let mut session = primary_session();
    for _ in 0..6 {
        session.submit_value(0.5).unwrap();
    }
    assert!(session.ema_slow().iter().all(Option::is_none));
    assert_eq!(session.trend(), Trend::Neutral);
}

#[test]
fn test_append_then_undo_round_trip() {
    let mut session = primary_session();
    session.submit_value(1.0).unwrap();
    session.submit_value(2.0).unwrap();
    assert!(session.undo());
    assert_eq!(session.values(), &[1.0]);
    session.submit_value(0.5).unwrap();
    assert_eq!(session.last_value(), Some(1.5));
}

#[test]
fn test_undo_on_empty_changes_nothing() {
    let mut session = primary_session();
    assert!(!session.undo());
    assert!(session.is_empty());
    assert_eq!(session.signal_status(), Some(SignalStatus::Idle));
}

#[test]
fn test_undo_clears_signal_state_but_keeps_stats() {
    let mut session = primary_session();
    climb_to_entry(&mut session);
    session.submit_value(3.0).unwrap();
    assert_eq!(session.stats().unwrap().hits, 1);

    assert!(session.undo());
    assert_eq!(session.signal_status(), Some(SignalStatus::Idle));
    assert_eq!(session.stats().unwrap().hits, 1);
}

#[test]
fn test_reset_clears_everything_including_stats() {
    let mut session = primary_session();
    climb_to_entry(&mut session);
    session.submit_value(3.0).unwrap();
    session.zoom_out();
    session.reset();

    assert!(session.is_empty());
    assert_eq!(session.trend(), Trend::Neutral);
    assert_eq!(session.zoom_level(), 0);
    let stats = session.stats().unwrap();
    assert_eq!((stats.hits, stats.misses), (0, 0));
    assert!(session.support().is_none());
    assert!(session.resistance().is_none());
}

#[test]
fn test_non_finite_submission_is_rejected_untouched() {
    let mut session = primary_session();
    session.submit_value(1.0).unwrap();
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            session.submit_value(bad),
            Err(EngineError::NonFiniteValue(_))
        ));
    }
    assert_eq!(session.values(), &[1.0]);
    assert_eq!(session.signal_status(), Some(SignalStatus::Idle));
}

#[test]
fn test_companion_has_no_signal_machine() {
    let mut session = ChartSession::new(ChartConfig::companion());
    for _ in 0..10 {
        let update = session.submit_value(0.1).unwrap();
        assert!(update.events.is_empty());
    }
    assert_eq!(session.signal_status(), None);
    assert_eq!(session.stats(), None);
}

#[test]
fn test_companion_tracks_support_proximity() {
    let mut session = ChartSession::new(ChartConfig::companion());
    for sample in [1.0, 2.0, -1.0] {
        session.submit_value(sample).unwrap();
    }
    // values [1, 3, 2]: support at 1.0, latest point well away from it
    assert_eq!(session.support().unwrap().value, 1.0);
    assert!(!session.near_support());

    session.submit_value(-0.96).unwrap();
    assert!(session.near_support());
}

#[test]
fn test_pair_forwards_to_both_charts() {
    let mut pair = ChartPair::new();
    pair.submit(0.5, 0.25, "blue").unwrap();
    pair.submit(-0.5, 0.25, "red").unwrap();

    assert_eq!(pair.primary().values(), &[0.5, 0.0]);
    assert_eq!(pair.companion().values(), &[0.25, 0.5]);
    assert_eq!(
        pair.companion().categories(),
        &[Some("blue".to_string()), Some("red".to_string())]
    );

    assert!(pair.undo());
    assert_eq!(pair.primary().values(), &[0.5]);
    assert_eq!(pair.companion().values(), &[0.25]);
}

#[test]
fn test_pair_rejects_bad_companion_value_atomically() {
    let mut pair = ChartPair::new();
    pair.submit(0.5, 0.25, "blue").unwrap();
    assert!(pair.submit(1.0, f64::NAN, "red").is_err());
    assert_eq!(pair.primary().len(), 1);
    assert_eq!(pair.companion().len(), 1);
}

#[test]
fn test_pair_zoom_stays_synchronized() {
    let mut pair = ChartPair::new();
    for _ in 0..12 {
        pair.submit(0.1, 0.1, "tag").unwrap();
    }
    pair.zoom_in();
    assert_eq!(pair.primary().zoom_level(), 1);
    assert_eq!(pair.companion().zoom_level(), 1);

    pair.zoom_out();
    pair.zoom_out();
    assert_eq!(
        pair.primary().zoom_level(),
        pair.companion().zoom_level()
    );
}

#[test]
fn test_zoom_out_short_history_quirk() {
    // With only four points the stop level lands above zero and the level
    // snaps straight to it; zooming in afterwards walks it back up.
    let mut session = primary_session();
    for _ in 0..4 {
        session.submit_value(0.2).unwrap();
    }
    session.zoom_out();
    assert_eq!(session.zoom_level(), 4);

    let window = session.visible_window();
    assert_eq!(window.start, 0);
    assert_eq!(window.len, 4);
}

#[test]
fn test_zoom_in_from_negative_snaps_to_base() {
    let mut session = primary_session();
    for _ in 0..30 {
        session.submit_value(0.1).unwrap();
    }
    session.zoom_out();
    assert_eq!(session.zoom_level(), -1);
    session.zoom_in();
    assert_eq!(session.zoom_level(), 0);
}

#[test]
fn test_snapshot_mirrors_session_state() {
    let mut session = primary_session();
    climb_to_entry(&mut session);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.values, session.values());
    assert_eq!(snapshot.candles.len(), 10);
    assert_eq!(snapshot.trend, Trend::Bullish);
    assert_eq!(snapshot.signal_status, Some(SignalStatus::EntryPending));
    assert_eq!(snapshot.visible_window.len, 10);

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"emaFast\""));
    assert!(json.contains("\"zoomLevel\""));
}
