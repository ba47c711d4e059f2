//! Collaborator signals funneled through the orchestrator pump.

use hub::{Key, RenderSurface, Status};
use mock::{make_kit, Call};

#[test]
fn toggle_and_menu_keys_drive_the_lifecycle() {
    let mut h = make_kit();
    h.kit.load(RenderSurface::new("arena", 640, 480)).unwrap();

    h.kit.keyboard().press(Key::Space);
    h.kit.keyboard().release(Key::Space);
    assert_eq!(h.kit.run_once().unwrap(), 1);
    assert!(h.kit.state().game_stopped);

    h.kit.keyboard().press(Key::Space);
    assert_eq!(h.kit.run_once().unwrap(), 1);
    assert!(!h.kit.state().game_stopped);

    h.kit.keyboard().press(Key::Escape);
    assert_eq!(h.kit.run_once().unwrap(), 1);
    let state = h.kit.state();
    assert!(state.game_stopped);
    assert!(state.menu_visible);
    assert_eq!(state.status, Status::Menu);
}

/// The game never dispatches lifecycle actions itself; its outcome waits for a pump.
#[test]
fn game_outcome_is_applied_on_pump() {
    let mut h = make_kit();
    h.kit.start().unwrap();

    h.game.end_of_game(true);
    assert_eq!(h.kit.state().status, Status::Playing);

    h.kit.run_once().unwrap();
    assert_eq!(h.kit.state().status, Status::Won);
    assert!(h.kit.state().game_stopped);
}

#[test]
fn controls_description_and_resize_signals() {
    let mut h = make_kit();
    h.game.set_controls_description("arrows to roll");
    h.kit.signal_sender().resize(320, 200);
    h.kit.signal_sender().show_controls();

    assert_eq!(h.kit.run_once().unwrap(), 3);

    let state = h.kit.state();
    assert_eq!(state.controls_description.as_deref(), Some("arrows to roll"));
    assert!(state.controls_visible);
    assert!(h.calls.calls().contains(&Call::SetSize(320, 200)));
}

/// Signals are handled strictly in arrival order, bounded by the budget.
#[test]
fn pump_respects_budget_and_order() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    let sender = h.kit.signal_sender();
    sender.end_of_game(false);
    sender.toggle_start_game();
    sender.end_of_game(true);

    assert_eq!(h.kit.pump_signals(1).unwrap(), 1);
    assert_eq!(h.kit.state().status, Status::Lost);

    // Lost leaves the match stopped, so the toggle resumes it.
    assert_eq!(h.kit.pump_signals(1).unwrap(), 1);
    assert_eq!(h.kit.state().status, Status::Playing);
    assert!(!h.kit.state().game_stopped);

    assert_eq!(h.kit.pump_signals(8).unwrap(), 1);
    assert_eq!(h.kit.state().status, Status::Won);
    assert_eq!(h.kit.pump_signals(8).unwrap(), 0);
}

#[test]
fn game_sees_held_keys() {
    let h = make_kit();
    h.kit.keyboard().press(Key::ArrowRight);
    assert!(h.game.keys.is_pressed(Key::ArrowRight));
    h.kit.keyboard().release(Key::ArrowRight);
    assert!(!h.game.keys.is_pressed(Key::ArrowRight));
}

/// Signals past the budget stay queued for the next pump instead of being dropped.
#[test]
fn signals_past_budget_stay_queued() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    let sender = h.kit.signal_sender();
    sender.show_controls();
    sender.set_controls_description("space to pause");
    sender.toggle_start_game();

    assert_eq!(h.kit.pump_signals(2).unwrap(), 2);
    assert_eq!(h.kit.pending_signals(), 1);
    assert!(h.kit.state().game_stopped);

    assert_eq!(h.kit.run_once().unwrap(), 1);
    assert_eq!(h.kit.pending_signals(), 0);
    let state = h.kit.state();
    assert!(!state.game_stopped);
    assert!(!state.controls_visible);
    assert_eq!(state.controls_description.as_deref(), Some("space to pause"));
}
