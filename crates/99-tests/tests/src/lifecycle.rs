//! Orchestrator lifecycle operations against recording collaborators.

use app::KitError;
use hub::{RenderSurface, Status};
use mock::{make_kit, Call};

fn surface() -> RenderSurface {
    RenderSurface::new("arena", 640, 480)
}

#[test]
fn load_binds_surface_then_starts() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut h = make_kit();

    h.kit.load(surface()).unwrap();

    assert_eq!(
        h.calls.calls(),
        vec![
            Call::RenderOn("arena".to_string()),
            Call::Render,
            Call::TimerSetTime(300),
            Call::TimerStart,
        ]
    );
    let state = h.kit.state();
    assert_eq!(state.status, Status::Playing);
    assert!(!state.game_stopped);
    assert!(!state.menu_visible);
}

#[test]
fn second_load_is_rejected() {
    let mut h = make_kit();
    h.kit.load(surface()).unwrap();
    h.calls.take();

    assert!(matches!(h.kit.load(surface()), Err(KitError::AlreadyLoaded)));
    assert!(h.calls.calls().is_empty());
}

#[test]
fn start_then_stop_toggles_game_stopped() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    assert!(!h.kit.state().game_stopped);

    h.calls.take();
    h.kit.stop().unwrap();
    assert!(h.kit.state().game_stopped);
    assert_eq!(h.calls.calls(), vec![Call::StopRender, Call::TimerStop]);
}

/// Stopping twice only repeats the collaborator calls.
#[test]
fn stop_when_stopped_is_safe() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    h.kit.stop().unwrap();
    let snapshot = h.kit.state();

    h.kit.stop().unwrap();
    assert_eq!(*h.kit.state(), *snapshot);
    assert_eq!(h.calls.count(&Call::TimerStop), 2);
}

/// Resuming continues the timer rather than re-arming it.
#[test]
fn resume_continues_timer_and_hides_overlays() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    h.kit.show_controls().unwrap();
    assert!(h.kit.state().controls_visible);

    h.calls.take();
    h.kit.resume().unwrap();

    let state = h.kit.state();
    assert!(!state.game_stopped);
    assert!(!state.controls_visible);
    assert!(!state.menu_visible);
    assert_eq!(state.status, Status::Playing);
    assert_eq!(h.calls.calls(), vec![Call::Render, Call::TimerResume]);
}

#[test]
fn won_and_lost_stop_the_match() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    h.kit.won().unwrap();
    assert_eq!(h.kit.state().status, Status::Won);
    assert!(h.kit.state().game_stopped);
    assert_eq!(h.calls.count(&Call::TimerStop), 1);

    h.kit.start().unwrap();
    h.kit.lost().unwrap();
    assert_eq!(h.kit.state().status, Status::Lost);
    assert!(h.kit.state().game_stopped);
}

#[test]
fn end_of_game_routes_by_result() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    h.kit.end_of_game(true).unwrap();
    assert_eq!(h.kit.state().status, Status::Won);

    h.kit.start().unwrap();
    h.kit.end_of_game(false).unwrap();
    assert_eq!(h.kit.state().status, Status::Lost);
}

/// The first outcome of a match sticks; later ones are ignored until restart.
#[test]
fn end_of_game_after_finish_is_ignored() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    h.kit.end_of_game(true).unwrap();
    h.calls.take();

    h.kit.end_of_game(false).unwrap();

    assert_eq!(h.kit.state().status, Status::Won);
    assert!(h.calls.calls().is_empty());
}

#[test]
fn show_menu_stops_first() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    h.calls.take();

    h.kit.show_menu().unwrap();

    let state = h.kit.state();
    assert!(state.game_stopped);
    assert!(state.menu_visible);
    assert_eq!(state.status, Status::Menu);
    assert_eq!(h.calls.calls(), vec![Call::StopRender, Call::TimerStop]);
}

#[test]
fn controls_description_is_settable_any_time() {
    let mut h = make_kit();
    h.kit.set_controls_description("arrows").unwrap();
    assert_eq!(h.kit.state().controls_description.as_deref(), Some("arrows"));

    h.kit.start().unwrap();
    h.kit.set_controls_description("wasd").unwrap();
    let state = h.kit.state();
    assert_eq!(state.controls_description.as_deref(), Some("wasd"));
    assert!(!state.game_stopped);
}

/// Resizing is pure delegation: no snapshot is produced.
#[test]
fn container_size_is_delegated_without_dispatch() {
    let mut h = make_kit();
    let version = h.kit.store().version();

    h.kit.set_game_container_size(1024, 768);

    assert_eq!(h.kit.store().version(), version);
    assert_eq!(h.calls.calls(), vec![Call::SetSize(1024, 768)]);
}

#[test]
fn reload_goes_to_the_host() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    let before = h.kit.state();

    h.kit.reload();

    assert_eq!(h.calls.count(&Call::Reload), 1);
    assert_eq!(*h.kit.state(), *before);
}
