//! `toggle_start_game` callback semantics.

use std::cell::RefCell;

use app::Callback;
use mock::{make_kit, Call};

#[test]
fn toggle_from_stopped_resumes_and_notifies_continue_only() {
    let mut h = make_kit();
    h.kit.start().unwrap();
    h.kit.stop().unwrap();
    h.calls.take();

    let fired = RefCell::new(Vec::new());
    let mut on_continue: Vec<Callback<'_>> = vec![Box::new(|| fired.borrow_mut().push("a"))];
    let mut on_stop: Vec<Callback<'_>> = vec![Box::new(|| fired.borrow_mut().push("b"))];
    h.kit
        .toggle_start_game(&mut on_continue, &mut on_stop)
        .unwrap();
    drop(on_continue);
    drop(on_stop);

    assert_eq!(fired.into_inner(), vec!["a"]);
    assert!(!h.kit.state().game_stopped);
    assert_eq!(h.calls.calls(), vec![Call::Render, Call::TimerResume]);
}

/// Pausing notifies both sets: every continue hook, then every stop hook.
#[test]
fn toggle_from_running_stops_and_notifies_both() {
    let mut h = make_kit();
    h.kit.start().unwrap();

    let fired = RefCell::new(Vec::new());
    let mut on_continue: Vec<Callback<'_>> = vec![
        Box::new(|| fired.borrow_mut().push("a1")),
        Box::new(|| fired.borrow_mut().push("a2")),
    ];
    let mut on_stop: Vec<Callback<'_>> = vec![Box::new(|| fired.borrow_mut().push("b"))];
    h.kit
        .toggle_start_game(&mut on_continue, &mut on_stop)
        .unwrap();
    drop(on_continue);
    drop(on_stop);

    assert_eq!(fired.into_inner(), vec!["a1", "a2", "b"]);
    assert!(h.kit.state().game_stopped);
}

#[test]
fn toggle_with_no_callbacks_round_trips() {
    let mut h = make_kit();
    h.kit.start().unwrap();

    h.kit.toggle_start_game(&mut [], &mut []).unwrap();
    assert!(h.kit.state().game_stopped);

    h.kit.toggle_start_game(&mut [], &mut []).unwrap();
    assert!(!h.kit.state().game_stopped);
}
