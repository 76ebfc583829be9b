use automata::config::{Config, EntryPolicy};
use automata::router::Router;
use automata::screens::{Effect, FilterState, EXPIRED_MESSAGE};
use automata::ui::{Msg, ScreenId, Tick};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

fn key(code: KeyCode) -> Msg {
    Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ch(c: char) -> Msg {
    key(KeyCode::Char(c))
}

fn router_with(config: &Config) -> Router {
    let mut router = Router::from_config(config).unwrap();
    router.start();
    router
}

fn router() -> Router {
    router_with(&Config::default())
}

/// Move the menu cursor to `index` and confirm
fn launch(router: &mut Router, index: usize) -> Effect {
    router.dispatch(key(KeyCode::Home));
    for _ in 0..index {
        router.dispatch(key(KeyCode::Down));
    }
    router.dispatch(key(KeyCode::Enter))
}

/// Deliver the tick the timer is waiting for, `n` times
fn tick_timer(router: &mut Router, n: usize) {
    for _ in 0..n {
        let tick = router.timer().current_tick();
        router.dispatch(Msg::Tick(tick));
    }
}

#[test]
fn test_menu_routes_by_position() {
    let expected = [
        ScreenId::SubList,
        ScreenId::Timer,
        ScreenId::Menu,
        ScreenId::Menu,
        ScreenId::Info,
    ];
    for (index, target) in expected.into_iter().enumerate() {
        let mut router = router();
        launch(&mut router, index);
        assert_eq!(router.active(), target, "entry {}", index);
    }
}

#[test]
fn test_unrouted_entries_report_choice() {
    let mut router = router();
    launch(&mut router, 2);
    assert_eq!(router.active(), ScreenId::Menu);
    assert_eq!(router.menu().status(), Some("You chose Item 3"));

    let text = router.render_text(80, 30).unwrap();
    assert!(text.contains("You chose Item 3"));

    launch(&mut router, 3);
    assert_eq!(router.active(), ScreenId::Menu);
    assert_eq!(router.menu().status(), Some("You chose Item 4"));
}

#[test]
fn test_every_sub_screen_returns_to_menu() {
    for index in [0, 1, 4] {
        let mut router = router();
        launch(&mut router, index);
        assert_ne!(router.active(), ScreenId::Menu);

        router.dispatch(key(KeyCode::Esc));
        assert_eq!(router.active(), ScreenId::Menu, "entry {}", index);
    }
}

#[test]
fn test_sub_list_scenario() {
    let mut router = router();

    // Confirm on entry 0 opens the secondary list
    router.dispatch(key(KeyCode::Enter));
    assert_eq!(router.active(), ScreenId::SubList);

    // Cancel returns to a freshly initialized menu
    router.dispatch(key(KeyCode::Esc));
    assert_eq!(router.active(), ScreenId::Menu);
    assert_eq!(router.menu().cursor(), Some(0));
}

#[test]
fn test_timer_expires_after_sixty_ticks() {
    let mut router = router();

    let effect = launch(&mut router, 1);
    assert_eq!(router.active(), ScreenId::Timer);
    assert_eq!(router.timer().remaining(), Duration::from_secs(60));
    assert_eq!(effect.scheduled_ticks().len(), 1);

    tick_timer(&mut router, 59);
    assert_eq!(router.timer().remaining(), Duration::from_secs(1));
    assert!(!router.render_text(60, 20).unwrap().contains(EXPIRED_MESSAGE));

    tick_timer(&mut router, 1);
    assert!(router.timer().expired());
    assert_eq!(router.active(), ScreenId::Timer);
    assert!(router.render_text(60, 20).unwrap().contains(EXPIRED_MESSAGE));
}

#[test]
fn test_countdown_matches_accepted_ticks() {
    let mut config = Config::default();
    config.timer.duration_secs = 10;
    config.timer.tick_millis = 3000;
    let mut router = router_with(&config);
    launch(&mut router, 1);

    for n in 0..6u32 {
        let expected = Duration::from_secs(10).saturating_sub(Duration::from_secs(3) * n);
        assert_eq!(router.timer().remaining(), expected, "after {} ticks", n);
        tick_timer(&mut router, 1);
    }
    assert_eq!(router.timer().remaining(), Duration::ZERO);
}

#[test]
fn test_ticks_are_dropped_after_leaving_timer() {
    let mut router = router();
    launch(&mut router, 1);
    tick_timer(&mut router, 5);
    let pending = router.timer().current_tick();

    router.dispatch(key(KeyCode::Esc));
    assert_eq!(router.dispatch(Msg::Tick(pending)), Effect::None);
    assert_eq!(router.timer().remaining(), Duration::from_secs(55));
}

#[test]
fn test_stale_tick_after_reentry_is_rejected() {
    let mut router = router();
    launch(&mut router, 1);
    let old = router.timer().current_tick();

    router.dispatch(key(KeyCode::Esc));
    launch(&mut router, 1);
    assert_ne!(router.timer().current_tick(), old);

    router.dispatch(Msg::Tick(old));
    assert_eq!(router.timer().remaining(), Duration::from_secs(60));
}

#[test]
fn test_reset_policy_reinitializes_sub_screens() {
    let mut router = router();

    launch(&mut router, 1);
    let fresh = router.render_text(80, 24).unwrap();

    tick_timer(&mut router, 7);
    router.dispatch(ch('s'));
    router.dispatch(key(KeyCode::Esc));
    launch(&mut router, 1);

    assert_eq!(router.timer().remaining(), Duration::from_secs(60));
    assert!(router.timer().running());
    assert_eq!(router.render_text(80, 24).unwrap(), fresh);
}

#[test]
fn test_resume_policy_keeps_sub_screen_state() {
    let mut config = Config::default();
    config.entry_policy = EntryPolicy::Resume;
    let mut router = router_with(&config);

    launch(&mut router, 1);
    tick_timer(&mut router, 10);
    router.dispatch(key(KeyCode::Esc));
    assert_eq!(router.active(), ScreenId::Menu);

    let effect = launch(&mut router, 1);
    assert_eq!(router.timer().remaining(), Duration::from_secs(50));
    assert_eq!(
        effect.scheduled_ticks(),
        vec![(Duration::from_secs(1), router.timer().current_tick())]
    );

    tick_timer(&mut router, 1);
    assert_eq!(router.timer().remaining(), Duration::from_secs(49));
}

#[test]
fn test_menu_is_reset_even_when_resuming() {
    let mut config = Config::default();
    config.entry_policy = EntryPolicy::Resume;
    let mut router = router_with(&config);

    launch(&mut router, 4);
    router.dispatch(key(KeyCode::Esc));
    assert_eq!(router.menu().cursor(), Some(0));
}

#[test]
fn test_filter_typing_never_navigates() {
    let mut router = router();
    router.dispatch(key(KeyCode::Down));
    router.dispatch(ch('/'));

    for c in "item".chars() {
        router.dispatch(ch(c));
    }
    assert_eq!(router.menu().filter_state(), FilterState::Filtering);
    assert_eq!(router.menu().filter_text(), "item");

    // Confirm applies the filter; it does not launch
    router.dispatch(key(KeyCode::Enter));
    assert_eq!(router.active(), ScreenId::Menu);
    assert_eq!(router.menu().filter_state(), FilterState::FilterApplied);

    // Cancel drops the filter and restores the cursor
    router.dispatch(key(KeyCode::Esc));
    assert_eq!(router.menu().filter_state(), FilterState::Unfiltered);
    assert_eq!(router.menu().cursor(), Some(1));
}

#[test]
fn test_launch_from_filtered_list_uses_original_position() {
    let mut router = router();
    router.dispatch(ch('/'));
    for c in "2".chars() {
        router.dispatch(ch(c));
    }
    router.dispatch(key(KeyCode::Enter));
    assert_eq!(router.menu().selected_index(), Some(1));

    router.dispatch(ch('a'));
    assert_eq!(router.active(), ScreenId::Timer);
}

#[test]
fn test_quit_from_any_screen() {
    for index in [0, 1, 4] {
        let mut router = router();
        launch(&mut router, index);
        assert!(router.dispatch(ch('q')).wants_quit());
        assert!(router.dispatch(Msg::Quit).wants_quit());
    }
}

#[test]
fn test_resize_reaches_active_screen() {
    let mut router = router();
    router.dispatch(Msg::Resize {
        width: 100,
        height: 12,
    });
    assert_eq!(router.viewport().height, 12);

    // A tiny viewport still pages by at least one entry
    router.dispatch(key(KeyCode::PageDown));
    assert_eq!(router.menu().cursor(), Some(1));
}

#[test]
fn test_spinner_tick_for_menu() {
    let mut router = router();
    let effect = router.dispatch(ch('s'));
    let ticks = effect.scheduled_ticks();
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].1.target, ScreenId::Menu);

    router.dispatch(Msg::Tick(ticks[0].1));
    assert_eq!(router.menu().spinner_frame(), 1);

    // Ticks addressed to an inactive screen are dropped
    let foreign = Tick {
        target: ScreenId::SubList,
        tag: ticks[0].1.tag,
    };
    assert_eq!(router.dispatch(Msg::Tick(foreign)), Effect::None);
}
