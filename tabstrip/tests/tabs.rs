//! End-to-end tests for the Tabs widget.

use tabstrip::events::EventResult;
use tabstrip::item::{TabId, TabItem};
use tabstrip::keys::{Key, KeyCombo, NavAction, Orientation};
use tabstrip::tabs::Tabs;

fn abc() -> Vec<TabItem> {
    vec![
        TabItem::new("a", "Alpha"),
        TabItem::new("b", "Beta"),
        TabItem::new("c", "Gamma"),
    ]
}

fn abc_middle_disabled() -> Vec<TabItem> {
    vec![
        TabItem::new("a", "Alpha"),
        TabItem::new("b", "Beta").with_disabled(true),
        TabItem::new("c", "Gamma"),
    ]
}

#[test]
fn test_first_item_starts_active() {
    let items = abc();
    let tabs = Tabs::new(&items);
    assert_eq!(tabs.active_id(), Some(TabId::from("a")));
    assert_eq!(tabs.active_index(&items), Some(0));
}

#[test]
fn test_unknown_active_id_falls_back_to_first() {
    let items = abc();
    let tabs = Tabs::with_initial("missing");
    assert_eq!(tabs.active_index(&items), Some(0));
    // Display fallback never rewrites the stored value
    assert_eq!(tabs.active_id(), Some(TabId::from("missing")));
}

#[test]
fn test_empty_list_has_no_selection() {
    let tabs = Tabs::new(&[]);
    assert_eq!(tabs.active_id(), None);
    assert_eq!(tabs.active_index(&[]), None);
    assert!(tabs.tab_states(&[]).is_empty());
}

#[test]
fn test_arrow_navigation_skips_disabled_and_wraps() {
    let items = abc_middle_disabled();
    let tabs = Tabs::new(&items);
    let right = KeyCombo::key(Key::Right);
    let left = KeyCombo::key(Key::Left);

    assert_eq!(tabs.handle_key(&right, &items), EventResult::Consumed);
    assert_eq!(tabs.active_index(&items), Some(2)); // Beta skipped

    assert_eq!(tabs.handle_key(&right, &items), EventResult::Consumed);
    assert_eq!(tabs.active_index(&items), Some(0)); // wrapped

    assert_eq!(tabs.handle_key(&left, &items), EventResult::Consumed);
    assert_eq!(tabs.active_index(&items), Some(2)); // wrapped back
}

#[test]
fn test_home_and_end_navigation() {
    let items = abc();
    let tabs = Tabs::with_initial("b");

    tabs.handle_key(&KeyCombo::key(Key::Home), &items);
    assert_eq!(tabs.active_id(), Some(TabId::from("a")));

    tabs.handle_key(&KeyCombo::key(Key::End), &items);
    assert_eq!(tabs.active_id(), Some(TabId::from("c")));
}

#[test]
fn test_home_skips_leading_disabled() {
    let items = vec![
        TabItem::new("a", "Alpha").with_disabled(true),
        TabItem::new("b", "Beta"),
        TabItem::new("c", "Gamma"),
    ];
    let tabs = Tabs::with_initial("c");

    tabs.handle_key(&KeyCombo::key(Key::Home), &items);
    assert_eq!(tabs.active_id(), Some(TabId::from("b")));
}

#[test]
fn test_unrecognized_key_is_not_consumed() {
    let items = abc();
    let tabs = Tabs::new(&items);

    let result = tabs.handle_key(&KeyCombo::key(Key::Char('x')), &items);
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(tabs.active_index(&items), Some(0));
    assert!(tabs.take_events().is_empty());
}

#[test]
fn test_keys_ignored_on_empty_list() {
    let tabs = Tabs::new(&[]);
    let result = tabs.handle_key(&KeyCombo::key(Key::Right), &[]);
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn test_vertical_orientation_remaps_arrows() {
    let items = abc();
    let tabs = Tabs::new(&items).with_orientation(Orientation::Vertical);

    assert_eq!(
        tabs.handle_key(&KeyCombo::key(Key::Right), &items),
        EventResult::Ignored
    );
    assert_eq!(
        tabs.handle_key(&KeyCombo::key(Key::Down), &items),
        EventResult::Consumed
    );
    assert_eq!(tabs.active_index(&items), Some(1));
}

#[test]
fn test_activation_queues_one_event() {
    let items = abc();
    let tabs = Tabs::new(&items);

    assert_eq!(tabs.activate(2, &items), EventResult::Consumed);

    let events = tabs.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, TabId::from("c"));
    assert!(tabs.take_events().is_empty(), "queue should drain");
}

#[test]
fn test_disabled_activation_is_silent_noop() {
    let items = abc_middle_disabled();
    let tabs = Tabs::new(&items);

    assert_eq!(tabs.activate(1, &items), EventResult::Ignored);
    assert_eq!(tabs.active_id(), Some(TabId::from("a")));
    assert!(tabs.take_events().is_empty());
}

#[test]
fn test_out_of_range_activation_is_silent_noop() {
    let items = abc();
    let tabs = Tabs::new(&items);

    assert_eq!(tabs.activate(7, &items), EventResult::Ignored);
    assert_eq!(tabs.active_id(), Some(TabId::from("a")));
    assert!(tabs.take_events().is_empty());
}

#[test]
fn test_reselect_notifies_by_default() {
    let items = abc();
    let tabs = Tabs::new(&items);

    assert_eq!(tabs.activate(0, &items), EventResult::Consumed);
    assert_eq!(tabs.take_events().len(), 1);
}

#[test]
fn test_reselect_suppressed_when_configured() {
    let items = abc();
    let tabs = Tabs::new(&items).with_notify_on_reselect(false);

    assert_eq!(tabs.activate(0, &items), EventResult::Consumed);
    assert!(tabs.take_events().is_empty());

    // A different tab still notifies
    assert_eq!(tabs.activate(1, &items), EventResult::Consumed);
    assert_eq!(tabs.take_events().len(), 1);
}

#[test]
fn test_controlled_mode_defers_but_notifies() {
    let items = abc();
    let tabs = Tabs::controlled("a");
    assert!(tabs.is_controlled());

    assert_eq!(tabs.activate(2, &items), EventResult::Consumed);

    // The widget never mutates a host-owned value
    assert_eq!(tabs.active_id(), Some(TabId::from("a")));
    let events = tabs.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, TabId::from("c"));
}

#[test]
fn test_controlled_mode_reflects_resupplied_value() {
    let items = abc();
    let tabs = Tabs::controlled("b");

    tabs.sync_active(Some(TabId::from("c")));
    assert_eq!(tabs.active_id(), Some(TabId::from("c")));
    assert_eq!(tabs.active_index(&items), Some(2));
    assert!(tabs.take_events().is_empty(), "sync is not an activation");
}

#[test]
fn test_uncontrolled_mode_applies_in_order() {
    let items = abc();
    let tabs = Tabs::new(&items);

    tabs.activate(1, &items);
    assert_eq!(tabs.active_id(), Some(TabId::from("b")));
    tabs.activate(2, &items);
    assert_eq!(tabs.active_id(), Some(TabId::from("c")));
}

#[test]
fn test_focus_intent_follows_arrow_navigation() {
    let items = abc();
    let tabs = Tabs::new(&items);

    tabs.handle_key(&KeyCombo::key(Key::Right), &items);
    assert_eq!(tabs.take_focus_intent(), Some(TabId::from("b")));
    assert_eq!(tabs.take_focus_intent(), None, "intent should drain");
}

#[test]
fn test_no_focus_intent_for_enter() {
    let items = abc();
    let tabs = Tabs::new(&items);

    tabs.handle_key(&KeyCombo::key(Key::Enter), &items);
    assert_eq!(tabs.take_focus_intent(), None);
    // But the re-activation still notified
    assert_eq!(tabs.take_events().len(), 1);
}

#[test]
fn test_newer_focus_intent_supersedes() {
    let items = abc();
    let tabs = Tabs::new(&items);

    tabs.handle_key(&KeyCombo::key(Key::Right), &items);
    tabs.handle_key(&KeyCombo::key(Key::Right), &items);
    assert_eq!(tabs.take_focus_intent(), Some(TabId::from("c")));
    assert_eq!(tabs.take_focus_intent(), None);
}

#[test]
fn test_handle_action_reports_outcome() {
    let items = abc_middle_disabled();
    let tabs = Tabs::new(&items);

    let outcome = tabs.handle_action(NavAction::NextTab, &items);
    assert_eq!(outcome.target, Some(2));
    assert!(outcome.focus_moved);

    let outcome = tabs.handle_action(NavAction::ActivateCurrent, &items);
    assert_eq!(outcome.target, Some(2));
    assert!(!outcome.focus_moved);
}

#[test]
fn test_all_disabled_navigation_stays_put() {
    let items = vec![
        TabItem::new("a", "Alpha").with_disabled(true),
        TabItem::new("b", "Beta").with_disabled(true),
    ];
    let tabs = Tabs::new(&items);

    let outcome = tabs.handle_action(NavAction::NextTab, &items);
    assert_eq!(outcome.target, Some(0));
    assert!(!outcome.focus_moved, "no enabled target to focus");
    assert!(tabs.take_events().is_empty());
}

#[test]
fn test_tab_states_roving_tabindex() {
    let items = abc();
    let tabs = Tabs::with_initial("b");

    let states = tabs.tab_states(&items);
    assert_eq!(states.len(), 3);
    let reachable: Vec<bool> = states.iter().map(|s| s.tab_reachable).collect();
    assert_eq!(reachable, vec![false, true, false]);
    assert!(states[1].selected);
    assert_eq!(states[0].position, 1);
    assert_eq!(states[2].position, 3);
    assert!(states.iter().all(|s| s.set_size == 3));
}

#[test]
fn test_tab_states_fall_back_with_unknown_id() {
    let items = abc();
    let tabs = Tabs::with_initial("missing");

    let states = tabs.tab_states(&items);
    assert!(states[0].selected && states[0].tab_reachable);
    assert_eq!(states.iter().filter(|s| s.tab_reachable).count(), 1);
}

#[test]
fn test_dirty_flag_tracks_changes() {
    let items = abc();
    let tabs = Tabs::new(&items);
    assert!(!tabs.is_dirty());

    tabs.activate(1, &items);
    assert!(tabs.is_dirty());

    tabs.clear_dirty();
    assert!(!tabs.is_dirty());
}

#[test]
fn test_clones_share_state() {
    let items = abc();
    let tabs = Tabs::new(&items);
    let view = tabs.clone();

    tabs.activate(2, &items);
    assert_eq!(view.active_id(), Some(TabId::from("c")));
    assert_eq!(view.id(), tabs.id());
}

#[test]
fn test_sequential_keys_observe_previous_effect() {
    // A(enabled), B(disabled), C(enabled), D(enabled)
    let items = vec![
        TabItem::new("a", "Alpha"),
        TabItem::new("b", "Beta").with_disabled(true),
        TabItem::new("c", "Gamma"),
        TabItem::new("d", "Delta"),
    ];
    let tabs = Tabs::new(&items);
    let right = KeyCombo::key(Key::Right);

    tabs.handle_key(&right, &items);
    tabs.handle_key(&right, &items);
    tabs.handle_key(&right, &items);
    // a -> c -> d -> a
    assert_eq!(tabs.active_id(), Some(TabId::from("a")));

    let changed: Vec<String> = tabs
        .take_events()
        .iter()
        .map(|event| event.id.to_string())
        .collect();
    assert_eq!(changed, vec!["c", "d", "a"]);
}
