use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::util::storage::MemoryStore;

struct ConstSignal(bool);

impl ColorSchemeSignal for ConstSignal {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

fn store_with(ambient_dark: bool, stored: Option<&str>) -> (ThemeStore, Rc<MemoryStore>) {
    let storage = Rc::new(MemoryStore::new());
    if let Some(value) = stored {
        storage.set(STORAGE_KEY, value);
    }
    let theme = ThemeStore::new(storage.clone(), Rc::new(ConstSignal(ambient_dark)));
    (theme, storage)
}

// =============================================================
// Theme value
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_round_trips_through_its_storage_form() {
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn theme_parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("blue"), None);
    assert_eq!(Theme::parse("DARK"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_toggled_is_symmetric() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

// =============================================================
// init precedence
// =============================================================

#[test]
fn init_defaults_to_light_without_stored_or_ambient_preference() {
    let (theme, _) = store_with(false, None);
    theme.init();
    assert_eq!(theme.current(), Theme::Light);
}

#[test]
fn init_adopts_ambient_dark_without_persisting_it() {
    let (theme, storage) = store_with(true, None);
    theme.init();
    assert_eq!(theme.current(), Theme::Dark);
    assert_eq!(storage.get(STORAGE_KEY), None);
}

#[test]
fn init_prefers_stored_value_over_ambient_signal() {
    let (theme, _) = store_with(true, Some("light"));
    theme.init();
    assert_eq!(theme.current(), Theme::Light);
}

#[test]
fn init_adopts_stored_dark_value() {
    let (theme, _) = store_with(false, Some("dark"));
    theme.init();
    assert_eq!(theme.current(), Theme::Dark);
}

#[test]
fn init_falls_back_to_ambient_on_invalid_stored_value() {
    let (theme, _) = store_with(true, Some("blue"));
    theme.init();
    assert_eq!(theme.current(), Theme::Dark);
}

// =============================================================
// set / toggle
// =============================================================

#[test]
fn set_adopts_and_persists_the_value() {
    let (theme, storage) = store_with(false, None);
    theme.set(Theme::Dark);
    assert_eq!(theme.current(), Theme::Dark);
    assert_eq!(storage.get(STORAGE_KEY), Some("dark".to_owned()));
}

#[test]
fn toggle_twice_returns_to_the_start_persisting_each_step() {
    let (theme, storage) = store_with(false, None);
    theme.init();
    let persisted_sequence = Rc::new(RefCell::new(Vec::new()));

    let storage_probe = storage.clone();
    let sequence = persisted_sequence.clone();
    theme.subscribe(move |_| {
        if let Some(value) = storage_probe.get(STORAGE_KEY) {
            sequence.borrow_mut().push(value);
        }
    });

    theme.toggle();
    assert_eq!(theme.current(), Theme::Dark);
    theme.toggle();
    assert_eq!(theme.current(), Theme::Light);
    assert_eq!(*persisted_sequence.borrow(), vec!["dark", "light"]);
}

// =============================================================
// subscription
// =============================================================

#[test]
fn observers_receive_the_adopted_value_synchronously() {
    let (theme, _) = store_with(false, None);
    let seen = Rc::new(Cell::new(Theme::Light));
    let observed = seen.clone();
    theme.subscribe(move |value| observed.set(value));

    theme.set(Theme::Dark);
    assert_eq!(seen.get(), Theme::Dark);
}

#[test]
fn init_notifies_observers() {
    let (theme, _) = store_with(true, None);
    let seen = Rc::new(Cell::new(None));
    let observed = seen.clone();
    theme.subscribe(move |value| observed.set(Some(value)));

    theme.init();
    assert_eq!(seen.get(), Some(Theme::Dark));
}

#[test]
fn unsubscribed_observer_stops_receiving_values() {
    let (theme, _) = store_with(false, None);
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    let id = theme.subscribe(move |_| seen.set(seen.get() + 1));

    theme.set(Theme::Dark);
    theme.unsubscribe(id);
    theme.set(Theme::Light);
    assert_eq!(calls.get(), 1);
}

#[test]
fn set_notifies_even_when_the_value_is_unchanged() {
    let (theme, _) = store_with(false, None);
    let calls = Rc::new(Cell::new(0));
    let seen = calls.clone();
    theme.subscribe(move |_| seen.set(seen.get() + 1));

    theme.set(Theme::Light);
    theme.set(Theme::Light);
    assert_eq!(calls.get(), 2);
}
