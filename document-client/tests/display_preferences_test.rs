use document_client::{DisplayPreferences, DISPLAY_PREFERENCES};
use serial_test::serial;
use std::sync::{Arc, Mutex};

fn reset() {
    DISPLAY_PREFERENCES.set(DisplayPreferences::default());
}

#[test]
#[serial]
fn updating_one_flag_leaves_the_others_alone() {
    reset();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _subscription = DISPLAY_PREFERENCES.subscribe(move |prefs| sink.lock().unwrap().push(*prefs));

    DISPLAY_PREFERENCES.update(|prefs| prefs.show_tags = false);

    let latest = *seen.lock().unwrap().last().unwrap();
    assert!(!latest.show_tags);
    assert!(latest.show_image);
    assert!(latest.show_filename);
    assert!(latest.show_buttons);
    assert_eq!(DISPLAY_PREFERENCES.get(), latest);
}

#[test]
#[serial]
fn set_replaces_whole_record_and_notifies_every_subscriber() {
    reset();
    let first = Arc::new(Mutex::new(None));
    let second = Arc::new(Mutex::new(None));
    let first_sink = Arc::clone(&first);
    let second_sink = Arc::clone(&second);
    let _a = DISPLAY_PREFERENCES.subscribe(move |prefs| *first_sink.lock().unwrap() = Some(*prefs));
    let _b = DISPLAY_PREFERENCES.subscribe(move |prefs| *second_sink.lock().unwrap() = Some(*prefs));

    let compact = DisplayPreferences {
        show_image: false,
        show_filename: true,
        show_tags: false,
        show_buttons: false,
    };
    DISPLAY_PREFERENCES.set(compact);

    assert_eq!(*first.lock().unwrap(), Some(compact));
    assert_eq!(*second.lock().unwrap(), Some(compact));
}

#[test]
#[serial]
fn unsubscribed_callback_misses_later_writes() {
    reset();
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    let subscription = DISPLAY_PREFERENCES.subscribe(move |_| *counter.lock().unwrap() += 1);

    subscription.unsubscribe();
    DISPLAY_PREFERENCES.update(|prefs| prefs.show_buttons = false);

    assert_eq!(*calls.lock().unwrap(), 1);
}
