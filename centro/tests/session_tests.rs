use std::cell::Cell;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use centro::header::{LANDING_PAGE, logout};
use centro::session::SessionStore;

fn unique_temp_session_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("centro_test_session_{tag}_{nanos}.json"))
}

#[test]
fn save_then_load_roundtrips_the_identifier() {
    let path = unique_temp_session_path("roundtrip");
    let store = SessionStore::at(&path);

    assert_eq!(store.load(), None);
    store.save("42").expect("save session");
    assert_eq!(store.load(), Some("42".to_string()));

    let _ = fs::remove_file(path);
}

#[test]
fn clear_removes_the_identifier_and_is_idempotent() {
    let path = unique_temp_session_path("clear");
    let store = SessionStore::at(&path);

    store.save("42").expect("save session");
    store.clear().expect("clear session");
    assert_eq!(store.load(), None);
    store.clear().expect("second clear is still fine");
    assert_eq!(store.load(), None);

    let _ = fs::remove_file(path);
}

#[test]
fn confirmed_logout_clears_then_navigates_to_the_landing_page() {
    let path = unique_temp_session_path("logout_ok");
    let store = SessionStore::at(&path);
    store.save("42").expect("save session");

    let destination = Cell::new(None::<String>);
    logout(&store, || true, |target| {
        // The identifier must already be gone by the time we navigate.
        assert_eq!(store.load(), None);
        destination.set(Some(target.to_string()));
    });

    assert_eq!(destination.take(), Some(LANDING_PAGE.to_string()));
    let _ = fs::remove_file(path);
}

#[test]
fn declined_logout_touches_nothing() {
    let path = unique_temp_session_path("logout_declined");
    let store = SessionStore::at(&path);
    store.save("42").expect("save session");

    let navigated = Cell::new(false);
    logout(&store, || false, |_| navigated.set(true));

    assert!(!navigated.get());
    assert_eq!(store.load(), Some("42".to_string()));
    let _ = fs::remove_file(path);
}

#[test]
fn logout_with_no_session_still_navigates_when_confirmed() {
    let path = unique_temp_session_path("logout_absent");
    let store = SessionStore::at(&path);

    let navigated = Cell::new(false);
    logout(&store, || true, |target| {
        assert_eq!(target, LANDING_PAGE);
        navigated.set(true);
    });

    assert!(navigated.get());
}
