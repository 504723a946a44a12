use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_lock`] so no other test reads the environment concurrently.
unsafe fn clear_messages_env() {
    unsafe {
        std::env::remove_var("MESSAGES_ENDPOINT");
        std::env::remove_var("MESSAGES_OUTPUT");
        std::env::remove_var("MESSAGES_PAGE_TITLE");
    }
}

#[test]
fn defaults_point_at_local_service() {
    let _env = env_lock();
    unsafe { clear_messages_env() };

    let cfg = Config::try_parse_from(["message-table"]).unwrap();
    assert_eq!(cfg.endpoint, "http://localhost:4567/messages");
    assert_eq!(cfg.output, None);
    assert_eq!(cfg.title, DEFAULT_PAGE_TITLE);
}

#[test]
fn flags_override_defaults() {
    let _env = env_lock();
    unsafe { clear_messages_env() };

    let cfg = Config::try_parse_from([
        "message-table",
        "--endpoint",
        "http://example.test/api/messages",
        "-o",
        "out/page.html",
        "--title",
        "Inbox",
    ])
    .unwrap();
    assert_eq!(cfg.endpoint, "http://example.test/api/messages");
    assert_eq!(cfg.output, Some(PathBuf::from("out/page.html")));
    assert_eq!(cfg.title, "Inbox");
}

#[test]
fn environment_fills_missing_flags() {
    let _env = env_lock();
    unsafe {
        clear_messages_env();
        std::env::set_var("MESSAGES_ENDPOINT", "http://env.test/messages");
        std::env::set_var("MESSAGES_PAGE_TITLE", "From env");
    }

    let cfg = Config::try_parse_from(["message-table"]).unwrap();
    assert_eq!(cfg.endpoint, "http://env.test/messages");
    assert_eq!(cfg.title, "From env");

    let cfg = Config::try_parse_from(["message-table", "--endpoint", "http://flag.test/messages"]).unwrap();
    assert_eq!(cfg.endpoint, "http://flag.test/messages");

    unsafe { clear_messages_env() };
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Config::try_parse_from(["message-table", "--retries", "3"]).is_err());
}
