use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`lock_env`] so no other test touches the environment.
unsafe fn clear_sync_env() {
    unsafe {
        std::env::remove_var("FIGMA_FILE_KEY");
        std::env::remove_var("FIGMA_TOKEN_ENV");
        std::env::remove_var("FIGMA_ACCESS_TOKEN");
        std::env::remove_var("FIGMA_API_BASE_URL");
        std::env::remove_var("FIGMA_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("FIGMA_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("TEST_FIGMA_KEY");
    }
}

#[test]
fn from_env_applies_defaults() {
    let _env = lock_env();
    unsafe {
        clear_sync_env();
        std::env::set_var("FIGMA_FILE_KEY", "abc123");
        std::env::set_var("FIGMA_ACCESS_TOKEN", "figd_secret");
    }

    let cfg = SyncConfig::from_env().unwrap();
    assert_eq!(cfg.file_key, "abc123");
    assert_eq!(cfg.access_token, "figd_secret");
    assert_eq!(cfg.api_base_url, DEFAULT_FIGMA_API_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        Timeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.variables_url(), "https://api.figma.com/v1/files/abc123/variables");

    unsafe { clear_sync_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _env = lock_env();
    unsafe {
        clear_sync_env();
        std::env::set_var("FIGMA_FILE_KEY", "  key-1 ");
        std::env::set_var("FIGMA_TOKEN_ENV", "TEST_FIGMA_KEY");
        std::env::set_var("TEST_FIGMA_KEY", "token");
        std::env::set_var("FIGMA_API_BASE_URL", "https://figma.example.test/");
        std::env::set_var("FIGMA_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("FIGMA_CONNECT_TIMEOUT_SECS", "7");
    }

    let cfg = SyncConfig::from_env().unwrap();
    assert_eq!(cfg.file_key, "key-1");
    assert_eq!(cfg.access_token, "token");
    assert_eq!(cfg.api_base_url, "https://figma.example.test");
    assert_eq!(cfg.timeouts, Timeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.timeouts.request(), Duration::from_secs(42));

    unsafe { clear_sync_env() };
}

#[test]
fn from_env_missing_file_key_errors() {
    let _env = lock_env();
    unsafe {
        clear_sync_env();
        std::env::set_var("FIGMA_ACCESS_TOKEN", "figd_secret");
    }

    let err = SyncConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Missing { ref var } if var == "FIGMA_FILE_KEY"));

    unsafe { clear_sync_env() };
}

#[test]
fn from_env_missing_token_names_indirect_var() {
    let _env = lock_env();
    unsafe {
        clear_sync_env();
        std::env::set_var("FIGMA_FILE_KEY", "abc123");
        std::env::set_var("FIGMA_TOKEN_ENV", "TEST_FIGMA_KEY");
    }

    let err = SyncConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("TEST_FIGMA_KEY"));

    unsafe { clear_sync_env() };
}

#[test]
fn from_env_rejects_bad_timeout() {
    let _env = lock_env();
    unsafe {
        clear_sync_env();
        std::env::set_var("FIGMA_FILE_KEY", "abc123");
        std::env::set_var("FIGMA_ACCESS_TOKEN", "figd_secret");
        std::env::set_var("FIGMA_REQUEST_TIMEOUT_SECS", "soon");
    }

    let err = SyncConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("FIGMA_REQUEST_TIMEOUT_SECS"));

    unsafe { clear_sync_env() };
}

#[test]
fn from_env_rejects_blank_file_key() {
    let _env = lock_env();
    unsafe {
        clear_sync_env();
        std::env::set_var("FIGMA_FILE_KEY", "   ");
        std::env::set_var("FIGMA_ACCESS_TOKEN", "figd_secret");
    }

    let err = SyncConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    unsafe { clear_sync_env() };
}
