use super::*;

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u64 = env_parse("__TEST_NONEXISTENT_KEY_12345__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__TEST_MAINT_EP_VALID__", "99") };
    let val: u64 = env_parse("__TEST_MAINT_EP_VALID__", 0);
    assert_eq!(val, 99);
    unsafe { std::env::remove_var("__TEST_MAINT_EP_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__TEST_MAINT_EP_INVALID__", "notanumber") };
    let val: u64 = env_parse("__TEST_MAINT_EP_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__TEST_MAINT_EP_INVALID__") };
}

// =============================================================================
// sweeper task
// =============================================================================

#[tokio::test]
async fn spawn_session_sweeper_returns_live_handle() {
    let state = crate::state::test_helpers::test_app_state();
    let handle = spawn_session_sweeper(state);
    // The loop runs forever; it must not exit immediately even though the
    // lazy pool has no reachable database.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!handle.is_finished());
    handle.abort();
}
