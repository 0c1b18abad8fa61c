use super::*;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_AUTH_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_AUTH_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive_and_trimmed() {
    let key = "__TEST_AUTH_EB_CI_77__";
    unsafe { std::env::set_var(key, "  TRUE  ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_AUTH_EB_INVALID_78__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };

    assert_eq!(env_bool("__TEST_AUTH_EB_SURELY_UNSET_79__"), None);
}

// =============================================================================
// failure shapes
// =============================================================================

#[test]
fn invalid_credentials_is_401_unauthenticated() {
    let failure = invalid_credentials();
    assert_eq!(failure.status, StatusCode::UNAUTHORIZED);
    assert_eq!(failure.code, error_code::UNAUTHENTICATED);
    // The message must not leak whether the username or the password was wrong.
    assert_eq!(failure.message, "invalid username or password");
}

#[test]
fn session_cookie_name_is_stable() {
    // The client clears this cookie by name on logout; renaming it breaks
    // existing sessions.
    assert_eq!(COOKIE_NAME, "session_token");
}
