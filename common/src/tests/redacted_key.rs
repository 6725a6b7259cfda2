use crate::RedactedApiKey;

/// **VALUE**: Verifies that Debug and Display never print the key.
///
/// **WHY THIS MATTERS**: `Credentials` is logged with `{:?}` during client setup.
/// A leak here writes live secret keys to log files.
#[test]
fn given_secret_key_when_formatted_then_value_is_redacted() {
    let key = RedactedApiKey::new("sk_live_0123456789abcdef");

    let debug = format!("{key:?}");
    let display = format!("{key}");

    assert!(!debug.contains("0123456789abcdef"));
    assert!(!display.contains("0123456789abcdef"));
    assert!(debug.contains("REDACTED"));
}

/// **VALUE**: Verifies that serialization is refused.
///
/// **BUG THIS CATCHES**: Would catch if someone derives Serialize on a struct
/// holding keys and writes it to `culqi.json`.
#[test]
fn given_key_when_serialized_then_returns_error() {
    let key = RedactedApiKey::new("pk_test_abcdef");

    let result = serde_json::to_string(&key);

    assert!(result.is_err());
    assert!(!result.unwrap_err().to_string().contains("abcdef"));
}

#[test]
fn given_key_when_prefix_requested_then_only_environment_prefix_is_visible() {
    let key = RedactedApiKey::new("sk_test_abcdef123456");

    assert_eq!(key.visible_prefix(), "sk_test_");
    assert_eq!(key.len(), 20);
    assert_eq!(key.as_str(), "sk_test_abcdef123456");
}

#[test]
fn given_short_key_when_prefix_requested_then_returns_whole_key() {
    let key = RedactedApiKey::new("sk_");

    assert_eq!(key.visible_prefix(), "sk_");
    assert!(!key.is_empty());
}
