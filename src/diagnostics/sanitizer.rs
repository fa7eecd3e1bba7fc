// SPDX-License-Identifier: MPL-2.0
//! Warning/error categories and message sanitization.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Warning and Error Type Enums
// =============================================================================

/// Categories of warnings shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The remote booking/vehicle service could not be reached.
    NetworkError,
    /// A booking or payment request was rejected.
    RequestRejected,
    /// Clipboard or share sheet was unavailable.
    ShareUnavailable,
    /// A settings file could not be read and defaults were used.
    ConfigurationIssue,
    /// Other warning type not covered by specific categories.
    Other,
}

/// Categories of errors shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Network request failed.
    NetworkError,
    /// Payment or subscription flow failed.
    PaymentError,
    /// Local file read/write failed.
    IoError,
    /// Internal application error.
    InternalError,
    /// Other error type not covered by specific categories.
    Other,
}

// =============================================================================
// Message Sanitization
// =============================================================================

static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"("#,
        r#"/home/[^\s"'()\[\]]+"#,
        r#"|/Users/[^\s"'()\[\]]+"#,
        r#"|/data/[^\s"'()\[\]]+"#,
        r#"|/tmp/[^\s"'()\[\]]+"#,
        r#"|/var/[^\s"'()\[\]]+"#,
        r#"|~/[^\s"'()\[\]]+"#,
        r#"|[A-Za-z]:\\[^\s"'()\[\]]+"#,
        r#")"#,
    ))
    .expect("path regex should compile")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email regex should compile")
});

/// Removes file paths and e-mail addresses from a message.
///
/// Paths become `<path>` and addresses become `<email>`, so the message
/// keeps its shape.
///
/// ```
/// use valet_state::diagnostics::sanitize_message;
///
/// assert_eq!(
///     sanitize_message("cannot read /home/sam/receipt.pdf"),
///     "cannot read <path>"
/// );
/// assert_eq!(
///     sanitize_message("receipt sent to sam@example.com"),
///     "receipt sent to <email>"
/// );
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let without_paths = PATH_PATTERN.replace_all(message, "<path>");
    EMAIL_PATTERN
        .replace_all(&without_paths, "<email>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_type_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&WarningType::RequestRejected).unwrap(),
            "\"request_rejected\""
        );
        assert_eq!(
            serde_json::to_string(&WarningType::ShareUnavailable).unwrap(),
            "\"share_unavailable\""
        );
    }

    #[test]
    fn error_type_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&ErrorType::PaymentError).unwrap(),
            "\"payment_error\""
        );
    }

    #[test]
    fn sanitize_replaces_unix_and_windows_paths() {
        assert_eq!(
            sanitize_message("failed: /Users/kim/Library/cache.db"),
            "failed: <path>"
        );
        assert_eq!(
            sanitize_message("failed: C:\\Users\\kim\\cache.db"),
            "failed: <path>"
        );
    }

    #[test]
    fn sanitize_replaces_email() {
        assert_eq!(
            sanitize_message("no account for jo.doe+car@mail.example.org"),
            "no account for <email>"
        );
    }

    #[test]
    fn sanitize_keeps_plain_messages() {
        assert_eq!(
            sanitize_message("Booking #42 confirmed"),
            "Booking #42 confirmed"
        );
    }
}
