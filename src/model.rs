//! Data shared between the pages and the API client.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Characters left as-is in a path segment, same as `encodeURIComponent`.
const ID_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a profile id for use as one URL path segment.
pub fn encode_id(id: &str) -> String {
    utf8_percent_encode(id, ID_SEGMENT).to_string()
}

/// A user profile as served by the site API and kept in the local cache.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    /// Telegram user id.
    pub telegram_id: i64,
    pub nickname: String,
    /// Telegram @username, without the `@`.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    /// Id of the bot account the user registered through.
    #[serde(default)]
    pub bot_id: Option<String>,
    /// ISO-8601 registration timestamp.
    pub created_at: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile not found")]
    NotFound,

    #[error("Temporary failure: {0}")]
    Transient(String),
}

impl ProfileError {
    /// Reloading the page may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProfileError::Transient(_))
    }
}

/// Page selected from the browser path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Profile { id: String },
    NotFound,
}

impl Route {
    /// Parse a percent-encoded browser path. The profile id comes back decoded and trimmed.
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["profile", raw] => match percent_decode_str(raw).decode_utf8() {
                Ok(id) if !id.trim().is_empty() => Route::Profile {
                    id: id.trim().to_string(),
                },
                _ => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    pub fn profile_href(id: &str) -> String {
        format!("/profile/{}", encode_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(
            Route::from_path("/profile/abc123"),
            Route::Profile {
                id: "abc123".into()
            }
        );
        assert_eq!(
            Route::from_path("/profile/abc123/"),
            Route::Profile {
                id: "abc123".into()
            }
        );
        assert_eq!(Route::from_path("/profile"), Route::NotFound);
        assert_eq!(Route::from_path("/profile/a/b"), Route::NotFound);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
    }

    #[test]
    fn test_route_decodes_profile_id() {
        assert_eq!(
            Route::from_path("/profile/a%20b"),
            Route::Profile { id: "a b".into() }
        );
        assert_eq!(
            Route::from_path("/profile/%D0%BB%D0%B8%D1%80%D0%B0"),
            Route::Profile {
                id: "лира".into()
            }
        );
        assert_eq!(
            Route::from_path("/profile/%20u1%20"),
            Route::Profile { id: "u1".into() }
        );
        assert_eq!(Route::from_path("/profile/%20%20"), Route::NotFound);
        assert_eq!(Route::from_path("/profile/%FF"), Route::NotFound);
    }

    #[test]
    fn test_profile_href_round_trip() {
        for id in ["abc123", "a b", "x/y?z#w", "50%", "лира", "it's(ok)"] {
            let href = Route::profile_href(id);
            assert!(!href["/profile/".len()..].contains(['/', '?', '#', ' ']), "{href}");
            assert_eq!(Route::from_path(&href), Route::Profile { id: id.into() });
        }
        assert_eq!(encode_id("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn test_profile_decodes_without_optional_fields() {
        let raw = r#"{"id":"u1","telegramId":42,"nickname":"Nova","createdAt":"2025-03-07T10:00:00Z"}"#;
        let p: Profile = serde_json::from_str(raw).unwrap();
        assert_eq!(p.telegram_id, 42);
        assert_eq!(p.username, None);
        assert_eq!(p.quote, None);
        assert_eq!(p.bot_id, None);
    }

    #[test]
    fn test_profile_decodes_full_record() {
        let raw = r#"{
            "id": "u2",
            "telegramId": 987654321,
            "nickname": "Lyra",
            "username": "lyra_tg",
            "quote": "Per aspera ad astra",
            "botId": "W-1042",
            "createdAt": "2024-12-31T23:59:59.000Z"
        }"#;
        let p: Profile = serde_json::from_str(raw).unwrap();
        assert_eq!(p.username.as_deref(), Some("lyra_tg"));
        assert_eq!(p.bot_id.as_deref(), Some("W-1042"));
    }

    #[test]
    fn test_error_retryable() {
        assert!(!ProfileError::NotFound.is_retryable());
        assert!(ProfileError::Transient("timeout".into()).is_retryable());
    }
}
