// Last-known profile kept in localStorage.
use crate::model::Profile;

pub const PROFILE_CACHE_KEY: &str = "wiralis_user";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_cached_profile() -> Option<Profile> {
    let raw = storage()?.get_item(PROFILE_CACHE_KEY).ok().flatten()?;
    decode_cached(&raw)
}

pub fn decode_cached(raw: &str) -> Option<Profile> {
    match serde_json::from_str(raw) {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("ignoring unreadable cached profile: {e}");
            None
        }
    }
}

/// Rewrite the cache slot with `live`, but only if it already holds the same user.
pub fn refresh_cached_profile(live: &Profile) {
    let Some(store) = storage() else {
        return;
    };
    let same_user = store
        .get_item(PROFILE_CACHE_KEY)
        .ok()
        .flatten()
        .and_then(|raw| decode_cached(&raw))
        .is_some_and(|cached| should_refresh(&cached, live));
    if !same_user {
        return;
    }
    match serde_json::to_string(live) {
        Ok(s) => {
            if let Err(e) = store.set_item(PROFILE_CACHE_KEY, &s) {
                log::warn!("failed to refresh cached profile: {e:?}");
            }
        }
        Err(e) => log::warn!("failed to encode profile for cache: {e}"),
    }
}

pub fn should_refresh(cached: &Profile, live: &Profile) -> bool {
    cached.id == live.id && cached != live
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cached() {
        let raw = r#"{"id":"u1","telegramId":1,"nickname":"N","createdAt":"2025-01-01T00:00:00Z"}"#;
        assert_eq!(decode_cached(raw).map(|p| p.id), Some("u1".to_string()));
        assert_eq!(decode_cached("not json"), None);
        assert_eq!(decode_cached(r#"{"id":"u1"}"#), None);
    }

    #[test]
    fn test_should_refresh() {
        let raw = r#"{"id":"u1","telegramId":1,"nickname":"N","createdAt":"2025-01-01T00:00:00Z"}"#;
        let cached = decode_cached(raw).unwrap();
        let mut live = cached.clone();
        assert!(!should_refresh(&cached, &live));
        live.nickname = "Renamed".into();
        assert!(should_refresh(&cached, &live));
        live.id = "u2".into();
        assert!(!should_refresh(&cached, &live));
    }
}
