// Profile page state: live lookup with a cached fallback.
use std::rc::Rc;
use yew::Reducible;

use crate::model::{Profile, ProfileError};

#[derive(Clone, Debug, PartialEq)]
pub enum LookupStatus {
    Loading,
    Loaded,
    Failed(ProfileError),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileState {
    /// Id this state was built for; results for any other id are dropped.
    pub id: String,
    pub live: Option<Profile>,
    pub cached: Option<Profile>,
    pub status: LookupStatus,
}

pub enum ProfileAction {
    /// Start over for a new id with whatever the cache holds.
    Reset { id: String, cached: Option<Profile> },
    Resolved {
        id: String,
        result: Result<Profile, ProfileError>,
    },
}

/// Why a cached copy is shown instead of a live record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaleReason {
    /// No mirror answered or the answer was unusable.
    Unreachable,
    /// The site answered that the profile does not exist.
    Missing,
}

impl StaleReason {
    pub fn banner(&self) -> &'static str {
        match self {
            StaleReason::Unreachable => "Сайт недоступен, показана сохранённая копия профиля.",
            StaleReason::Missing => "Профиль не найден на сайте, показана сохранённая копия.",
        }
    }
}

/// What the page should render right now.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileView<'a> {
    Loading,
    Show {
        profile: &'a Profile,
        stale: Option<StaleReason>,
    },
    NotFound,
    Unavailable(&'a str),
}

impl ProfileState {
    /// Only a cached record for the same id is usable as a fallback.
    pub fn new(id: String, cached: Option<Profile>) -> Self {
        let cached = cached.filter(|p| p.id == id);
        Self {
            id,
            live: None,
            cached,
            status: LookupStatus::Loading,
        }
    }

    pub fn view(&self) -> ProfileView<'_> {
        if let Some(p) = &self.live {
            return ProfileView::Show {
                profile: p,
                stale: None,
            };
        }
        match (&self.status, &self.cached) {
            (LookupStatus::Failed(ProfileError::Transient(_)), Some(p)) => ProfileView::Show {
                profile: p,
                stale: Some(StaleReason::Unreachable),
            },
            (LookupStatus::Failed(ProfileError::Transient(msg)), None) => {
                ProfileView::Unavailable(msg)
            }
            (LookupStatus::Failed(ProfileError::NotFound), Some(p)) => ProfileView::Show {
                profile: p,
                stale: Some(StaleReason::Missing),
            },
            (LookupStatus::Failed(ProfileError::NotFound), None) => ProfileView::NotFound,
            (_, Some(p)) => ProfileView::Show {
                profile: p,
                stale: None,
            },
            (_, None) => ProfileView::Loading,
        }
    }
}

impl Reducible for ProfileState {
    type Action = ProfileAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ProfileAction::Reset { id, cached } => Rc::new(ProfileState::new(id, cached)),
            ProfileAction::Resolved { id, result } => {
                if id != self.id {
                    log::debug!("dropping stale profile result for {id}");
                    return self;
                }
                let mut new = (*self).clone();
                match result {
                    Ok(p) => {
                        new.live = Some(p);
                        new.status = LookupStatus::Loaded;
                    }
                    Err(e) => {
                        new.status = LookupStatus::Failed(e);
                    }
                }
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, nickname: &str) -> Profile {
        Profile {
            id: id.into(),
            telegram_id: 7,
            nickname: nickname.into(),
            username: None,
            quote: None,
            bot_id: None,
            created_at: "2025-01-02T03:04:05Z".into(),
        }
    }

    #[test]
    fn test_cache_for_other_id_is_ignored() {
        let s = ProfileState::new("a".into(), Some(profile("b", "Other")));
        assert_eq!(s.cached, None);
        assert_eq!(s.view(), ProfileView::Loading);
    }

    #[test]
    fn test_cache_shown_while_loading() {
        let cached = profile("a", "Cached");
        let s = ProfileState::new("a".into(), Some(cached.clone()));
        assert_eq!(
            s.view(),
            ProfileView::Show {
                profile: &cached,
                stale: None
            }
        );
    }

    #[test]
    fn test_live_result_wins() {
        let s = Rc::new(ProfileState::new("a".into(), Some(profile("a", "Cached"))));
        let live = profile("a", "Live");
        let s = s.reduce(ProfileAction::Resolved {
            id: "a".into(),
            result: Ok(live.clone()),
        });
        assert_eq!(s.status, LookupStatus::Loaded);
        assert_eq!(
            s.view(),
            ProfileView::Show {
                profile: &live,
                stale: None
            }
        );
    }

    #[test]
    fn test_transient_failure_falls_back_to_cache() {
        let cached = profile("a", "Cached");
        let s = Rc::new(ProfileState::new("a".into(), Some(cached.clone())));
        let s = s.reduce(ProfileAction::Resolved {
            id: "a".into(),
            result: Err(ProfileError::Transient("connection failed".into())),
        });
        assert_eq!(
            s.view(),
            ProfileView::Show {
                profile: &cached,
                stale: Some(StaleReason::Unreachable)
            }
        );
    }

    #[test]
    fn test_not_found_with_cache_shows_stale_copy() {
        let cached = profile("a", "Cached");
        let s = Rc::new(ProfileState::new("a".into(), Some(cached.clone())));
        let s = s.reduce(ProfileAction::Resolved {
            id: "a".into(),
            result: Err(ProfileError::NotFound),
        });
        assert_eq!(
            s.view(),
            ProfileView::Show {
                profile: &cached,
                stale: Some(StaleReason::Missing)
            }
        );
    }

    #[test]
    fn test_stale_banner_matches_reason() {
        assert!(StaleReason::Unreachable.banner().starts_with("Сайт недоступен"));
        assert!(StaleReason::Missing.banner().starts_with("Профиль не найден"));
        assert_ne!(StaleReason::Unreachable.banner(), StaleReason::Missing.banner());
    }

    #[test]
    fn test_failures_without_cache() {
        let s = Rc::new(ProfileState::new("a".into(), None));
        let nf = s.clone().reduce(ProfileAction::Resolved {
            id: "a".into(),
            result: Err(ProfileError::NotFound),
        });
        assert_eq!(nf.view(), ProfileView::NotFound);

        let tr = s.reduce(ProfileAction::Resolved {
            id: "a".into(),
            result: Err(ProfileError::Transient("HTTP 502".into())),
        });
        assert_eq!(tr.view(), ProfileView::Unavailable("HTTP 502"));
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let s = Rc::new(ProfileState::new("a".into(), None));
        let same = s.clone().reduce(ProfileAction::Resolved {
            id: "b".into(),
            result: Ok(profile("b", "B")),
        });
        assert!(Rc::ptr_eq(&s, &same));
    }

    #[test]
    fn test_reset() {
        let s = Rc::new(ProfileState::new("a".into(), None));
        let s = s.reduce(ProfileAction::Reset {
            id: "b".into(),
            cached: Some(profile("b", "B")),
        });
        assert_eq!(s.id, "b");
        assert_eq!(s.status, LookupStatus::Loading);
        assert!(s.cached.is_some());
    }
}
