use super::app::SiteContext;
use super::profile_card::ProfileCard;
use super::status_panel::{StatusKind, StatusPanel};
use crate::api::fetch_profile;
use crate::state::{
    ProfileAction, ProfileState, ProfileView, load_cached_profile, refresh_cached_profile,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfilePageProps {
    pub id: AttrValue,
}

fn open_in_new_tab(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.open_with_url_and_target(url, "_blank") {
            log::warn!("failed to open {url}: {e:?}");
        }
    }
}

#[function_component]
pub fn ProfilePage(props: &ProfilePageProps) -> Html {
    let site = use_context::<SiteContext>();
    let state = {
        let id = props.id.to_string();
        use_reducer(move || ProfileState::new(id, load_cached_profile()))
    };

    // Live lookup; re-runs when the routed id changes.
    {
        let state = state.clone();
        let mirrors = site
            .as_ref()
            .map(|s| s.config.api_mirrors.clone())
            .unwrap_or_default();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.to_string();
            if state.id != id {
                state.dispatch(ProfileAction::Reset {
                    id: id.clone(),
                    cached: load_cached_profile(),
                });
            }
            spawn_local(async move {
                let result = fetch_profile(&mirrors, &id).await;
                match &result {
                    Ok(p) => refresh_cached_profile(p),
                    Err(e) if e.is_retryable() => {
                        log::warn!("profile lookup for {id} failed: {e}")
                    }
                    Err(e) => log::info!("profile lookup for {id}: {e}"),
                }
                state.dispatch(ProfileAction::Resolved { id, result });
            });
            || ()
        });
    }

    match state.view() {
        ProfileView::Loading => html! {
            <StatusPanel kind={StatusKind::Info} title="Загрузка профиля…" />
        },
        ProfileView::Show { profile, stale } => {
            // Only profiles with a Telegram handle have somewhere to go on click.
            let on_click = profile.username.clone().map(|u| {
                Callback::from(move |_: ()| open_in_new_tab(&format!("https://t.me/{}", u)))
            });
            html! { <ProfileCard profile={profile.clone()} {stale} {on_click} /> }
        }
        ProfileView::NotFound => html! {
            <StatusPanel kind={StatusKind::Error} title="Профиль не найден" />
        },
        ProfileView::Unavailable(reason) => html! {
            <StatusPanel
                kind={StatusKind::Error}
                title="Не удалось загрузить профиль. Обновите страницу."
                detail={AttrValue::from(reason.to_string())}
            />
        },
    }
}
