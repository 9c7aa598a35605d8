use super::app::SiteContext;
use super::tilt_card::TiltCard;
use crate::model::Route;
use crate::state::load_cached_profile;
use yew::prelude::*;

fn navigate(url: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_href(url) {
            log::warn!("navigation to {url} failed: {e:?}");
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
struct FeatureProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub text: AttrValue,
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
}

#[function_component]
fn Feature(props: &FeatureProps) -> Html {
    html! {
        <TiltCard on_click={props.on_click.clone()} style="display:flex; flex-direction:column; gap:8px; min-height:120px;">
            <span style="font-size:26px;">{ props.icon.clone() }</span>
            <span style="font-size:16px; font-weight:600;">{ props.title.clone() }</span>
            <span style="font-size:13px; line-height:1.4; color:#8b949e;">{ props.text.clone() }</span>
        </TiltCard>
    }
}

#[function_component]
pub fn HomePage() -> Html {
    let site = use_context::<SiteContext>();
    let bot_url: AttrValue = site
        .as_ref()
        .map(|s| AttrValue::from(s.config.bot_url.clone()))
        .unwrap_or_default();
    let site_url: AttrValue = site
        .as_ref()
        .map(|s| AttrValue::from(s.config.primary_mirror().to_string()))
        .unwrap_or_default();
    // Saved profile from a previous login, read once per mount.
    let cached_id = use_state(|| load_cached_profile().map(|p| p.id));

    let open_bot = {
        let bot_url = bot_url.clone();
        Callback::from(move |_: ()| navigate(&bot_url))
    };
    let profile_card = match &*cached_id {
        Some(id) => {
            let href = Route::profile_href(id);
            html! { <Feature
                icon="👤"
                title="Мой профиль"
                text="Открыть сохранённый профиль WIRALIS."
                on_click={Callback::from(move |_: ()| navigate(&href))}
            /> }
        }
        None => html! { <Feature
            icon="👤"
            title="Профиль"
            text="Получите код командой /web в боте и войдите, чтобы увидеть свой профиль."
        /> },
    };

    html! {<div style="max-width:960px; margin:0 auto; padding:48px 20px; display:flex; flex-direction:column; gap:32px;">
        <div style="text-align:center; display:flex; flex-direction:column; gap:12px; align-items:center;">
            <h1 style="margin:0; font-size:40px; letter-spacing:2px;">{"WIRALIS"}</h1>
            <p style="margin:0; font-size:16px; color:#8b949e; max-width:560px;">{"Профиль, ник и цитата из Telegram-бота WIRALIS. Всё в одном месте."}</p>
            <a href={bot_url.clone()} target="_blank" rel="noopener" style="padding:10px 20px; background:#238636; border:1px solid #2ea043; border-radius:8px; color:#fff; text-decoration:none; font-weight:600;">{"Открыть бота"}</a>
        </div>
        <div style="display:grid; grid-template-columns:repeat(auto-fit, minmax(220px, 1fr)); gap:16px;">
            { profile_card }
            <Feature icon="🤖" title="Бот" text="Регистрация, смена ника и ID, настройки аккаунта." on_click={open_bot} />
            <Feature icon="🔑" title="Вход по коду" text="Одноразовый код из команды /web действует 10 минут." />
            <Feature icon="🛡" title="Зеркала" text="Если основной домен недоступен, сайт работает через резервный." />
        </div>
        <div style="text-align:center; font-size:12px; color:#8b949e;">
            <a href={site_url.clone()} style="color:#58a6ff; text-decoration:none;">{ site_url.trim_start_matches("https://").to_string() }</a>
        </div>
    </div>}
}
