use super::{
    home_page::HomePage,
    profile_page::ProfilePage,
    status_panel::{StatusKind, StatusPanel},
};
use crate::config::Config;
use crate::model::Route;
use std::rc::Rc;
use yew::prelude::*;

// Site-wide settings for pages, without prop drilling.
#[derive(Clone, PartialEq)]
pub struct SiteContext {
    pub config: Rc<Config>,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<Config>,
}

fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_default();
    let route = Route::from_path(&path);
    log::debug!("route for {path:?}: {route:?}");
    route
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let route = use_state(current_route);
    let ctx = SiteContext {
        config: props.config.clone(),
    };

    let content = match &*route {
        Route::Home => html! { <HomePage /> },
        Route::Profile { id } => html! { <ProfilePage id={AttrValue::from(id.clone())} /> },
        Route::NotFound => html! {
            <StatusPanel kind={StatusKind::Error} title="Страница не найдена" detail={AttrValue::from("Вернитесь на главную: /")} />
        },
    };

    html! {
        <ContextProvider<SiteContext> context={ctx}>
            <div style="min-height:100vh; background:#0d1117; color:#c9d1d9; font-family:system-ui, sans-serif;">{ content }</div>
        </ContextProvider<SiteContext>>
    }
}
