use std::rc::Rc;

mod api;
mod components;
mod config;
mod model;
mod state;
mod util;

use components::{App, app::AppProps};
use config::Config;

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Trace).ok();
    let config = Config::load();
    log::set_max_level(config.log_level);
    log::info!(
        "WIRALIS site starting, API mirrors: {}",
        config.api_mirrors.join(", ")
    );

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
