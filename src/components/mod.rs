pub mod app;
pub mod home_page;
pub mod profile_card;
pub mod profile_page;
pub mod status_panel;
pub mod tilt_card;

pub use app::App;
