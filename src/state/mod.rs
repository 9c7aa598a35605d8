pub mod cache;
pub mod profile;
pub mod tilt;

pub use cache::{load_cached_profile, refresh_cached_profile};
pub use profile::{ProfileAction, ProfileState, ProfileView, StaleReason};
pub use tilt::{TiltAction, TiltSurface};
