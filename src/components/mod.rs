//! The components module contains all shared components for our app.

mod app;
#[cfg(target_arch = "wasm32")]
mod icons;
mod player;

pub use app::*;
#[cfg(target_arch = "wasm32")]
pub use icons::*;
pub use player::*;
