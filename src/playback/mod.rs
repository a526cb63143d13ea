//! Playback core - keeps the rendered controls in sync with the media element.
//! Platform independent: the browser bindings live in `components::player::web_media`.

mod capabilities;
mod controller;
mod error;
mod listeners;
mod mode;
mod poller;
mod state;
mod time;
mod vendor;

#[cfg(test)]
pub(crate) mod fakes;

pub use capabilities::*;
pub use controller::*;
pub use error::*;
pub use listeners::*;
pub use mode::*;
pub use poller::*;
pub use state::*;
pub use time::*;
pub use vendor::*;
