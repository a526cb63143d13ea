//! Vendor-prefixed names of the fullscreen API, standard name first.

pub const REQUEST_FULLSCREEN: [&str; 4] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "mozRequestFullScreen",
    "msRequestFullscreen",
];

pub const EXIT_FULLSCREEN: [&str; 4] = [
    "exitFullscreen",
    "webkitExitFullscreen",
    "mozCancelFullScreen",
    "msExitFullscreen",
];

pub const FULLSCREEN_ELEMENT: [&str; 4] = [
    "fullscreenElement",
    "webkitFullscreenElement",
    "mozFullScreenElement",
    "msFullscreenElement",
];

pub const FULLSCREEN_CHANGE_EVENTS: [&str; 4] = [
    "fullscreenchange",
    "webkitfullscreenchange",
    "mozfullscreenchange",
    "MSFullscreenChange",
];

/// First name in `names` that `lookup` resolves, in order.
pub fn first_available<T>(
    names: &[&'static str],
    mut lookup: impl FnMut(&'static str) -> Option<T>,
) -> Option<(&'static str, T)> {
    names
        .iter()
        .find_map(|&name| lookup(name).map(|found| (name, found)))
}
