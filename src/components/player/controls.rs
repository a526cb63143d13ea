use crate::components::Icon;
use crate::playback::format_timestamp;
use dioxus::prelude::*;

const BUTTON_CLASS: &str = "video-control p-1.5 sm:p-2 text-zinc-300 hover:text-white transition-colors";

#[component]
pub(super) fn PlayPauseButton(is_playing: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: BUTTON_CLASS,
            r#type: "button",
            title: if is_playing { "Pause" } else { "Play" },
            onclick: move |evt| on_toggle.call(evt),
            Icon {
                name: if is_playing { "pause".to_string() } else { "play".to_string() },
                class: "w-5 h-5".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn StopButton(on_stop: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: BUTTON_CLASS,
            r#type: "button",
            title: "Stop",
            onclick: move |evt| on_stop.call(evt),
            Icon { name: "stop".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Progress bar doubling as the seek control. Emits the target percentage.
#[component]
pub(super) fn SeekBar(
    progress: f64,
    position: f64,
    duration: f64,
    on_seek: EventHandler<f64>,
) -> Element {
    let has_duration = duration.is_finite() && duration > 0.0;

    rsx! {
        input {
            class: "video-seek flex-1 accent-emerald-500",
            r#type: "range",
            min: "0",
            max: "100",
            step: "any",
            value: "{progress}",
            oninput: move |e: Event<FormData>| {
                if let Ok(percent) = e.value().parse::<f64>() {
                    on_seek.call(percent);
                }
            },
        }
        if has_duration {
            span { class: "video-time text-xs text-zinc-400 tabular-nums",
                "{format_timestamp(position)} / {format_timestamp(duration)}"
            }
        }
    }
}

#[component]
pub(super) fn MuteButton(is_muted: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: BUTTON_CLASS,
            r#type: "button",
            title: if is_muted { "Unmute" } else { "Mute" },
            onclick: move |evt| on_toggle.call(evt),
            Icon {
                name: if is_muted { "volume-mute".to_string() } else { "volume".to_string() },
                class: "w-5 h-5".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn VolumeSlider(volume: f64, step: f64, on_change: EventHandler<f64>) -> Element {
    rsx! {
        input {
            class: "video-volume w-24 accent-emerald-500",
            r#type: "range",
            min: "0",
            max: "1",
            step: "{step}",
            value: "{volume}",
            oninput: move |e: Event<FormData>| {
                if let Ok(level) = e.value().parse::<f64>() {
                    on_change.call(level);
                }
            },
        }
    }
}

#[component]
pub(super) fn FullscreenButton(is_full_screen: bool, on_toggle: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: BUTTON_CLASS,
            r#type: "button",
            title: if is_full_screen { "Exit fullscreen" } else { "Fullscreen" },
            onclick: move |evt| on_toggle.call(evt),
            Icon {
                name: if is_full_screen { "compress".to_string() } else { "expand".to_string() },
                class: "w-5 h-5".to_string(),
            }
        }
    }
}
