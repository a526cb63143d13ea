//! Video player component: a `<video>` element plus the custom control bar,
//! swapped for the platform's native controls on narrow viewports.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
mod controls;
#[cfg(target_arch = "wasm32")]
mod web_media;

#[cfg(target_arch = "wasm32")]
use crate::playback::{log_degraded, PlayerCore, PlayerSubscriptions};
#[cfg(target_arch = "wasm32")]
use crate::settings::{PlayerSettings, ProgressSource};
#[cfg(target_arch = "wasm32")]
use controls::{FullscreenButton, MuteButton, PlayPauseButton, SeekBar, StopButton, VolumeSlider};
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::{cell::RefCell, rc::Rc};
#[cfg(target_arch = "wasm32")]
use uuid::Uuid;
#[cfg(target_arch = "wasm32")]
use web_media::{
    document_is_fullscreen, video_element, viewport_width, DocumentFullscreen, EventSubscription,
    IntervalTimer,
};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, EventTarget};

/// Native targets render the platform player as-is.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn VideoPlayer(src: String, poster: String) -> Element {
    rsx! {
        video {
            class: "video-player",
            src: "{src}",
            poster: "{poster}",
            preload: "metadata",
            controls: true,
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn VideoPlayer(src: String, poster: String) -> Element {
    let settings = use_context::<Signal<PlayerSettings>>();
    let element_id = use_hook(|| format!("rustyframe-video-{}", Uuid::new_v4().simple()));
    let timer = use_hook(IntervalTimer::default);
    let mut core = use_signal({
        let timer = timer.clone();
        move || {
            let width = viewport_width().unwrap_or(0.0);
            PlayerCore::new(&settings.peek(), timer, width)
        }
    });

    // Progress sampling tick, bound once per mount.
    {
        let element_id = element_id.clone();
        let timer = timer.clone();
        use_hook(move || {
            let runtime = Runtime::current();
            timer.set_on_tick(move || {
                let _guard = RuntimeGuard::new(runtime.clone());
                let media = video_element(&element_id);
                log_degraded("sample_progress", core.write().sample_progress(media.as_ref()));
            });
        });
    }

    // Window and document listeners: attached once per mount, released on drop.
    let subscriptions =
        use_hook(|| Rc::new(RefCell::new(PlayerSubscriptions::<EventSubscription>::default())));
    {
        let subscriptions = subscriptions.clone();
        use_hook(move || {
            let Some(win) = window() else {
                return;
            };
            let document = win.document();
            let runtime = Runtime::current();

            let on_resize = {
                let runtime = runtime.clone();
                move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    if let Some(width) = viewport_width() {
                        core.write().on_viewport_resize(width);
                    }
                }
            };
            let on_fullscreen_change = {
                let target = document.clone();
                move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    let active = target.as_ref().is_some_and(document_is_fullscreen);
                    core.write().on_fullscreen_change(active);
                }
            };

            let viewport: &EventTarget = win.as_ref();
            let document_target: Option<&EventTarget> = document.as_ref().map(AsRef::as_ref);
            let listeners = subscriptions.borrow_mut().attach(
                viewport,
                document_target,
                on_resize,
                on_fullscreen_change,
            );
            tracing::debug!(listeners, "video player subscribed");
        });
    }

    {
        let subscriptions = subscriptions.clone();
        let timer = timer.clone();
        use_drop(move || {
            subscriptions.borrow_mut().release();
            if let Ok(mut core) = core.try_write() {
                core.teardown();
            }
            timer.clear_on_tick();
        });
    }

    let on_toggle_play = {
        let element_id = element_id.clone();
        move |_: MouseEvent| {
            let media = video_element(&element_id);
            log_degraded("toggle_play_pause", core.write().toggle_play_pause(media.as_ref()));
        }
    };

    let on_stop = {
        let element_id = element_id.clone();
        move |_: MouseEvent| {
            let media = video_element(&element_id);
            log_degraded("stop", core.write().stop(media.as_ref()));
        }
    };

    let on_seek = {
        let element_id = element_id.clone();
        move |percent: f64| {
            let media = video_element(&element_id);
            log_degraded("seek", core.write().seek(media.as_ref(), percent));
        }
    };

    let on_toggle_mute = {
        let element_id = element_id.clone();
        move |_: MouseEvent| {
            let media = video_element(&element_id);
            log_degraded("toggle_mute", core.write().toggle_mute(media.as_ref()));
        }
    };

    let on_volume_change = {
        let element_id = element_id.clone();
        move |level: f64| {
            let media = video_element(&element_id);
            log_degraded("set_volume", core.write().set_volume(media.as_ref(), level));
        }
    };

    let on_toggle_full_screen = {
        let element_id = element_id.clone();
        move |_: MouseEvent| {
            let host = video_element(&element_id).and_then(|video| DocumentFullscreen::for_video(&video));
            log_degraded("toggle_full_screen", core.read().toggle_full_screen(host.as_ref()));
        }
    };

    let on_volume_sync = {
        let element_id = element_id.clone();
        move |_: Event<MediaData>| {
            let media = video_element(&element_id);
            log_degraded("sync_volume", core.write().sync_volume(media.as_ref()));
        }
    };

    let on_time_update = {
        let element_id = element_id.clone();
        move |_: Event<MediaData>| {
            if settings.peek().progress_source != ProgressSource::TimeUpdate {
                return;
            }
            let media = video_element(&element_id);
            log_degraded("sample_progress", core.write().sample_progress(media.as_ref()));
        }
    };

    let on_metadata = {
        let element_id = element_id.clone();
        move |_: Event<MediaData>| {
            if let Some(video) = video_element(&element_id) {
                core.write().on_duration_known(video.duration());
            }
        }
    };

    let view = core.read().state().clone();
    let (position, duration) = core.read().clock();
    let volume_step = settings.read().volume_step;
    let use_native = view.use_native_controls;

    // The surface itself toggles playback only while the custom bar is shown.
    let on_surface_click = {
        let mut on_toggle_play = on_toggle_play.clone();
        move |evt: MouseEvent| {
            if !use_native {
                on_toggle_play(evt);
            }
        }
    };

    rsx! {
        div { class: if view.is_full_screen { "video-shell is-fullscreen" } else { "video-shell" },
            video {
                id: "{element_id}",
                class: "video-player",
                src: "{src}",
                poster: "{poster}",
                preload: "metadata",
                controls: use_native,
                onclick: on_surface_click,
                onplay: move |_| core.write().on_media_started(),
                onpause: move |_| core.write().on_media_paused(),
                onended: move |_| core.write().on_media_finished(),
                onvolumechange: on_volume_sync,
                ontimeupdate: on_time_update,
                onloadedmetadata: on_metadata.clone(),
                ondurationchange: on_metadata,
            }
            if !use_native {
                div { class: "video-controls flex items-center gap-2 px-3 py-2 bg-zinc-950/90",
                    PlayPauseButton { is_playing: view.is_playing, on_toggle: on_toggle_play }
                    StopButton { on_stop }
                    SeekBar {
                        progress: view.progress_percent,
                        position,
                        duration,
                        on_seek,
                    }
                    MuteButton { is_muted: view.is_muted, on_toggle: on_toggle_mute }
                    VolumeSlider {
                        volume: view.volume_level,
                        step: volume_step,
                        on_change: on_volume_change,
                    }
                    FullscreenButton { is_full_screen: view.is_full_screen, on_toggle: on_toggle_full_screen }
                }
            }
        }
    }
}
