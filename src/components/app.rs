use crate::components::VideoPlayer;
use crate::settings::{load_settings, PlayerSettings};
use dioxus::prelude::*;

#[component]
pub fn AppShell() -> Element {
    let settings = use_signal(|| {
        let settings: PlayerSettings = load_settings();
        tracing::info!(
            breakpoint = settings.native_controls_breakpoint_px,
            poll_ms = settings.progress_poll_interval_ms,
            source = ?settings.progress_source,
            "player settings loaded"
        );
        settings
    });

    use_context_provider(|| settings);

    let media_src = settings.read().media_src.clone();
    let poster_src = settings.read().poster_src.clone();

    rsx! {
        div { class: "video-wrapper",
            VideoPlayer { src: media_src, poster: poster_src }
        }
    }
}
