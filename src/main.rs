use dioxus::prelude::*;

mod components;
#[cfg(any(target_arch = "wasm32", test))]
mod playback;
mod settings;

use components::AppShell;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Title { "RustyFrame" }
        document::Stylesheet { href: PLAYER_CSS }

        AppShell {}
    }
}
