use dioxus::prelude::*;

use crate::app_state::AppState;

/// A full-height map centered on the configured location.
///
/// The map itself is the OpenStreetMap embed page; this component only frames it.
#[component]
pub fn MapView() -> Element {
    let app_state = use_context::<AppState>();
    let embed_url = app_state.prefs.map().params().embed_url();

    rsx! {
        div {
            style: "height: 100vh; width: 100%;",
            iframe {
                class: "map-view",
                title: "Map",
                src: "{embed_url}",
                style: "width: 100%; height: 100%; border: 0;",
            }
        }
    }
}
