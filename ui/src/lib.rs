// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
pub mod geo;
mod hooks;
pub mod prefs;
pub mod toggle;

use app_state::AppState;
use components::image_toggle::ImageToggle;
use components::map_view::MapView;
use components::pico::Card;
use components::pico::Container;
use prefs::app_prefs::AppPrefs;

/// The image the demo toggle swaps to when clicked.
const DEMO_ALTERNATE_IMAGE: &str = "https://placekitten.com/1000/1000";

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        document::Stylesheet {
            href: asset!("/assets/css/app.css"),
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Prefs are read once per app instance.
    let app_state = use_hook(|| {
        let prefs = AppPrefs::from_env();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        AppState::new(prefs)
    });

    rsx! {
        LoadedApp {
            app_state,
        }
    }
}

/// The page layout, rendered against an already resolved `AppState`.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());
    let map = app_state.prefs.map();

    rsx! {
        Container {
            header {
                h1 { "Kitten Map" }
            }
            Card {
                title: "Click the kitten",
                ImageToggle {
                    alternate_source: "{DEMO_ALTERNATE_IMAGE}",
                }
            }
            Card {
                title: "Map ({map.center()}, zoom {map.zoom().get()})",
                MapView {}
            }
        }
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use crate::prefs::ZOOM_VAR;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn app_renders_both_components() {
        fn Harness() -> Element {
            rsx! {
                LoadedApp { app_state: AppState::new(AppPrefs::default()) }
            }
        }

        let html = render(Harness);
        assert!(html.contains("class=\"cat-image\""), "{html}");
        assert!(html.contains("openstreetmap.org/export/embed.html"), "{html}");
        assert!(html.contains("<main class=\"container\">"), "{html}");
        assert!(html.contains("zoom 11"), "{html}");
    }

    #[test]
    fn layout_follows_given_prefs() {
        fn Harness() -> Element {
            let lookup = |key: &str| (key == ZOOM_VAR).then(|| "3".to_string());
            let prefs = AppPrefs::from_lookup(&lookup).unwrap();
            rsx! {
                LoadedApp { app_state: AppState::new(prefs) }
            }
        }

        let html = render(Harness);
        assert!(html.contains("zoom 3"), "{html}");
    }
}
