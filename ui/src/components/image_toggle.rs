use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::hooks::use_image_toggle::use_image_toggle;
use crate::toggle::ImageSources;

/// An image that swaps between a default source and `alternate_source` each time it is clicked.
///
/// The default comes from the image prefs unless `default_source` is given.
/// Neither URL is validated; a broken one is left to the browser.
#[component]
pub fn ImageToggle(alternate_source: String, default_source: Option<String>) -> Element {
    let app_state = use_context::<AppState>();
    let toggle = use_image_toggle();

    let default_source = default_source
        .unwrap_or_else(|| app_state.prefs.image().default_source().to_owned());
    let sources = ImageSources::new(default_source, alternate_source);
    let src = toggle.active_source(&sources);
    let pressed = toggle.phase().is_alternate_active();

    rsx! {
        div {
            class: "cat-image",
            img {
                src: "{src}",
                "aria-pressed": "{pressed}",
                onclick: move |_| toggle.activate(),
            }
        }
    }
}
