//! Thin wrappers over the Pico.css layout primitives used by the app.
//! Pico is linked from the App root, so these only emit the expected markup.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A centered container for page content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

#[derive(Props, PartialEq, Clone)]
pub struct CardProps {
    #[props(default)]
    title: String,
    children: Element,
}

/// A card grouping related content, with a header when `title` is non-empty.
/// Wraps content in an `<article>` element.
pub fn Card(props: CardProps) -> Element {
    rsx! {
        article {
            if !props.title.is_empty() {
                header {
                    h3 { style: "margin-bottom: 0;", "{props.title}" }
                }
            }
            {props.children}
        }
    }
}
