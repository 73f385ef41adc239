use dioxus::prelude::*;

fn main() {
    dioxus::logger::init(ui::prefs::log_level()).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
