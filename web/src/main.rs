use dioxus::prelude::*;

use linkshort_shared::config::SiteConfig;
use ui::ShortenerContext;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(App);
    #[cfg(feature = "server")]
    backend::launch_linkshort(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| ShortenerContext::new(SiteConfig::from_build_env()));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<ui::navbar::Route> {}
    }
}
