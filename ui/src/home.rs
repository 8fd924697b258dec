use dioxus::prelude::*;

use crate::links::LinkCreationForm;

/// The only page: `error` is the optional query parameter the page was opened with.
#[component]
pub fn Home(error: String) -> Element {
    rsx! {
        main { class: "shortener",
            h1 { class: "title", "Link Shortener" }
            LinkCreationForm { error }
        }
    }
}
