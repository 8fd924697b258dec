use crate::{home::Home, toasts::Toaster};
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(WebNavbar)]
    // a redirect that could not be served comes back here with `?error=...`
    #[route("/?:error")]
    Home { error: String },
    // PageNotFound is a catch all route that will match any route and placing the matched segments in the route field
    #[route("/:..route")]
    PageNotFound { route: Vec<String> },
}

#[component]
pub fn Navbar() -> Element {
    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }
        nav {
            ol {
                li {
                    Link {
                        to: Route::Home {
                            error: String::new(),
                        },
                        "Link Shortener"
                    }
                }
            }
        }
    }
}

#[component]
pub fn WebNavbar() -> Element {
    rsx! {
        Navbar {}
        Toaster {}
        Outlet::<Route> {}
    }
}

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        div { class: "container",
            div { class: "section",
                div { class: "columns is-centered",
                    div { class: "column is-half",
                        div { class: "notification is-danger",
                            h1 { class: "title", "404 - Page not found" }
                            p { class: "subtitle", "The page you requested could not be found." }
                            p { "Requested route: {route.join(\"/\")}" }
                        }
                    }
                }
            }
        }
    }
}
