//! This crate contains all shared UI for the workspace.

pub mod home;
mod links;
pub mod navbar;
pub mod toasts;

use dioxus::signals::Signal;
use linkshort_shared::config::SiteConfig;
pub use links::LinkCreationForm;
pub use navbar::Navbar;
use toasts::Toasts;

/// Provided once by the launcher and read by every page.
#[derive(Clone, Copy)]
pub struct ShortenerContext {
    pub site: Signal<SiteConfig>,
    pub toasts: Signal<Toasts>,
}

impl ShortenerContext {
    /// Must be called from within a component, e.g. in `use_context_provider`.
    #[must_use]
    pub fn new(site: SiteConfig) -> Self {
        Self {
            site: Signal::new(site),
            toasts: Signal::new(Toasts::default()),
        }
    }
}
