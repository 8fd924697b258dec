//! Vanishing notifications stacked in a corner of the page.
#[cfg(target_arch = "wasm32")]
use std::time::Duration;

use dioxus::{
    logger::tracing::{info, warn},
    prelude::*,
};
use linkshort_shared::datatypes::{Notification, NotificationLevel};

use crate::ShortenerContext;

const TOASTS_CSS: Asset = asset!("/assets/styling/toasts.css");
#[cfg(target_arch = "wasm32")]
const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// The notifications currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toasts {
    next_id: u64,
    shown: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.shown.push(Toast { id, notification });
        id
    }

    /// Remove the toast with `id`. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.shown.len();
        self.shown.retain(|toast| toast.id != id);
        self.shown.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.shown.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }
}

/// Display a [`Notification`] to the user.
pub trait Notify {
    fn notify(&mut self, notification: Notification);
}

impl Notify for Signal<Toasts> {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => info!("Notify: {}", notification.text),
            NotificationLevel::Error => warn!("Notify: {}", notification.text),
        }
        let id = self.write().push(notification);
        // timers only exist in the browser, server rendered toasts stay until hydration
        #[cfg(target_arch = "wasm32")]
        {
            let mut toasts = *self;
            spawn(async move {
                wasmtimer::tokio::sleep(TOAST_LIFETIME).await;
                toasts.write().dismiss(id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> Element {
    let ShortenerContext { toasts, .. } = use_context::<ShortenerContext>();
    let shown: Vec<Toast> = toasts.read().iter().cloned().collect();

    rsx! {
        document::Stylesheet { href: TOASTS_CSS }
        div { class: "toaster",
            for toast in shown {
                ToastView { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastView(toast: Toast) -> Element {
    let ShortenerContext { mut toasts, .. } = use_context::<ShortenerContext>();
    let class = match toast.notification.level {
        NotificationLevel::Success => "notification is-success toast",
        NotificationLevel::Error => "notification is-danger toast",
    };
    let id = toast.id;

    rsx! {
        div {
            class: "{class}",
            role: "status",
            onclick: move |_| {
                toasts.write().dismiss(id);
            },
            "{toast.notification.text}"
        }
    }
}
