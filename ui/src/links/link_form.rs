use dioxus::{
    logger::tracing::{info, warn},
    prelude::*,
};
use linkshort_shared::{
    datatypes::Notification,
    form::{LinkForm, SLUG_MAX_LENGTH, SLUG_MIN_LENGTH, SubmitPhase},
};

use crate::{
    ShortenerContext,
    links::{LINKS_CSS, share_link::ShareLink},
    toasts::Notify as _,
};

/// Two inputs, a submit button and the link that was created last.
#[component]
pub fn LinkCreationForm(error: String) -> Element {
    let ShortenerContext { site, mut toasts } = use_context::<ShortenerContext>();
    let mut form = use_signal(LinkForm::new);

    // hooks run once per mount, later renders and later `error` values are ignored
    use_hook(move || {
        if let Some(notification) = Notification::from_query_error(Some(error.as_str())) {
            toasts.notify(notification);
        }
    });

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let request = form.write().begin_submit();
        info!("Submitting {:?}", request);
        let outcome = backend::link_api::create_link(request.clone()).await;
        if let Err(e) = &outcome {
            warn!("Failed to create link {:?}: {}", request.slug, e);
        }
        let notification = form.write().settle(request, outcome);
        toasts.notify(notification);
    };

    let fields = form.read().fields().clone();
    let preview = form.read().preview_link(&site.read());
    let submit_label = match form.read().phase() {
        SubmitPhase::Idle => "Submit",
        SubmitPhase::Submitting => "Submitting...",
    };

    rsx! {
        document::Stylesheet { href: LINKS_CSS }
        form { class: "link-form", onsubmit: on_submit,
            input {
                class: "input",
                r#type: "text",
                placeholder: "Slug",
                value: "{fields.slug}",
                min: "{SLUG_MIN_LENGTH}",
                max: "{SLUG_MAX_LENGTH}",
                oninput: move |e| {
                    form.write().update_slug(e.value());
                },
            }
            input {
                class: "input",
                r#type: "text",
                placeholder: "Url",
                value: "{fields.url}",
                oninput: move |e| {
                    form.write().update_url(e.value());
                },
            }
            button { class: "button is-primary", r#type: "submit", "{submit_label}" }
        }
        ShareLink { form, preview }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use dioxus::dioxus_core::NoOpMutations;
    use linkshort_shared::config::SiteConfig;

    use super::*;

    thread_local! {
        static CONTEXT: RefCell<Option<ShortenerContext>> = const { RefCell::new(None) };
    }

    #[component]
    fn Harness(error: String) -> Element {
        let context = use_context_provider(|| ShortenerContext::new(SiteConfig::default()));
        CONTEXT.with(|c| *c.borrow_mut() = Some(context));
        rsx! {
            LinkCreationForm { error }
        }
    }

    fn mount(error: &str) -> (VirtualDom, ShortenerContext) {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                error: error.to_string(),
            },
        );
        dom.rebuild_in_place();
        let context = CONTEXT.with(|c| (*c.borrow()).expect("harness rendered"));
        (dom, context)
    }

    /// Change the site origin the form reads, which renders it again.
    fn rerender(dom: &mut VirtualDom, context: ShortenerContext, origin: &str) {
        dom.in_runtime(|| {
            let mut site = context.site;
            site.set(SiteConfig::new(origin));
        });
        dom.process_events();
        dom.render_immediate(&mut NoOpMutations);
    }

    fn shown(dom: &VirtualDom, context: ShortenerContext) -> Vec<Notification> {
        dom.in_runtime(|| {
            context
                .toasts
                .read()
                .iter()
                .map(|toast| toast.notification.clone())
                .collect()
        })
    }

    #[test]
    fn query_error_is_shown_once() {
        let (mut dom, context) = mount("BadSlug");
        assert_eq!(shown(&dom, context), vec![Notification::error("BadSlug")]);

        for origin in ["https://a.example", "https://b.example", "https://c.example"] {
            rerender(&mut dom, context, origin);
        }
        assert_eq!(shown(&dom, context), vec![Notification::error("BadSlug")]);
    }

    #[test]
    fn no_query_error_shows_nothing() {
        let (mut dom, context) = mount("");
        rerender(&mut dom, context, "https://a.example");
        assert!(shown(&dom, context).is_empty());
    }
}
