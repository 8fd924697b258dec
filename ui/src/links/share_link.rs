use dioxus::{
    logger::tracing::{trace, warn},
    prelude::*,
};
use linkshort_shared::form::LinkForm;

use crate::{ShortenerContext, links::generate_svg_qr_from_url, toasts::Notify as _};

const CLIPBOARD_SVG: Asset = asset!("/assets/clipboard.svg");

/// The preview of the link being typed and the copy action for the recent one.
#[component]
pub(crate) fn ShareLink(form: Signal<LinkForm>, preview: String) -> Element {
    let ShortenerContext { site, mut toasts } = use_context::<ShortenerContext>();
    let qr_code_svg = use_memo(move || generate_svg_qr_from_url(&form.read().share_link(&site.read())));

    let copy_to_clipboard = move |_: MouseEvent| {
        let (link, confirmation) = form.read().copy(&site.read());
        toasts.notify(confirmation);
        spawn(async move {
            write_clipboard(link).await;
        });
    };

    rsx! {
        div { class: "share-link",
            "To Visit Use "
            a { href: "{preview}",
                span { class: "link-preview", "{preview}" }
            }
            div { class: "copy-recent", onclick: copy_to_clipboard,
                "Copy Recent To Clipboard "
                img { src: CLIPBOARD_SVG, class: "clipboardicon" }
            }
            div { class: "share-qr", dangerous_inner_html: qr_code_svg }
        }
    }
}

/// Fire and forget: a failed write is only logged.
async fn write_clipboard(text: String) {
    trace!("Copying {} to the clipboard", text);
    let quoted = match serde_json::to_string(&text) {
        Ok(quoted) => quoted,
        Err(e) => {
            warn!("Failed to encode {:?} for the clipboard: {}", text, e);
            return;
        }
    };
    if let Err(e) = document::eval(&format!("await navigator.clipboard.writeText({quoted});")).await {
        warn!("Failed to write to the clipboard: {:?}", e);
    }
}
