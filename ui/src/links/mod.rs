mod link_form;
mod share_link;

use dioxus::{logger::tracing::info, prelude::*};
use fast_qr::{
    QRBuilder,
    convert::{Builder as _, Shape, svg::SvgBuilder},
};

pub use link_form::LinkCreationForm;

const LINKS_CSS: Asset = asset!("/assets/styling/shortener.css");

/// generate a svg qr-code for a url
fn generate_svg_qr_from_url(url: &str) -> String {
    match QRBuilder::new(url).ecl(fast_qr::ECL::L).build() {
        Ok(qrcode) => SvgBuilder::default().shape(Shape::Square).to_str(&qrcode),
        Err(e) => {
            info!("Failed to create QR code for {}: {:?}", url, e);
            String::new()
        }
    }
}
