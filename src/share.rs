//! Share-link building with percent-encoded query parameters.
//!
//! Every topic page carries the same five share anchors twice — once in the
//! blue header, once in the "Share this" footer — differing only by icon
//! class. Targets:
//!
//! - Facebook (`sharer.php?u=<url>`)
//! - Twitter/X (`intent/tweet?url=<url>&text=<text>`)
//! - WhatsApp (`send?text=<text - url>` as a single parameter)
//! - Email (`mailto:?subject=<subject>&body=<url>`)
//! - Copy link (no navigation; the URL rides in `data-copy-link` for the
//!   clipboard script)
//!
//! Encoding uses form-urlencoding conventions: ASCII alphanumerics and
//! `-_.~` pass through, spaces become `+`, everything else is
//! percent-encoded. Callers guarantee `page_url` is a valid absolute URL; no
//! validation happens here.

use maud::{Markup, html};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left verbatim in a query value: alphanumerics plus `-_.~`.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query parameter value, with spaces as `+`.
pub fn encode_query(value: &str) -> String {
    utf8_percent_encode(value, QUERY)
        .to_string()
        .replace("%20", "+")
}

/// Render the five share anchors for one placement.
///
/// `icon_class` distinguishes the header row from the footer row; everything
/// else is identical between the two.
pub fn share_icons(
    page_url: &str,
    share_text: &str,
    mail_subject: &str,
    icon_class: &str,
) -> Markup {
    let encoded_url = encode_query(page_url);
    let encoded_text = encode_query(share_text);
    let whatsapp_text = encode_query(&format!("{share_text} - {page_url}"));
    let encoded_subject = encode_query(mail_subject);

    let facebook = format!("https://www.facebook.com/sharer/sharer.php?u={encoded_url}");
    let twitter = format!("https://twitter.com/intent/tweet?url={encoded_url}&text={encoded_text}");
    let whatsapp = format!("https://api.whatsapp.com/send?text={whatsapp_text}");
    let mail = format!("mailto:?subject={encoded_subject}&body={encoded_url}");

    html! {
        a href=(facebook) target="_blank" rel="noopener" class=(icon_class) aria-label="Share on Facebook" {
            i.fab.fa-facebook-f {}
        }
        a href=(twitter) target="_blank" rel="noopener" class=(icon_class) aria-label="Share on Twitter" {
            i.fab.fa-twitter {}
        }
        a href=(whatsapp) target="_blank" rel="noopener" class=(icon_class) aria-label="Share on WhatsApp" {
            i.fab.fa-whatsapp {}
        }
        a href=(mail) class=(icon_class) aria-label="Share via Email" {
            i.fas.fa-envelope {}
        }
        a href="#" class=(icon_class) data-copy-link=(page_url) aria-label="Copy Link" {
            i.fas.fa-link {}
        }
    }
}
