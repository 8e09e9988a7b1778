//! HTML rendering: fragment builders and the per-topic page assembler.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every dynamic value is auto-escaped except [`QaEntry::answer_html`], which
//! is author-controlled markup and passes through as [`PreEscaped`].
//!
//! ## Document Layout
//!
//! Each topic page is a fixed shell with five dynamic regions:
//!
//! ```text
//! <head>            title, meta description, stylesheet links
//! header section    kicker, <h1>, share icon row
//! Q&A section       one collapsible block per QaEntry, in input order
//! explore section   one card per ExploreLink, in input order
//! carousel section  every master card except the current page's own
//! share footer      same five share targets, footer styling
//! </body>           embedded interaction script
//! ```
//!
//! The footer script (accordion toggling, carousel scrolling, copy-link) is
//! embedded at compile time from `static/topics.js` — no runtime template or
//! asset lookup can fail.
//!
//! All builders here are pure: same input, same markup, byte for byte.

use crate::content::{CarouselCard, ExploreLink, QaEntry, SiteChrome, TopicPage};
use crate::share;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const FOOTER_JS: &str = include_str!("../static/topics.js");

const FONT_AWESOME_HREF: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

// ============================================================================
// Fragment builders
// ============================================================================

/// Renders the Q&A accordion: one collapsed block per entry, numbered from 1
/// in input order. Order is display order — never sorted.
pub fn qa_accordion(entries: &[QaEntry]) -> Markup {
    html! {
        div.qa-accordion {
            @for (idx, entry) in entries.iter().enumerate() {
                div.qa-item data-qa-index=((idx + 1)) {
                    button.qa-header aria-expanded="false" {
                        span.qa-question { (entry.question) }
                        i.fas.fa-chevron-down.qa-icon {}
                    }
                    div.qa-content {
                        (PreEscaped(&entry.answer_html))
                    }
                }
            }
        }
    }
}

/// Renders the explore-more card grid in input order.
///
/// An empty list produces an empty grid container, not an error.
pub fn explore_grid(links: &[ExploreLink], asset_prefix: &str) -> Markup {
    html! {
        div.explore-grid {
            @for link in links {
                a.explore-card href=(link.href) {
                    div.explore-image {
                        img src={ (asset_prefix) "/images/placeholder.jpg" } alt=(link.title) loading="lazy";
                    }
                    span.explore-category { (link.category) }
                    h3.explore-card-title { (link.title) }
                    p.explore-author { (link.author) }
                }
            }
        }
    }
}

/// Renders the cross-topic carousel from the master card list.
///
/// The card whose slug matches `current_slug` is skipped — a page never links
/// to itself — and master-list order is preserved otherwise.
pub fn carousel(cards: &[CarouselCard], current_slug: &str) -> Markup {
    html! {
        div.carousel {
            @for card in cards.iter().filter(|c| c.slug != current_slug) {
                a.carousel-card href=(card.href) {
                    h3.carousel-card-title { (card.title) }
                    div.carousel-card-divider {}
                    p.carousel-card-text { (card.description) }
                }
            }
        }
    }
}

/// Renders the top navigation bar from the chrome config.
fn site_nav(chrome: &SiteChrome) -> Markup {
    html! {
        div.menu-bar {
            a.site-logo href="../index.html" title=(chrome.name) { (chrome.name) }
            ul.navigation {
                @for link in &chrome.nav {
                    li {
                        a href=(link.href) {
                            span.nav-title { (link.title) }
                            @if let Some(desc) = &link.desc {
                                span.nav-desc { (desc) }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page assembler
// ============================================================================

/// Assembles one complete HTML document for a topic page.
pub fn render_topic_page(
    chrome: &SiteChrome,
    cards: &[CarouselCard],
    topic: &TopicPage,
) -> Markup {
    let page_url = chrome.page_url(&topic.slug);
    let share_header = share::share_icons(
        &page_url,
        &topic.share_text,
        &topic.mail_subject,
        "share-icon",
    );
    let share_footer = share::share_icons(
        &page_url,
        &topic.share_text,
        &topic.mail_subject,
        "share-this-icon",
    );

    html! {
        (DOCTYPE)
        html lang="en" dir="ltr" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="color-scheme" content="light dark";
                title { (topic.title) " - " (chrome.name) }
                meta name="description" content=(topic.meta_description);
                @for sheet in &chrome.stylesheets {
                    link rel="stylesheet" href={ (chrome.asset_prefix) "/" (sheet) };
                }
                link rel="stylesheet" href=(FONT_AWESOME_HREF);
            }
            body.topic-page {
                header { (site_nav(chrome)) }
                main id="main-content" {
                    section.topic-header {
                        div.container {
                            p.topic-kicker { (chrome.kicker) }
                            h1.topic-title { (topic.title) }
                            div.topic-divider {}
                            div.topic-share {
                                span.share-label { "Share:" }
                                (share_header)
                            }
                        }
                    }
                    section.topic-qa-section {
                        div.container {
                            (qa_accordion(&topic.qa))
                        }
                    }
                    section.explore-section {
                        div.container {
                            h2.explore-heading { (chrome.explore_heading) }
                            div.explore-divider {}
                            (explore_grid(&topic.explore, &chrome.asset_prefix))
                        }
                    }
                    section.carousel-section {
                        div.container {
                            h2.carousel-heading { (chrome.carousel_heading) }
                            div.carousel-wrapper {
                                button.carousel-btn.carousel-btn-prev aria-label="Previous" {
                                    i.fas.fa-chevron-left {}
                                }
                                (carousel(cards, &topic.slug))
                                button.carousel-btn.carousel-btn-next aria-label="Next" {
                                    i.fas.fa-chevron-right {}
                                }
                            }
                        }
                    }
                    section.share-section {
                        div.container {
                            div.share-this {
                                h3.share-this-heading { "Share this" }
                                div.share-this-divider {}
                                div.share-this-icons {
                                    (share_footer)
                                }
                            }
                        }
                    }
                }
                script { (PreEscaped(FOOTER_JS)) }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
