//! Content registry: `topics.toml` schema, loading, and validation.
//!
//! The entire site is described by one TOML file:
//!
//! ```toml
//! [site]                     # chrome — optional, all keys defaulted
//! name = "Mansheu Dawah"
//! base_url = "https://example.com/pages"
//!
//! [[carousel]]               # master list, shared by every page
//! slug = "charity"
//! href = "charity.html"
//! title = "Charity"
//! description = "..."
//!
//! [[topics]]                 # one entry per generated page
//! slug = "charity"
//! title = "Charity"
//! meta_description = "..."
//! share_text = "Charity Insights"
//! mail_subject = "Charity in Islam"
//!
//! [[topics.qa]]
//! question = "..."
//! answer_html = "<p>...</p>"
//!
//! [[topics.explore]]
//! href = "sincere-intention.html"
//! category = "SPIRITUALITY"
//! title = "..."
//! author = "..."
//! ```
//!
//! ## Validation
//!
//! Loading is all-or-nothing: every problem below is fatal and surfaces
//! before any output file is written.
//!
//! - Missing required field on a topic, QA entry, explore link, or carousel
//!   card (TOML deserialization error).
//! - Unknown keys anywhere (catches typos early).
//! - Duplicate topic or carousel slugs.
//! - Slugs that would produce broken filenames (empty, `/`, whitespace).
//!
//! `answer_html` is pre-formatted markup under author control. It is rendered
//! verbatim, so the content file is trusted input by contract.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate topic slug: {0}")]
    DuplicateTopicSlug(String),
    #[error("Duplicate carousel slug: {0}")]
    DuplicateCarouselSlug(String),
    #[error("Invalid slug {0:?}: {1}")]
    InvalidSlug(String, &'static str),
}

/// The full content registry loaded from `topics.toml`.
///
/// Immutable after loading — the rest of the pipeline only reads from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registry {
    /// Site-wide chrome. Optional; every key has a default.
    #[serde(default)]
    pub site: SiteChrome,
    /// Master carousel list. Each topic page renders every card except its own.
    #[serde(default)]
    pub carousel: Vec<CarouselCard>,
    /// Topic pages, in output order.
    #[serde(default)]
    pub topics: Vec<TopicPage>,
}

/// Site-wide chrome shared by every generated page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteChrome {
    /// Site name, used in the `<title>` suffix and the nav logo link.
    pub name: String,
    /// Absolute URL prefix for generated pages; share links are built from it.
    pub base_url: String,
    /// Kicker line rendered above the topic title.
    pub kicker: String,
    /// Relative path prefix for static assets (CSS, images, JS).
    pub asset_prefix: String,
    /// Stylesheet paths, relative to `asset_prefix`.
    pub stylesheets: Vec<String>,
    /// Heading above the explore-more card grid.
    pub explore_heading: String,
    /// Heading above the cross-topic carousel.
    pub carousel_heading: String,
    /// Top navigation links.
    pub nav: Vec<NavLink>,
}

impl Default for SiteChrome {
    fn default() -> Self {
        Self {
            name: "Topic Pages".to_string(),
            base_url: "https://example.com/pages".to_string(),
            kicker: "TOPICS".to_string(),
            asset_prefix: "../assets".to_string(),
            stylesheets: vec![
                "css/style.css".to_string(),
                "css/responsive.css".to_string(),
                "css/pages.css".to_string(),
            ],
            explore_heading: "Explore more on this topic".to_string(),
            carousel_heading: "More topics".to_string(),
            nav: Vec::new(),
        }
    }
}

impl SiteChrome {
    /// Canonical absolute URL for a topic page, used by the share links.
    pub fn page_url(&self, slug: &str) -> String {
        format!("{}/{}.html", self.base_url.trim_end_matches('/'), slug)
    }
}

/// One top-navigation entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub title: String,
    pub href: String,
    /// Short description rendered under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// One topic's full page-worth of content.
///
/// The slug doubles as identity and output filename stem: the page is written
/// to `<output>/<slug>.html`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicPage {
    pub slug: String,
    pub title: String,
    /// `<meta name="description">` content.
    pub meta_description: String,
    /// Text prefilled into social share messages.
    pub share_text: String,
    /// Subject line for the `mailto:` share link.
    pub mail_subject: String,
    /// Question/answer pairs, rendered as an accordion in this order.
    #[serde(default)]
    pub qa: Vec<QaEntry>,
    /// Related-article cards, rendered in this order. May be empty.
    #[serde(default)]
    pub explore: Vec<ExploreLink>,
}

/// One question/answer pair rendered as a collapsible block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QaEntry {
    pub question: String,
    /// Pre-formatted answer markup, injected without further escaping.
    pub answer_html: String,
}

/// One "explore more" card pointing at a related article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExploreLink {
    pub href: String,
    /// Uppercase category label shown above the card title.
    pub category: String,
    pub title: String,
    pub author: String,
}

/// One teaser card in the cross-topic carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselCard {
    pub slug: String,
    pub href: String,
    pub title: String,
    pub description: String,
}

// =============================================================================
// Loading and validation
// =============================================================================

/// Load and validate a content registry from a `topics.toml` file.
pub fn load_registry(path: &Path) -> Result<Registry, ContentError> {
    let raw = fs::read_to_string(path)?;
    let registry: Registry = toml::from_str(&raw)?;
    registry.validate()?;
    Ok(registry)
}

impl Registry {
    /// Check invariants the schema alone cannot express.
    ///
    /// Slugs are the primary key for topics and carousel cards, and topic
    /// slugs become output filenames, so both uniqueness and filename safety
    /// are enforced here.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for topic in &self.topics {
            validate_slug(&topic.slug)?;
            if !seen.insert(topic.slug.as_str()) {
                return Err(ContentError::DuplicateTopicSlug(topic.slug.clone()));
            }
        }

        let mut seen = HashSet::new();
        for card in &self.carousel {
            validate_slug(&card.slug)?;
            if !seen.insert(card.slug.as_str()) {
                return Err(ContentError::DuplicateCarouselSlug(card.slug.clone()));
            }
        }
        Ok(())
    }
}

fn validate_slug(slug: &str) -> Result<(), ContentError> {
    if slug.is_empty() {
        return Err(ContentError::InvalidSlug(
            slug.to_string(),
            "must not be empty",
        ));
    }
    if slug.contains('/') || slug.contains('\\') {
        return Err(ContentError::InvalidSlug(
            slug.to_string(),
            "must not contain path separators",
        ));
    }
    if slug.chars().any(char::is_whitespace) {
        return Err(ContentError::InvalidSlug(
            slug.to_string(),
            "must not contain whitespace",
        ));
    }
    Ok(())
}

/// Returns a fully-commented starter `topics.toml`.
///
/// Used by the `gen-content` CLI command.
pub fn stock_content_toml() -> &'static str {
    r##"# Topicgen content file
# =====================
# This single file describes the whole site: the shared chrome, the master
# carousel list, and every topic page. Edit it directly; no code changes are
# needed to add or reword a topic. Unknown keys are an error.

# ---------------------------------------------------------------------------
# Site chrome (all keys optional — defaults shown)
# ---------------------------------------------------------------------------
[site]
name = "Topic Pages"
base_url = "https://example.com/pages"     # share links are built from this
kicker = "TOPICS"                          # line shown above each page title
asset_prefix = "../assets"                 # where the generated pages find CSS/images
stylesheets = ["css/style.css", "css/responsive.css", "css/pages.css"]
explore_heading = "Explore more on this topic"
carousel_heading = "More topics"

# Top navigation entries. Omit for no nav links.
[[site.nav]]
title = "Read"
href = "articles.html"
desc = "Articles & written features"

# ---------------------------------------------------------------------------
# Carousel master list. Every topic page shows every card except its own
# (matched by slug), in this order.
# ---------------------------------------------------------------------------
[[carousel]]
slug = "charity"
href = "charity.html"
title = "Charity"
description = "Why giving purifies wealth and builds a compassionate society."

# ---------------------------------------------------------------------------
# Topic pages. One output file per entry: pages/<slug>.html.
# slug, title, meta_description, share_text and mail_subject are required.
# ---------------------------------------------------------------------------
[[topics]]
slug = "charity"
title = "Charity"
meta_description = "Learn how giving purifies wealth and empowers society."
share_text = "Charity Insights"
mail_subject = "Charity"

# Question/answer pairs, rendered as an accordion in this order.
# answer_html is trusted pre-formatted markup — it is NOT escaped.
[[topics.qa]]
question = "What does charity mean?"
answer_html = "<p><strong>Charity is an act of love and justice.</strong> It softens the heart and cures greed.</p>"

# Related-article cards, rendered in this order. May be omitted entirely.
[[topics.explore]]
href = "sincere-intention.html"
category = "SPIRITUALITY"
title = "Purifying Intention Before Giving"
author = "Editorial Team"
"##
}
