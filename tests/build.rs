//! End-to-end build tests: topics.toml on disk → generated pages on disk.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use topicgen::{content, generate};

/// A content file with 9 carousel cards and one 3-question topic.
fn charity_content() -> String {
    let mut toml = String::from(
        r#"
[site]
name = "Mansheu Dawah"
base_url = "https://mansheudawah.com/pages"
"#,
    );
    let slugs = [
        "basics-of-islam",
        "hajj-umrah",
        "ramadan",
        "shariah",
        "health-wellness",
        "charity",
        "peace-violence",
        "women",
        "men",
    ];
    for slug in slugs {
        toml.push_str(&format!(
            r#"
[[carousel]]
slug = "{slug}"
href = "{slug}.html"
title = "{slug}"
description = "Teaser for {slug}."
"#
        ));
    }
    toml.push_str(
        r#"
[[topics]]
slug = "charity"
title = "Charity"
meta_description = "About giving."
share_text = "Charity Insights"
mail_subject = "Charity in Islam"

[[topics.qa]]
question = "What does charity mean?"
answer_html = "<p>One.</p>"

[[topics.qa]]
question = "How are zakat and sadaqah different?"
answer_html = "<p>Two.</p>"

[[topics.qa]]
question = "Why is zakat a pillar?"
answer_html = "<p>Three.</p>"
"#,
    );
    toml
}

fn build(content_toml: &str, out: &Path) -> generate::BuildReport {
    let tmp_content = TempDir::new().unwrap();
    let path = tmp_content.path().join("topics.toml");
    fs::write(&path, content_toml).unwrap();
    let registry = content::load_registry(&path).unwrap();
    generate::generate(&registry, out).unwrap()
}

#[test]
fn charity_scenario() {
    let out = TempDir::new().unwrap();
    let report = build(&charity_content(), out.path());

    assert_eq!(report.pages.len(), 1);
    let html = fs::read_to_string(out.path().join("charity.html")).unwrap();

    // 3 QA entries → 3 accordion blocks
    assert_eq!(html.matches(r#"class="qa-item""#).count(), 3);
    // 9 master cards minus self → 8 carousel cards
    assert_eq!(html.matches(r#"class="carousel-card""#).count(), 8);
    assert!(!html.contains(r#"href="charity.html""#));
    // Exactly one document title and header occurrence of the topic title
    assert_eq!(html.matches("<title>").count(), 1);
    assert!(html.contains("<title>Charity - Mansheu Dawah</title>"));
    assert_eq!(html.matches("<h1").count(), 1);
}

#[test]
fn empty_explore_list_renders_empty_grid() {
    let out = TempDir::new().unwrap();
    build(&charity_content(), out.path());
    let html = fs::read_to_string(out.path().join("charity.html")).unwrap();

    assert!(html.contains(r#"<div class="explore-grid"></div>"#));
    assert!(!html.contains("explore-card\""));
}

#[test]
fn share_links_use_encoded_page_url() {
    let out = TempDir::new().unwrap();
    build(&charity_content(), out.path());
    let html = fs::read_to_string(out.path().join("charity.html")).unwrap();

    assert!(html.contains(
        "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fmansheudawah.com%2Fpages%2Fcharity.html"
    ));
    assert!(html.contains("text=Charity+Insights"));
    assert!(html.contains(r#"data-copy-link="https://mansheudawah.com/pages/charity.html""#));
}

#[test]
fn rebuilding_unchanged_content_is_byte_identical() {
    let out = TempDir::new().unwrap();
    let content_toml = charity_content();

    build(&content_toml, out.path());
    let first = fs::read(out.path().join("charity.html")).unwrap();
    build(&content_toml, out.path());
    let second = fs::read(out.path().join("charity.html")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn invalid_content_fails_before_any_write() {
    let tmp_content = TempDir::new().unwrap();
    let path = tmp_content.path().join("topics.toml");
    // Duplicate topic slug
    fs::write(
        &path,
        r#"
[[topics]]
slug = "charity"
title = "Charity"
meta_description = "a"
share_text = "b"
mail_subject = "c"

[[topics]]
slug = "charity"
title = "Charity Again"
meta_description = "a"
share_text = "b"
mail_subject = "c"
"#,
    )
    .unwrap();

    let err = content::load_registry(&path).unwrap_err();
    assert!(matches!(err, content::ContentError::DuplicateTopicSlug(_)));
}

#[test]
fn missing_required_field_fails_at_load() {
    let tmp_content = TempDir::new().unwrap();
    let path = tmp_content.path().join("topics.toml");
    fs::write(
        &path,
        r#"
[[topics]]
slug = "charity"
title = "Charity"
"#,
    )
    .unwrap();

    assert!(matches!(
        content::load_registry(&path),
        Err(content::ContentError::Toml(_))
    ));
}

#[test]
fn shipped_sample_content_builds() {
    let sample = Path::new(env!("CARGO_MANIFEST_DIR")).join("content/topics.toml");
    let registry = content::load_registry(&sample).unwrap();
    assert_eq!(registry.carousel.len(), 9);
    assert!(!registry.topics.is_empty());

    let out = TempDir::new().unwrap();
    let report = generate::generate(&registry, out.path()).unwrap();
    assert_eq!(report.pages.len(), registry.topics.len());

    // Self-exclusion holds for every shipped topic that has a carousel card
    for page in &report.pages {
        let html = fs::read_to_string(&page.path).unwrap();
        let expected = registry
            .carousel
            .iter()
            .filter(|c| c.slug != page.slug)
            .count();
        assert_eq!(
            html.matches(r#"class="carousel-card""#).count(),
            expected,
            "carousel count wrong for {}",
            page.slug
        );
    }
}
