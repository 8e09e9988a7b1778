//! Shared test fixtures for the topicgen test suite.
//!
//! Builders for chrome, topics, and carousel cards with predictable content:
//! `sample_topic("charity", 3)` yields questions "Question 1 about charity?"
//! through "Question 3 about charity?", so tests can assert on ordering and
//! counts without hand-writing fixtures.

use crate::content::{CarouselCard, ExploreLink, NavLink, QaEntry, Registry, SiteChrome, TopicPage};

/// Chrome with a stable name and one nav link.
pub fn sample_chrome() -> SiteChrome {
    SiteChrome {
        name: "Test Site".to_string(),
        nav: vec![NavLink {
            title: "Read".to_string(),
            href: "articles.html".to_string(),
            desc: Some("Articles & written features".to_string()),
        }],
        ..SiteChrome::default()
    }
}

/// A topic with `qa_count` numbered QA entries and two explore links.
pub fn sample_topic(slug: &str, qa_count: usize) -> TopicPage {
    let title = capitalize(slug);
    TopicPage {
        slug: slug.to_string(),
        title: title.clone(),
        meta_description: format!("About {slug}."),
        share_text: format!("{title} Insights"),
        mail_subject: title,
        qa: (1..=qa_count)
            .map(|n| QaEntry {
                question: format!("Question {n} about {slug}?"),
                answer_html: format!("<p><strong>Answer {n}.</strong> Detail for {slug}.</p>"),
            })
            .collect(),
        explore: vec![
            ExploreLink {
                href: "sincere-intention.html".to_string(),
                category: "SPIRITUALITY".to_string(),
                title: "Purifying Intention".to_string(),
                author: "Editorial Team".to_string(),
            },
            ExploreLink {
                href: "social-interactions.html".to_string(),
                category: "COMMUNITY".to_string(),
                title: "Serving Neighbors".to_string(),
                author: "Editorial Team".to_string(),
            },
        ],
    }
}

/// Master carousel cards `topic-1` .. `topic-n`, in order.
pub fn sample_cards(n: usize) -> Vec<CarouselCard> {
    (1..=n)
        .map(|i| CarouselCard {
            slug: format!("topic-{i}"),
            href: format!("topic-{i}.html"),
            title: format!("Topic {i}"),
            description: format!("Teaser for topic {i}."),
        })
        .collect()
}

/// A registry with the given topics and a card per topic plus one extra.
pub fn sample_registry(topic_slugs: &[&str], qa_count: usize) -> Registry {
    let mut carousel: Vec<CarouselCard> = topic_slugs
        .iter()
        .map(|slug| CarouselCard {
            slug: slug.to_string(),
            href: format!("{slug}.html"),
            title: capitalize(slug),
            description: format!("Teaser for {slug}."),
        })
        .collect();
    carousel.push(CarouselCard {
        slug: "elsewhere".to_string(),
        href: "elsewhere.html".to_string(),
        title: "Elsewhere".to_string(),
        description: "A card with no page of its own.".to_string(),
    });

    Registry {
        site: sample_chrome(),
        carousel,
        topics: topic_slugs
            .iter()
            .map(|slug| sample_topic(slug, qa_count))
            .collect(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
