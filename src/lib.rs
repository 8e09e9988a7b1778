//! # Topicgen
//!
//! A minimal static site generator for Q&A topic pages. One declarative
//! content file (`topics.toml`) describes the site chrome and a registry of
//! topics — question/answer accordions, "explore more" cards, and a
//! cross-topic carousel — and the generator renders one standalone HTML
//! document per topic into `pages/<slug>.html`.
//!
//! # Architecture: Load → Render → Write
//!
//! ```text
//! 1. Load      topics.toml  →  Registry     (TOML → validated data)
//! 2. Render    Registry     →  Markup       (maud fragments per topic)
//! 3. Write     Markup       →  pages/       (one file per slug)
//! ```
//!
//! The pipeline is single-threaded and strictly linear: every stage is a pure
//! function of its input except the final write. Running it twice over the
//! same content file produces byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | `topics.toml` loading, schema types, fail-fast validation |
//! | [`share`] | Percent-encoded share links (Facebook, Twitter, WhatsApp, mail, copy) |
//! | [`render`] | Maud fragment builders and the per-topic page assembler |
//! | [`generate`] | Writes rendered pages to the output directory |
//! | [`output`] | CLI output formatting for build and check runs |
//!
//! # Design Decisions
//!
//! ## Content as Data, Not Code
//!
//! Topic content lives in a single `topics.toml` the author edits directly.
//! Editing a question or a carousel card never touches Rust code, and a
//! malformed or incomplete record fails validation before a single file is
//! written — all-or-nothing, no partially built site.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, insertion points are
//! checked by the compiler rather than by convention, and all interpolation
//! is auto-escaped. The single deliberate exception is `answer_html`, which
//! is author-controlled pre-formatted markup and passes through unescaped.
//!
//! ## No Incremental Builds
//!
//! Output files are rewritten from scratch on every run. The site is a
//! handful of pages; correctness of a full rebuild beats the complexity of
//! change tracking at this scale.

pub mod content;
pub mod generate;
pub mod output;
pub mod render;
pub mod share;

#[cfg(test)]
pub(crate) mod test_helpers;
