//! Page writing: renders every topic in the registry and persists the result.
//!
//! One pass over the registry in its defined order. Each topic is rendered
//! independently and written to `<output>/<slug>.html` with overwrite
//! semantics, so rebuilding with unchanged content produces byte-identical
//! files. Output directory creation is idempotent.
//!
//! The first I/O failure aborts the remaining batch. There is no retry and
//! no rollback of files already written — none of the failure modes here
//! (permissions, disk full) are transient.

use crate::content::Registry;
use crate::render;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Summary of one build run, consumed by the output module.
#[derive(Debug)]
pub struct BuildReport {
    pub pages: Vec<WrittenPage>,
}

/// One page written during a build.
#[derive(Debug)]
pub struct WrittenPage {
    pub slug: String,
    pub title: String,
    pub path: PathBuf,
    pub qa_count: usize,
}

/// Render every topic page and write it under `output_dir`.
pub fn generate(registry: &Registry, output_dir: &Path) -> Result<BuildReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let mut pages = Vec::with_capacity(registry.topics.len());
    for topic in &registry.topics {
        let markup = render::render_topic_page(&registry.site, &registry.carousel, topic);
        let path = output_dir.join(format!("{}.html", topic.slug));
        fs::write(&path, markup.into_string())?;
        pages.push(WrittenPage {
            slug: topic.slug.clone(),
            title: topic.title.clone(),
            path,
            qa_count: topic.qa.len(),
        });
    }

    Ok(BuildReport { pages })
}
