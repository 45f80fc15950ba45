use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use chronicle_core::models::article::NewArticle;

use crate::source::ContentSource;
use crate::templates::{TEMPLATES, Template};

/// Number of templates inserted when seeding an empty store.
pub const INITIAL_BATCH_SIZE: usize = 3;

/// Candidate title prefixes. One is drawn per article but never applied.
pub const TITLE_PREFIXES: [&str; 5] = [
    "A deep dive into",
    "Exploring",
    "Understanding",
    "The future of",
    "Rethinking",
];

/// Content source backed by the built-in [`TEMPLATES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateLibrary;

impl TemplateLibrary {
    pub fn new() -> Self {
        Self
    }

    pub fn templates(&self) -> &'static [Template] {
        &TEMPLATES
    }

    /// Pick one template uniformly at random.
    pub fn pick(&self) -> NewArticle {
        self.pick_with(&mut rand::rng())
    }

    /// Pick one template uniformly at random using `rng`.
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> NewArticle {
        // TEMPLATES is never empty
        let template = TEMPLATES.choose(rng).unwrap_or(&TEMPLATES[0]);
        variation(template, rng)
    }

    /// The first [`INITIAL_BATCH_SIZE`] templates, in library order.
    pub fn pick_initial_batch(&self) -> Vec<NewArticle> {
        let mut rng = rand::rng();
        TEMPLATES[..INITIAL_BATCH_SIZE]
            .iter()
            .map(|template| variation(template, &mut rng))
            .collect()
    }
}

impl ContentSource for TemplateLibrary {
    fn produce(&self) -> NewArticle {
        self.pick()
    }

    fn initial_batch(&self) -> Vec<NewArticle> {
        self.pick_initial_batch()
    }
}

/// Build the insert record for `template`. The drawn prefix is only
/// logged; titles are stored exactly as written.
fn variation<R: Rng + ?Sized>(template: &Template, rng: &mut R) -> NewArticle {
    let prefix = TITLE_PREFIXES.choose(rng).copied().unwrap_or_default();
    debug!(
        prefix,
        topic = %template.topic.as_str().to_lowercase(),
        "title variation drawn"
    );

    template.to_new_article()
}
