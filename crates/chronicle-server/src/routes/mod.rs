pub mod articles;
pub mod health;
pub mod pages;

/// Parse a path id the way every article route does: strict integer only.
pub(crate) fn parse_article_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}
