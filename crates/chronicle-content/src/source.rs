use chronicle_core::models::article::NewArticle;

/// Capability that supplies article bodies to the scheduler and the
/// on-demand endpoint.
pub trait ContentSource: Send + Sync {
    /// Produce one article ready for insertion.
    fn produce(&self) -> NewArticle;

    /// Articles used to seed an empty store, in insertion order.
    fn initial_batch(&self) -> Vec<NewArticle>;
}
