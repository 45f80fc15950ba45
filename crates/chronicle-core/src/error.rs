use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
}
