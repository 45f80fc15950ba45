//! chronicle-content
//!
//! Where new articles come from. The only source today is a fixed library
//! of hand-written templates; anything implementing [`source::ContentSource`]
//! can replace it.

pub mod library;
pub mod source;
pub mod templates;

pub use library::TemplateLibrary;
pub use source::ContentSource;
