//! chronicle-core
//!
//! Pure domain types shared by every Chronicle crate: articles, the topic
//! vocabulary and the lightweight content markup. No storage or HTTP
//! dependency.

pub mod content;
pub mod error;
pub mod models;
