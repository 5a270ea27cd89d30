//! Storage layer
//!
//! Repository traits for every CMS collection. The only implementation
//! shipped is [`repositories::DetachedRepository`], which has no storage
//! attached and retains nothing between calls.

pub mod repositories;

pub use repositories::{DetachedRepository, Repositories};
