//! Platform records consumed by the composition engine.
//!
//! These are the externally owned shapes returned by the backing store:
//! the canonical [`Item`], the persisted [`Model`] pairing of item and data
//! payload, and the [`Group`] and [`User`] subjects.

mod model;
mod types;

pub use model::Model;
pub use types::{Group, Item, User};

/// Prefix of the type keyword carrying an item's human-readable slug.
pub const SLUG_KEYWORD_PREFIX: &str = "slug|";
