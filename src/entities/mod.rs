//! Composed, public entity shapes.
//!
//! Content, groups and users are composed from a fetched subject plus its
//! enrichments. Projects, initiatives, sites and pages are model-backed:
//! they are projected from `{ item, data }` through a [`PropertyMapper`]
//! and can be created, updated and deleted through the same mapping.
//!
//! Every derived field (family, category, icon, identifier, urls) is
//! computed once, when the entity is composed.
//!
//! [`PropertyMapper`]: crate::mapper::PropertyMapper

mod common;
mod content;
mod group;
mod initiative;
mod mapped;
mod page;
mod project;
mod site;
mod user;

pub use common::{identifier, Derived, EntityBase, EntityUrls, COMMON_ENTRIES};
pub use content::{compose_content, fetch_content, HubContent};
pub use group::{compose_group, fetch_group, HubGroup};
pub use initiative::{
    create_initiative, delete_initiative, fetch_initiative, update_initiative, HubInitiative,
};
pub use mapped::{
    compose_mapped, create_mapped, delete_mapped, fetch_mapped, fetch_model, update_mapped,
    MappedEntity,
};
pub use page::{create_page, delete_page, fetch_page, update_page, HubPage};
pub use project::{create_project, delete_project, fetch_project, update_project, HubProject};
pub use site::{create_site, delete_site, fetch_site, update_site, HubSite};
pub use user::{compose_user, fetch_user, HubUser};

use crate::config::ConfigError;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntityError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid request options: {0}")]
    Config(#[from] ConfigError),

    #[error("Item {id} is a {actual}, not a {expected}")]
    WrongType {
        id: String,
        expected: &'static str,
        actual: String,
    },

    #[error("Cannot update an entity without an id")]
    MissingId,

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl EntityError {
    /// Whether the subject itself does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, EntityError::Store(e) if e.is_not_found())
    }
}
