//! Entity enrichment and composition for hub platform items.
//!
//! An item (or group, or user) is fetched through a [`store::HubStore`],
//! enriched by a sequential, error-isolating [`pipeline::Pipeline`] whose
//! operations come from the typed registries in [`enrichment`], and
//! composed into a public entity. Model-backed entities are projected to
//! and from their `{ item, data }` model by a [`mapper::PropertyMapper`].

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

pub mod config;
pub mod enrichment;
pub mod entities;
pub mod include;
pub mod item;
pub mod logging;
pub mod mapper;
pub mod path;
pub mod pipeline;
pub mod status;
pub mod store;
pub mod taxonomy;

// Re-export commonly used types
pub use config::{load_config, ConfigError, RequestOptions, SdkConfig};
pub use enrichment::{
    enrich, ContentEnrichment, EnrichmentKind, EnrichmentOutcome, GroupEnrichment,
    UserEnrichment,
};
pub use entities::{
    create_initiative, create_page, create_project, create_site, delete_initiative, delete_page,
    delete_project, delete_site, fetch_content, fetch_group, fetch_initiative, fetch_page,
    fetch_project, fetch_site, fetch_user, update_initiative, update_page, update_project,
    update_site, EntityError, HubContent, HubGroup, HubInitiative, HubPage, HubProject, HubSite,
    HubUser,
};
pub use include::IncludeSpec;
pub use item::{Group, Item, Model, User};
pub use mapper::{PropertyMapEntry, PropertyMapper};
pub use pipeline::{EnrichmentContext, EnrichmentError, Operation, Pipeline};
pub use status::{check_service_status, ServiceStatus};
pub use store::{HubStore, MemoryStore, StoreError, StoreSnapshot};
pub use taxonomy::{Family, TypeCategoryCache};
