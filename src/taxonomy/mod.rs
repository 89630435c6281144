//! Coarse classification of platform item types.
//!
//! Every composed entity carries a family (used in its relative URL), a
//! category label and an icon name, all derived from the item type string.
//! Type matching is case-insensitive.

mod cache;

pub use cache::TypeCategoryCache;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain family of an item type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Dataset,
    Map,
    App,
    Document,
    Project,
    Initiative,
    Site,
    Page,
    #[default]
    Content,
}

impl Family {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dataset => "dataset",
            Self::Map => "map",
            Self::App => "app",
            Self::Document => "document",
            Self::Project => "project",
            Self::Initiative => "initiative",
            Self::Site => "site",
            Self::Page => "page",
            Self::Content => "content",
        }
    }

    /// Category label shown for items of this family.
    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            Self::Dataset => "Data",
            Self::Map | Self::App => "Apps and Maps",
            Self::Document => "Documents",
            Self::Project => "Projects",
            Self::Initiative => "Initiatives",
            Self::Site | Self::Page => "Sites",
            Self::Content => "Other",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const FAMILY_TYPES: &[(Family, &[&str])] = &[
    (
        Family::Dataset,
        &[
            "feature service",
            "feature collection",
            "map service",
            "image service",
            "vector tile service",
            "scene service",
            "wfs",
            "wms",
            "table",
            "csv",
            "csv collection",
            "shapefile",
            "file geodatabase",
            "geojson",
            "kml",
            "microsoft excel",
        ],
    ),
    (Family::Map, &["web map", "web scene", "map area"]),
    (
        Family::App,
        &[
            "web mapping application",
            "application",
            "dashboard",
            "storymap",
            "web experience",
            "form",
            "insights page",
        ],
    ),
    (
        Family::Document,
        &[
            "pdf",
            "microsoft word",
            "microsoft powerpoint",
            "image",
            "document link",
        ],
    ),
    (Family::Project, &["hub project"]),
    (Family::Initiative, &["hub initiative"]),
    (Family::Site, &["hub site application", "site application"]),
    (Family::Page, &["hub page", "site page"]),
];

const TYPE_ICONS: &[(&str, &str)] = &[
    ("feature service", "feature-layer"),
    ("feature collection", "feature-layer"),
    ("map service", "map-layer"),
    ("image service", "imagery-layer"),
    ("vector tile service", "vector-tiles"),
    ("scene service", "scene-layer"),
    ("table", "table"),
    ("csv", "file-csv"),
    ("csv collection", "file-csv"),
    ("shapefile", "file-shape"),
    ("file geodatabase", "data"),
    ("geojson", "file-code"),
    ("kml", "file-code"),
    ("microsoft excel", "file-excel"),
    ("web map", "map"),
    ("web scene", "globe"),
    ("web mapping application", "app"),
    ("application", "app"),
    ("dashboard", "dashboard"),
    ("storymap", "story-map"),
    ("web experience", "app"),
    ("form", "survey"),
    ("pdf", "file-pdf"),
    ("microsoft word", "file-text"),
    ("microsoft powerpoint", "file-report"),
    ("image", "file-image"),
    ("document link", "link"),
    ("hub project", "projects"),
    ("hub initiative", "initiative"),
    ("hub site application", "browser"),
    ("site application", "browser"),
    ("hub page", "file"),
    ("site page", "file"),
];

/// Icon name used when a type has no dedicated icon.
pub const FALLBACK_ICON: &str = "other";

/// Family of an item type; unknown types are plain content.
#[must_use]
pub fn family_for_type(item_type: &str) -> Family {
    let normalized = item_type.trim().to_lowercase();
    FAMILY_TYPES
        .iter()
        .find(|(_, types)| types.contains(&normalized.as_str()))
        .map_or(Family::Content, |(family, _)| *family)
}

/// Icon name for an item type, or [`FALLBACK_ICON`].
#[must_use]
pub fn icon_for_type(item_type: &str) -> &'static str {
    let normalized = item_type.trim().to_lowercase();
    TYPE_ICONS
        .iter()
        .find(|(known, _)| *known == normalized)
        .map_or(FALLBACK_ICON, |(_, icon)| *icon)
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod taxonomy_tests;
