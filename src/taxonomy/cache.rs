use super::family_for_type;
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};
use tracing::debug;

static GLOBAL: LazyLock<TypeCategoryCache> = LazyLock::new(TypeCategoryCache::new);

/// Append-only type to category lookup, keyed by the lowercased type.
///
/// Composition takes the cache as a parameter; [`TypeCategoryCache::global`]
/// is the process-wide instance used when the caller has none of its own.
#[derive(Debug, Default)]
pub struct TypeCategoryCache {
    entries: RwLock<HashMap<String, &'static str>>,
}

impl TypeCategoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Category label for `item_type`, computed on first use.
    pub fn category_for_type(&self, item_type: &str) -> &'static str {
        let key = item_type.trim().to_lowercase();
        if let Some(category) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied()
        {
            return category;
        }

        let category = family_for_type(&key).category();
        debug!(item_type = %key, category, "Category cache miss");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, category);
        category
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
