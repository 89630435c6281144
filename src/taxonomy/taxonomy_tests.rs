use super::*;

#[test]
fn test_family_is_case_insensitive() {
    assert_eq!(family_for_type("Feature Service"), Family::Dataset);
    assert_eq!(family_for_type("WEB MAP"), Family::Map);
    assert_eq!(family_for_type("Hub Project"), Family::Project);
    assert_eq!(family_for_type("Hub Initiative"), Family::Initiative);
    assert_eq!(family_for_type("Hub Site Application"), Family::Site);
    assert_eq!(family_for_type("Hub Page"), Family::Page);
    assert_eq!(family_for_type("PDF"), Family::Document);
}

#[test]
fn test_unknown_type_is_content() {
    assert_eq!(family_for_type("Quantum Widget"), Family::Content);
    assert_eq!(family_for_type(""), Family::Content);
    assert_eq!(Family::Content.to_string(), "content");
}

#[test]
fn test_icon_falls_back() {
    assert_eq!(icon_for_type("Web Map"), "map");
    assert_eq!(icon_for_type("feature service"), "feature-layer");
    assert_eq!(icon_for_type("Quantum Widget"), FALLBACK_ICON);
}

#[test]
fn test_cache_populates_lazily_per_lowercased_type() {
    let cache = TypeCategoryCache::new();
    assert!(cache.is_empty());

    assert_eq!(cache.category_for_type("Feature Service"), "Data");
    assert_eq!(cache.category_for_type("feature service"), "Data");
    assert_eq!(cache.category_for_type("Web Map"), "Apps and Maps");
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_cache_is_shared_across_threads() {
    let cache = std::sync::Arc::new(TypeCategoryCache::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cache = std::sync::Arc::clone(&cache);
            std::thread::spawn(move || cache.category_for_type("Hub Site Application"))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Sites");
    }
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_global_cache_is_a_single_instance() {
    assert!(std::ptr::eq(TypeCategoryCache::global(), TypeCategoryCache::global()));
}
