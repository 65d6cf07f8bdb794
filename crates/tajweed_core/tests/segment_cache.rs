use tajweed_core::{
    CacheConfig, FifoSegmentCache, SegmentStore, TajweedService, Theme, DEFAULT_CACHE_CAPACITY,
};

fn verse_key(index: usize) -> String {
    format!("\u{0628}\u{0650}\u{0633}\u{0652}\u{0645}\u{0650} {index}")
}

#[test]
fn overflow_evicts_exactly_the_first_inserted_key() {
    let service = TajweedService::default();
    for index in 0..=DEFAULT_CACHE_CAPACITY {
        service.parse(&verse_key(index), Theme::Dark);
    }

    let store = service.store();
    assert_eq!(store.len(), DEFAULT_CACHE_CAPACITY);
    assert!(!store.contains(&verse_key(0), Theme::Dark));
    assert!(store.contains(&verse_key(1), Theme::Dark));
    assert!(store.contains(&verse_key(DEFAULT_CACHE_CAPACITY), Theme::Dark));
    assert_eq!(service.cache_stats().evictions, 1);
}

#[test]
fn recent_reads_do_not_protect_the_oldest_entry() {
    let service = TajweedService::new(
        FifoSegmentCache::new(CacheConfig::with_capacity(3)).expect("valid capacity"),
    );
    for index in 0..3 {
        service.parse(&verse_key(index), Theme::Light);
    }
    service.parse(&verse_key(0), Theme::Light);
    service.parse(&verse_key(3), Theme::Light);

    assert!(!service.store().contains(&verse_key(0), Theme::Light));
    assert!(service.store().contains(&verse_key(1), Theme::Light));
    assert_eq!(service.computations(), 4);
}

#[test]
fn both_themes_share_one_capacity() {
    let service = TajweedService::with_config(CacheConfig::with_capacity(2)).expect("valid config");
    service.parse("\u{0646}\u{0651}", Theme::Dark);
    service.parse("\u{0646}\u{0651}", Theme::Light);
    service.parse("\u{0637}", Theme::Dark);

    let store = service.store();
    assert_eq!(store.len(), 2);
    assert!(!store.contains("\u{0646}\u{0651}", Theme::Dark));
    assert!(store.contains("\u{0646}\u{0651}", Theme::Light));
}

#[test]
fn zero_capacity_config_is_rejected() {
    let result = TajweedService::with_config(CacheConfig::with_capacity(0));
    let err = result.err().expect("zero capacity must fail");
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn config_deserializes_with_defaults() {
    let empty: CacheConfig = serde_json::from_str("{}").expect("empty config");
    assert_eq!(empty, CacheConfig::default());

    let custom: CacheConfig = serde_json::from_str(r#"{"capacity": 16}"#).expect("capacity");
    assert_eq!(custom.capacity, 16);
}

#[test]
fn independent_services_do_not_share_entries() {
    let first = TajweedService::default();
    let second = TajweedService::default();

    first.parse("\u{0642}\u{0652}", Theme::Dark);

    assert_eq!(first.cache_stats().entries, 1);
    assert!(second.store().is_empty());
}
