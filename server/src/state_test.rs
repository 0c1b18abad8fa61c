use super::*;

fn delta(product_id: Uuid, warehouse_id: Uuid, change: i64) -> StockDelta {
    StockDelta { product_id, warehouse_id, change }
}

#[test]
fn cache_starts_empty_and_unhydrated() {
    let cache = StockCache::new();
    assert!(!cache.is_hydrated());
    assert_eq!(cache.on_hand(Uuid::new_v4(), Uuid::new_v4()), 0);
    assert_eq!(cache.product_total(Uuid::new_v4()), 0);
}

#[test]
fn replace_marks_hydrated_and_overwrites() {
    let product = Uuid::new_v4();
    let warehouse = Uuid::new_v4();

    let mut cache = StockCache::new();
    cache.apply(&[delta(product, warehouse, 3)]);

    let mut levels = HashMap::new();
    levels.insert((product, warehouse), 10);
    cache.replace(levels);

    assert!(cache.is_hydrated());
    assert_eq!(cache.on_hand(product, warehouse), 10);
}

#[test]
fn try_apply_accumulates_receipts() {
    let product = Uuid::new_v4();
    let warehouse = Uuid::new_v4();
    let mut cache = StockCache::new();

    cache.try_apply(&[delta(product, warehouse, 5)], false).unwrap();
    cache.try_apply(&[delta(product, warehouse, 7)], false).unwrap();

    assert_eq!(cache.on_hand(product, warehouse), 12);
}

#[test]
fn try_apply_rejects_shortfall_and_leaves_cache_untouched() {
    let product = Uuid::new_v4();
    let from = Uuid::new_v4();
    let to = Uuid::new_v4();
    let mut cache = StockCache::new();
    cache.apply(&[delta(product, from, 4)]);

    // Transfer of 10 out of a warehouse holding 4.
    let err = cache
        .try_apply(&[delta(product, from, -10), delta(product, to, 10)], false)
        .unwrap_err();

    assert_eq!(err.product_id, product);
    assert_eq!(err.warehouse_id, from);
    assert_eq!(err.on_hand, 4);
    assert_eq!(err.requested, 10);
    // Neither side of the transfer was applied.
    assert_eq!(cache.on_hand(product, from), 4);
    assert_eq!(cache.on_hand(product, to), 0);
}

#[test]
fn try_apply_allows_negative_when_configured() {
    let product = Uuid::new_v4();
    let warehouse = Uuid::new_v4();
    let mut cache = StockCache::new();

    cache.try_apply(&[delta(product, warehouse, -3)], true).unwrap();

    assert_eq!(cache.on_hand(product, warehouse), -3);
}

#[test]
fn try_apply_folds_deltas_on_same_key_before_checking() {
    let product = Uuid::new_v4();
    let warehouse = Uuid::new_v4();
    let mut cache = StockCache::new();
    cache.apply(&[delta(product, warehouse, 5)]);

    // -3 twice on a level of 5 must be judged as -6, not two passes of -3.
    let err = cache
        .try_apply(&[delta(product, warehouse, -3), delta(product, warehouse, -3)], false)
        .unwrap_err();

    assert_eq!(err.requested, 6);
    assert_eq!(cache.on_hand(product, warehouse), 5);
}

#[test]
fn apply_then_revert_round_trips() {
    let product = Uuid::new_v4();
    let from = Uuid::new_v4();
    let to = Uuid::new_v4();
    let mut cache = StockCache::new();
    cache.apply(&[delta(product, from, 8)]);

    let deltas = [delta(product, from, -5), delta(product, to, 5)];
    cache.apply(&deltas);
    assert_eq!(cache.on_hand(product, from), 3);
    assert_eq!(cache.on_hand(product, to), 5);

    cache.revert(&deltas);
    assert_eq!(cache.on_hand(product, from), 8);
    assert_eq!(cache.on_hand(product, to), 0);
}

#[test]
fn product_total_sums_across_warehouses() {
    let product = Uuid::new_v4();
    let other = Uuid::new_v4();
    let wh_a = Uuid::new_v4();
    let wh_b = Uuid::new_v4();
    let mut cache = StockCache::new();

    cache.apply(&[delta(product, wh_a, 6), delta(product, wh_b, 4), delta(other, wh_a, 99)]);

    assert_eq!(cache.product_total(product), 10);
    assert_eq!(cache.product_total(other), 99);
}

#[test]
fn levels_for_product_only_returns_that_product() {
    let product = Uuid::new_v4();
    let other = Uuid::new_v4();
    let wh_a = Uuid::new_v4();
    let wh_b = Uuid::new_v4();
    let mut cache = StockCache::new();

    cache.apply(&[delta(product, wh_a, 6), delta(product, wh_b, 4), delta(other, wh_b, 1)]);

    let mut levels = cache.levels_for_product(product);
    levels.sort_by_key(|(_, qty)| *qty);
    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0].1, 4);
    assert_eq!(levels[1].1, 6);
}

#[tokio::test]
async fn seed_stock_hydrates_app_state_cache() {
    let state = test_helpers::test_app_state();
    let product = Uuid::new_v4();
    let warehouse = Uuid::new_v4();

    test_helpers::seed_stock(&state, &[(product, warehouse, 42)]).await;

    let cache = state.stock.read().await;
    assert!(cache.is_hydrated());
    assert_eq!(cache.on_hand(product, warehouse), 42);
}

#[test]
fn default_equals_new() {
    let a = StockCache::new();
    let b = StockCache::default();
    assert_eq!(a.is_hydrated(), b.is_hydrated());
}
