use std::path::PathBuf;

use storefront_order_api::models::LineItem;
use storefront_order_api::store::{CartEvent, CartStore, ItemDraft, SHIPPING_FEE, STORAGE_KEY};
use tempfile::TempDir;

fn cart_file(dir: &TempDir) -> PathBuf {
    dir.path().join(format!("{STORAGE_KEY}.json"))
}

#[tokio::test]
async fn load_tolerates_garbage_storage() {
    let dir = TempDir::new().unwrap();
    std::fs::write(cart_file(&dir), b"{not json at all").unwrap();

    let store = CartStore::open(dir.path()).await;
    assert!(store.items().await.is_empty());
}

#[tokio::test]
async fn load_tolerates_missing_file() {
    let dir = TempDir::new().unwrap();
    let store = CartStore::open(dir.path()).await;
    assert!(store.items().await.is_empty());
}

#[tokio::test]
async fn load_repairs_missing_unit_price_from_display_string() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        cart_file(&dir),
        r#"[{"id":1,"name":"BPC-157","price":"฿800","quantity":2}]"#,
    )
    .unwrap();

    let store = CartStore::open(dir.path()).await;
    let items = store.items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].unit_price, 800);
    assert_eq!(items[0].quantity, 2);

    // The repaired array must be written back under the same key.
    let raw = std::fs::read(cart_file(&dir)).unwrap();
    let persisted: Vec<LineItem> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(persisted[0].unit_price, 800);
}

#[tokio::test]
async fn load_never_yields_malformed_items() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        cart_file(&dir),
        r#"[
            {"id":1,"name":"A","price":"junk","quantity":0},
            {"id":2,"name":"B","price":"฿500","unitPrice":-3,"quantity":2.5},
            {"name":"C","price":"฿1,200","unitPrice":1200}
        ]"#,
    )
    .unwrap();

    let store = CartStore::open(dir.path()).await;
    let items = store.items().await;
    assert_eq!(items.len(), 3);
    for item in &items {
        assert!(item.unit_price >= 0, "unit price must be non-negative");
        assert!(item.quantity >= 1, "quantity must be at least 1");
    }

    // Unparseable display price falls back to zero.
    assert_eq!(items[0].unit_price, 0);
    assert_eq!(items[0].quantity, 1);
    // Negative stored price is re-derived from the display string.
    assert_eq!(items[1].unit_price, 500);
    assert_eq!(items[1].quantity, 2);
    // Missing id is assigned without disturbing the good fields.
    assert_eq!(items[2].unit_price, 1200);
    assert_eq!(items[2].quantity, 1);
}

#[tokio::test]
async fn empty_cart_totals_are_shipping_only() {
    let dir = TempDir::new().unwrap();
    let store = CartStore::open(dir.path()).await;

    let totals = store.totals().await;
    assert_eq!(totals.subtotal, 0);
    assert_eq!(totals.shipping, SHIPPING_FEE);
    assert_eq!(totals.total, SHIPPING_FEE);
    assert_eq!(totals.item_count, 0);
}

#[tokio::test]
async fn totals_for_a_five_vial_item() {
    let dir = TempDir::new().unwrap();
    let store = CartStore::open(dir.path()).await;

    let item = store
        .add(ItemDraft {
            name: Some("X - 5 vials".to_string()),
            price: Some("฿1,200".to_string()),
            quantity: Some(5),
            ..ItemDraft::default()
        })
        .await;
    assert_eq!(item.unit_price, 1200);

    let totals = store.totals().await;
    assert_eq!(totals.subtotal, 6000);
    assert_eq!(totals.shipping, 200);
    assert_eq!(totals.total, 6200);
    assert_eq!(totals.item_count, 1);
}

#[tokio::test]
async fn totals_are_deterministic_for_fixed_storage() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        cart_file(&dir),
        r#"[{"id":7,"name":"TB-500","price":"฿900","unitPrice":900,"quantity":3}]"#,
    )
    .unwrap();

    let first = CartStore::open(dir.path()).await.totals().await;
    let second = CartStore::open(dir.path()).await.totals().await;
    assert_eq!(first, second);
    assert_eq!(first.subtotal, 2700);
}

#[tokio::test]
async fn remove_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = CartStore::open(dir.path()).await;

    let item = store
        .add(ItemDraft {
            name: Some("GHK-Cu".to_string()),
            unit_price: Some(1500.0),
            ..ItemDraft::default()
        })
        .await;

    assert!(store.remove(item.id).await);
    let after_first = store.items().await;
    assert!(!store.remove(item.id).await);
    assert_eq!(store.items().await, after_first);
}

#[tokio::test]
async fn add_then_remove_restores_item_count() {
    let dir = TempDir::new().unwrap();
    let store = CartStore::open(dir.path()).await;
    store
        .add(ItemDraft {
            name: Some("Existing".to_string()),
            unit_price: Some(100.0),
            ..ItemDraft::default()
        })
        .await;
    let before = store.items().await.len();

    let item = store
        .add(ItemDraft {
            id: Some(424242),
            name: Some("Transient".to_string()),
            unit_price: Some(300.0),
            ..ItemDraft::default()
        })
        .await;
    store.remove(item.id).await;

    assert_eq!(store.items().await.len(), before);
}

#[tokio::test]
async fn well_formed_items_round_trip_through_storage() {
    let dir = TempDir::new().unwrap();
    let items = vec![
        LineItem {
            id: 1,
            name: "BPC-157 - 5 vials".to_string(),
            price: "฿1,200".to_string(),
            unit_price: 1200,
            quantity: 5,
        },
        LineItem {
            id: 2,
            name: "TB-500".to_string(),
            price: "฿900".to_string(),
            unit_price: 900,
            quantity: 1,
        },
    ];

    let store = CartStore::open(dir.path()).await;
    store.replace(items.clone()).await;

    let reloaded = CartStore::open(dir.path()).await;
    assert_eq!(reloaded.items().await, items);
}

#[tokio::test]
async fn mutations_publish_change_events() {
    let dir = TempDir::new().unwrap();
    let store = CartStore::open(dir.path()).await;
    let mut events = store.subscribe();

    let item = store
        .add(ItemDraft {
            name: Some("CJC-1295".to_string()),
            unit_price: Some(1800.0),
            ..ItemDraft::default()
        })
        .await;
    store.remove(item.id).await;
    store.clear().await;

    assert_eq!(events.recv().await.unwrap(), CartEvent::Added { id: item.id });
    assert_eq!(events.recv().await.unwrap(), CartEvent::Removed { id: item.id });
    assert_eq!(events.recv().await.unwrap(), CartEvent::Cleared);
}
