//! The authoritative cart store.
//!
//! Every storefront surface reads and writes the cart through this one
//! module. State is a JSON array of line items persisted under the fixed
//! storage key shared with all historical consumers of the cart record;
//! mutation is full-array read/modify/write, last-writer-wins. The store
//! degrades rather than fails: a missing, unreadable or corrupt file loads
//! as an empty cart, and a failed write is logged and swallowed so the
//! storefront never sees a crash.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tokio::sync::{RwLock, broadcast};

use crate::currency::parse_price;
use crate::models::{LineItem, Totals};

/// Fixed key the cart array is persisted under.
pub const STORAGE_KEY: &str = "peptideCart";

/// Flat shipping charge in THB, applied to every order.
pub const SHIPPING_FEE: i64 = 200;

/// Published on every mutation so display surfaces can react without
/// re-reading storage on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    Added { id: i64 },
    Removed { id: i64 },
    Cleared,
    Replaced,
}

/// A line item as it may appear in storage. Every field is suspect until the
/// load pass has normalized it.
#[derive(Debug, Deserialize)]
struct StoredItem {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    price: Option<String>,
    #[serde(rename = "unitPrice", default)]
    unit_price: Option<f64>,
    #[serde(default)]
    quantity: Option<f64>,
}

/// Fields accepted when adding an item; everything is optional and
/// defaulted the same way the load pass repairs stored entries.
#[derive(Debug, Default, Clone)]
pub struct ItemDraft {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<String>,
    pub unit_price: Option<f64>,
    pub quantity: Option<i64>,
}

#[derive(Clone)]
pub struct CartStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: PathBuf,
    items: RwLock<Vec<LineItem>>,
    events: broadcast::Sender<CartEvent>,
}

impl CartStore {
    /// Open the store rooted at `dir`, loading and repairing whatever is
    /// currently persisted. Never fails; any problem on the way in degrades
    /// to an empty cart.
    pub async fn open(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        if let Err(err) = tokio::fs::create_dir_all(dir).await {
            tracing::warn!(error = %err, dir = %dir.display(), "could not create cart data dir");
        }
        let path = dir.join(format!("{STORAGE_KEY}.json"));

        let (items, corrected) = load_items(&path).await;
        let (events, _) = broadcast::channel(16);
        let store = Self {
            inner: Arc::new(StoreInner {
                path,
                items: RwLock::new(items),
                events,
            }),
        };
        if corrected {
            let items = store.inner.items.read().await;
            store.persist(&items).await;
            tracing::info!(count = items.len(), "repaired stored cart entries");
        }
        store
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.inner.events.subscribe()
    }

    /// Snapshot of the current items.
    pub async fn items(&self) -> Vec<LineItem> {
        self.inner.items.read().await.clone()
    }

    /// Append an item, defaulting whatever the caller left out: id from the
    /// current wall clock, quantity 1, unit price parsed from the display
    /// string or 0 when underivable. No uniqueness or stock check.
    pub async fn add(&self, draft: ItemDraft) -> LineItem {
        let unit_price = match draft.unit_price {
            Some(p) if p > 0.0 => p as i64,
            _ => draft
                .price
                .as_deref()
                .and_then(parse_price)
                .filter(|p| *p >= 0)
                .unwrap_or(0),
        };

        let item = LineItem {
            id: draft.id.unwrap_or_else(|| Utc::now().timestamp_millis()),
            name: draft.name.unwrap_or_else(|| "Unknown Product".to_string()),
            price: draft.price.unwrap_or_else(|| "฿0".to_string()),
            unit_price,
            quantity: draft.quantity.filter(|q| *q >= 1).unwrap_or(1),
        };

        let mut items = self.inner.items.write().await;
        items.push(item.clone());
        self.persist(&items).await;
        drop(items);

        let _ = self.inner.events.send(CartEvent::Added { id: item.id });
        item
    }

    /// Remove every item with the given id. Idempotent: removing an id that
    /// is not present changes nothing.
    pub async fn remove(&self, id: i64) -> bool {
        let mut items = self.inner.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = items.len() != before;
        if removed {
            self.persist(&items).await;
        }
        drop(items);

        if removed {
            let _ = self.inner.events.send(CartEvent::Removed { id });
        }
        removed
    }

    /// Empty the cart.
    pub async fn clear(&self) {
        let mut items = self.inner.items.write().await;
        items.clear();
        self.persist(&items).await;
        drop(items);

        let _ = self.inner.events.send(CartEvent::Cleared);
    }

    /// Replace the whole array at once.
    pub async fn replace(&self, new_items: Vec<LineItem>) {
        let mut items = self.inner.items.write().await;
        *items = new_items;
        self.persist(&items).await;
        drop(items);

        let _ = self.inner.events.send(CartEvent::Replaced);
    }

    /// Totals for the current cart contents.
    pub async fn totals(&self) -> Totals {
        let items = self.inner.items.read().await;
        Self::totals_of(&items)
    }

    /// The one totals routine. Sums `unit_price * quantity`, adds the flat
    /// shipping charge, and counts line items (not unit quantities).
    pub fn totals_of(items: &[LineItem]) -> Totals {
        let subtotal: i64 = items
            .iter()
            .map(|item| item.unit_price * item.quantity)
            .sum();
        Totals {
            subtotal,
            shipping: SHIPPING_FEE,
            total: subtotal + SHIPPING_FEE,
            item_count: items.len() as i64,
        }
    }

    async fn persist(&self, items: &[LineItem]) {
        match serde_json::to_vec(items) {
            Ok(body) => {
                if let Err(err) = tokio::fs::write(&self.inner.path, body).await {
                    tracing::error!(error = %err, path = %self.inner.path.display(), "cart write failed");
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "cart serialization failed");
            }
        }
    }
}

/// Read and normalize the stored array. Returns the items plus whether any
/// entry needed repair (and so should be persisted back).
async fn load_items(path: &Path) -> (Vec<LineItem>, bool) {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return (Vec::new(), false),
        Err(err) => {
            tracing::error!(error = %err, path = %path.display(), "cart read failed");
            return (Vec::new(), false);
        }
    };

    let stored: Vec<StoredItem> = match serde_json::from_slice(&raw) {
        Ok(stored) => stored,
        Err(err) => {
            tracing::error!(error = %err, "stored cart is not a valid item array");
            return (Vec::new(), false);
        }
    };

    let now_ms = Utc::now().timestamp_millis();
    let mut corrected = false;
    let items = stored
        .into_iter()
        .map(|entry| normalize(entry, now_ms, &mut corrected))
        .collect();
    (items, corrected)
}

/// Repair one stored entry: a missing or invalid unit price is re-derived
/// from the display string (0 when that fails too), and a missing or sub-1
/// quantity defaults to 1.
fn normalize(entry: StoredItem, now_ms: i64, corrected: &mut bool) -> LineItem {
    let price = entry.price.unwrap_or_else(|| {
        *corrected = true;
        "฿0".to_string()
    });

    let unit_price = match entry.unit_price {
        Some(p) if p.is_finite() && p >= 0.0 => p as i64,
        _ => {
            *corrected = true;
            parse_price(&price).filter(|p| *p >= 0).unwrap_or(0)
        }
    };

    let quantity = match entry.quantity {
        Some(q) if q.is_finite() && q >= 1.0 => q as i64,
        _ => {
            *corrected = true;
            1
        }
    };

    LineItem {
        id: entry.id.unwrap_or_else(|| {
            *corrected = true;
            now_ms
        }),
        name: entry.name.unwrap_or_else(|| {
            *corrected = true;
            "Unknown Product".to_string()
        }),
        price,
        unit_price,
        quantity,
    }
}
