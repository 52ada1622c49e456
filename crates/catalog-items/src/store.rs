use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::types::{Item, ItemId, NewItem};

/// Process-lifetime item store
///
/// Cheap to clone; all clones share the same map. Id assignment reads the
/// current maximum and inserts under one write guard, so concurrent creates
/// never receive the same id.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Arc<RwLock<BTreeMap<ItemId, Item>>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `seed`, assigned ids 1, 2, ...
    pub async fn with_seed(seed: impl IntoIterator<Item = NewItem>) -> anyhow::Result<Self> {
        let store = Self::new();
        store.reset(seed).await?;
        Ok(store)
    }

    pub async fn get(&self, id: ItemId) -> Option<Item> {
        self.items.read().await.get(&id).cloned()
    }

    /// Insert a validated item under `max(id) + 1`, or 1 when empty
    ///
    /// # Errors
    ///
    /// Returns an error if the id space is exhausted
    pub async fn create(&self, new_item: NewItem) -> anyhow::Result<Item> {
        let mut items = self.items.write().await;
        insert_next(&mut items, new_item)
    }

    /// Drop every item and load `seed` in its place
    ///
    /// Ids restart at 1 regardless of what was stored before.
    pub async fn reset(&self, seed: impl IntoIterator<Item = NewItem>) -> anyhow::Result<()> {
        let mut items = self.items.write().await;
        items.clear();
        for new_item in seed {
            insert_next(&mut items, new_item)?;
        }
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

fn insert_next(items: &mut BTreeMap<ItemId, Item>, new_item: NewItem) -> anyhow::Result<Item> {
    let id = match items.last_key_value() {
        Some((&max, _)) => max
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("item id space exhausted at {max}"))?,
        None => 1,
    };

    let item = Item {
        id,
        name: new_item.name,
        price: new_item.price,
    };
    items.insert(id, item.clone());

    Ok(item)
}
