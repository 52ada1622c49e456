use serde::Serialize;

/// Store-assigned item identifier, starting at 1
pub type ItemId = u64;

/// A stored catalog item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
}

/// Item fields as returned by `GET /items/{item_id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDetails {
    pub name: String,
    pub price: f64,
}

impl From<Item> for ItemDetails {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            price: item.price,
        }
    }
}

/// Create-item payload that has passed the schema
///
/// Only constructed by [`crate::schema`], so holding one proves the name
/// and price constraints hold.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub(crate) name: String,
    pub(crate) price: f64,
}

impl NewItem {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn price(&self) -> f64 {
        self.price
    }
}
