use std::collections::HashMap;

use tracing::debug;

use crate::error::{MenuError, Result};
use crate::models::{MenuItem, TimeSlot};

const BUILTIN_MENUS: &str = include_str!("../../data/menus.json");

/// Immutable, id-indexed table of menu items.
///
/// Built once at startup and only ever read afterwards, so a single instance
/// can be shared across threads by reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Items in load order.
    items: Vec<MenuItem>,

    /// Item id to position in `items`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting entries that break its invariants.
    ///
    /// Every item needs a non-empty id, a unique id, and at least one time slot.
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());

        for (pos, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(MenuError::InvalidCatalog(format!(
                    "item '{}' has an empty id",
                    item.name
                )));
            }
            if item.time_slots.is_empty() {
                return Err(MenuError::InvalidCatalog(format!(
                    "item '{}' has no time slots",
                    item.id
                )));
            }
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(MenuError::InvalidCatalog(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
        }

        debug!(items = items.len(), "built menu catalog");
        Ok(Self { items, index })
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let items: Vec<MenuItem> = serde_json::from_str(BUILTIN_MENUS)?;
        Self::new(items)
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Look up an item by id, failing if it is missing.
    pub fn require(&self, id: &str) -> Result<&MenuItem> {
        self.get(id)
            .ok_or_else(|| MenuError::MenuNotFound(id.to_string()))
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    /// Items served in `slot`.
    pub fn eligible_for(&self, slot: TimeSlot) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |item| item.serves(slot))
    }

    /// Count of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
