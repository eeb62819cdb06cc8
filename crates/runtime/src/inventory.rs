//! Bounded player inventory.

use game_core::Item;

use crate::error::{Result, RuntimeError};

/// Items carried outside of equipment slots, in pickup order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Adds `item` at the end; fails without taking it when full.
    pub fn push(&mut self, item: Item) -> Result<()> {
        if self.is_full() {
            return Err(RuntimeError::InventoryFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the item at `index`, shifting later items down.
    pub fn remove(&mut self, index: usize) -> Result<Item> {
        if index >= self.items.len() {
            return Err(RuntimeError::InventoryIndex(index));
        }
        Ok(self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_respects_capacity() {
        let mut inventory = Inventory::new(2);
        inventory.push(Item::new("a")).unwrap();
        inventory.push(Item::new("b")).unwrap();
        assert!(inventory.is_full());
        assert_eq!(
            inventory.push(Item::new("c")),
            Err(RuntimeError::InventoryFull { capacity: 2 })
        );
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn remove_shifts_items() {
        let mut inventory = Inventory::new(4);
        for name in ["a", "b", "c"] {
            inventory.push(Item::new(name)).unwrap();
        }
        assert_eq!(inventory.remove(1).unwrap().name, "b");
        assert_eq!(inventory.get(1).map(|i| i.name.as_str()), Some("c"));
        assert_eq!(inventory.remove(5), Err(RuntimeError::InventoryIndex(5)));
    }
}
