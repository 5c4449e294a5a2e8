use std::collections::{BTreeMap, HashMap};
use serde::{Deserialize, Serialize};

/// A single orderable dish or drink.
///
/// Items are created once when the catalog is initialized and are never
/// mutated or removed while the session runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl MenuItem {
    /// Creates a new MenuItem.
    ///
    /// # Arguments
    /// * `id` - Stable identifier shown to the user
    /// * `name` - Display name
    /// * `price` - Unit price, never negative
    /// * `category` - Menu section the item is listed under
    pub fn new(id: u32, name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

/// The fixed menu, keyed by item id.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    items: HashMap<u32, MenuItem>,
}

impl MenuCatalog {
    /// Builds the house menu: ten items across five categories.
    pub fn initialize() -> Self {
        Self::from_items(vec![
            MenuItem::new(1, "Classic Burger", 60.00, "Mains"),
            MenuItem::new(2, "White Sauce Pasta", 120.00, "Mains"),
            MenuItem::new(3, "Salad", 100.00, "Starters"),
            MenuItem::new(4, "Garlic Bread", 99.00, "Starters"),
            MenuItem::new(5, "Chocolate Cake", 150.00, "Desserts"),
            MenuItem::new(6, "Mineral Water", 60.00, "Drinks"),
            MenuItem::new(7, "Coffee", 80.00, "Drinks"),
            MenuItem::new(8, "Kadai Paneer", 300.00, "Mains"),
            MenuItem::new(9, "Fries", 100.00, "Sides"),
            MenuItem::new(10, "Ice Cream", 30.00, "Desserts"),
        ])
    }

    /// Builds a catalog from an arbitrary item list. Later duplicates of an id win.
    pub fn from_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id, item)).collect(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Groups items by category. Categories iterate in lexicographic order and
    /// items within a category are sorted by id.
    pub fn list_by_category(&self) -> BTreeMap<String, Vec<MenuItem>> {
        let mut grouped: BTreeMap<String, Vec<MenuItem>> = BTreeMap::new();
        for item in self.items.values() {
            grouped.entry(item.category.clone()).or_default().push(item.clone());
        }
        for items in grouped.values_mut() {
            items.sort_by_key(|item| item.id);
        }
        grouped
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::initialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_has_ten_items() {
        let catalog = MenuCatalog::initialize();
        assert_eq!(catalog.len(), 10);
        for id in 1..=10 {
            assert!(catalog.contains(id), "missing id {id}");
        }
        assert_eq!(catalog.get(1).unwrap().name, "Classic Burger");
        assert_eq!(catalog.get(6).unwrap().price, 60.00);
    }

    #[test]
    fn test_get_unknown_is_none() {
        let catalog = MenuCatalog::initialize();
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(11).is_none());
    }

    #[test]
    fn test_list_by_category_is_sorted() {
        let grouped = MenuCatalog::initialize().list_by_category();
        let categories: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(categories, vec!["Desserts", "Drinks", "Mains", "Sides", "Starters"]);

        let mains: Vec<u32> = grouped["Mains"].iter().map(|item| item.id).collect();
        assert_eq!(mains, vec![1, 2, 8]);
        let desserts: Vec<u32> = grouped["Desserts"].iter().map(|item| item.id).collect();
        assert_eq!(desserts, vec![5, 10]);
    }
}
