//! Pre-built datasets for pipeline tests.

use serde::{Deserialize, Serialize};

/// A grocery purchase line: which recipe it is for, the fruit bought, how
/// many, and the unit price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub recipe: String,
    pub fruit: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl GroceryItem {
    pub fn new(recipe: &str, fruit: &str, quantity: u32, unit_price: f64) -> Self {
        Self {
            recipe: recipe.to_string(),
            fruit: fruit.to_string(),
            quantity,
            unit_price,
        }
    }
}

/// The five-item grocery list used throughout the aggregation tests.
///
/// Unit prices are 3.50, 4.00, 2.00, 2.00, 1.00 — so the global minimum is
/// 1.00, the maximum 4.00, and the mean 2.50.
///
/// ```
/// use girder::testing::grocery_list;
///
/// let items = grocery_list();
/// assert_eq!(items.len(), 5);
/// ```
#[must_use]
pub fn grocery_list() -> Vec<GroceryItem> {
    vec![
        GroceryItem::new("pie", "raspberry", 1, 3.50),
        GroceryItem::new("pie", "blackberry", 1, 4.00),
        GroceryItem::new("pie", "blueberry", 1, 2.00),
        GroceryItem::new("muffin", "blueberry", 2, 2.00),
        GroceryItem::new("muffin", "banana", 3, 1.00),
    ]
}

/// Sentences for word-count style tests.
#[must_use]
pub fn word_count_data() -> Vec<String> {
    vec![
        "hello world".to_string(),
        "hello rust".to_string(),
        "world of data".to_string(),
        "rust programming".to_string(),
        "hello data world".to_string(),
    ]
}
