use serde::{Deserialize, Serialize};

/// A limited-time product found on a category page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitedItem {
    /// Display name of the product
    pub name: String,

    /// Absolute image URL (empty if the card had no image)
    pub image_url: String,

    /// Price text as shown on the page
    pub price: String,
}

impl LimitedItem {
    /// Create a new limited item instance
    pub fn new(name: String, image_url: String, price: String) -> Self {
        Self {
            name,
            image_url,
            price,
        }
    }

    /// Caption used when the item is delivered as a photo message
    pub fn caption(&self) -> String {
        format!("{}\n価格: {}", self.name, self.price)
    }
}
