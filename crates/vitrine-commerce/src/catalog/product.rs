//! Product type.

use crate::catalog::Gallery;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Placeholder name given to newly created products.
pub const PLACEHOLDER_NAME: &str = "Novo Produto";

/// Placeholder description given to newly created products.
pub const PLACEHOLDER_DESCRIPTION: &str = "Descrição do produto...";

/// A product in the catalog.
///
/// The category is a plain name reference into the catalog's category
/// list; it may dangle after a category is deleted (resolved at read
/// time, see [`crate::catalog::Catalog::uncategorized`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Price in reais.
    pub price: Money,
    /// Category name reference (empty for uncategorized).
    pub category: String,
    /// Image gallery (up to 10 references).
    pub images: Gallery,
}

impl Product {
    /// Create a product with explicit fields and a generated id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            images: Gallery::new(),
        }
    }

    /// Create the authoring placeholder product: placeholder texts,
    /// zero price, empty gallery.
    pub fn placeholder(category: impl Into<String>) -> Self {
        Self::new(
            PLACEHOLDER_NAME,
            PLACEHOLDER_DESCRIPTION,
            Money::zero(),
            category,
        )
    }

    /// Whether the product still carries the placeholder name.
    pub fn has_placeholder_name(&self) -> bool {
        self.name.trim().is_empty() || self.name == PLACEHOLDER_NAME
    }

    /// The first gallery image, used as the card/cart thumbnail.
    pub fn cover_image(&self) -> Option<&str> {
        self.images.cover()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_product() {
        let product = Product::placeholder("Cadernos & Planners");
        assert_eq!(product.name, PLACEHOLDER_NAME);
        assert_eq!(product.description, PLACEHOLDER_DESCRIPTION);
        assert!(product.price.is_zero());
        assert!(product.images.is_empty());
        assert!(product.has_placeholder_name());
    }

    #[test]
    fn test_named_product_is_not_placeholder() {
        let mut product = Product::placeholder("");
        product.name = "Planner Floral".to_string();
        assert!(!product.has_placeholder_name());
    }
}
