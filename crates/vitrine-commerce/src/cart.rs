//! Shopping cart with snapshot line items.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A cart line. Name, price and image are copied from the product at
/// add-time; later catalog edits do not retroactively change the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product id, doubling as the line key.
    pub product_id: ProductId,
    /// Product name snapshot.
    pub name: String,
    /// Unit price snapshot.
    pub price: Money,
    /// Thumbnail image snapshot, if the product had one.
    pub image: Option<String>,
    /// Quantity, always >= 1 while the line exists.
    pub quantity: i64,
}

impl CartItem {
    /// Line subtotal: `price * quantity`.
    pub fn subtotal(&self) -> Money {
        self.price.saturating_multiply(self.quantity)
    }
}

/// The in-memory shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add one unit of a product: merge into an existing line by
    /// product id, or insert a new line with quantity 1, snapshotting
    /// the product's scalar fields.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.items.push(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.cover_image().map(str::to_string),
            quantity: 1,
        });
    }

    /// Apply a signed quantity delta to the matching line.
    ///
    /// The line is removed when the post-delta quantity drops to zero
    /// or below (the decrement stepper is the only removal affordance
    /// the UI exposes). Unknown ids are a silent no-op. Returns whether
    /// the line still exists afterwards.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i64) -> bool {
        let Some(pos) = self.items.iter().position(|i| &i.product_id == id) else {
            return false;
        };
        let line = &mut self.items[pos];
        line.quantity = line.quantity.saturating_add(delta);
        if line.quantity <= 0 {
            self.items.remove(pos);
            return false;
        }
        true
    }

    /// Derived order total, recomputed on every read.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, item| acc.saturating_add(&item.subtotal()))
    }

    /// Drop all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Gallery;

    fn product(id: &str, name: &str, price: f64) -> Product {
        let mut p = Product::new(name, "", Money::from_reais(price), "Kits");
        p.id = ProductId::new(id);
        p.images = Gallery::from_images([format!("img-{id}")]);
        p
    }

    #[test]
    fn test_add_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        let p = product("1", "Caderno", 10.0);

        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_snapshot_is_not_a_live_reference() {
        let mut cart = Cart::new();
        let mut p = product("1", "Caderno", 10.0);
        cart.add(&p);

        // Later price edits must not change the cart total.
        p.price = Money::from_reais(99.0);
        assert_eq!(cart.total(), Money::from_reais(10.0));
        assert_eq!(cart.items()[0].image.as_deref(), Some("img-1"));
    }

    #[test]
    fn test_total_is_derived() {
        let mut cart = Cart::new();
        let a = product("1", "A", 10.0);
        let b = product("2", "B", 5.0);

        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.total(), Money::from_reais(25.0));
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let mut cart = Cart::new();
        let p = product("1", "A", 10.0);
        cart.add(&p);

        assert!(!cart.update_quantity(&p.id, -1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_for_unknown_id_is_a_no_op() {
        let mut cart = Cart::new();
        assert!(!cart.update_quantity(&ProductId::new("ghost"), 1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::new();
        let p = product("1", "A", 10.0);
        cart.add(&p);

        assert!(cart.update_quantity(&p.id, 1));
        assert_eq!(cart.items()[0].quantity, 2);
        assert!(cart.update_quantity(&p.id, -1));
        assert_eq!(cart.items()[0].quantity, 1);
    }
}
