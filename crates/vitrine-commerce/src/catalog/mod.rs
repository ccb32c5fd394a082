//! Catalog: products organized by categories.

mod category;
mod gallery;
mod product;

pub use category::CategoryList;
pub use gallery::{Gallery, GalleryCursor, GALLERY_CAPACITY};
pub use product::{Product, PLACEHOLDER_DESCRIPTION, PLACEHOLDER_NAME};

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The in-memory product catalog.
///
/// Owns all products and the category list. Category membership is a
/// name reference validated at read time: deleting a category leaves
/// its products in place with a dangling reference, surfaced through
/// [`Catalog::uncategorized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Catalog {
    /// All products, in insertion order.
    pub products: Vec<Product>,
    /// Ordered category names.
    pub categories: CategoryList,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a placeholder product tagged with the first category (or
    /// no category when none exist) and return its id. Always succeeds.
    pub fn add_product(&mut self) -> ProductId {
        let category = self.categories.first().unwrap_or_default();
        let product = Product::placeholder(category);
        let id = product.id.clone();
        self.products.push(product);
        id
    }

    /// Replace the product with the matching id. Silent no-op when the
    /// id is unknown.
    pub fn update_product(&mut self, product: Product) {
        if let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) {
            *existing = product;
        }
    }

    /// Remove a product by id. Idempotent.
    pub fn delete_product(&mut self, id: &ProductId) {
        self.products.retain(|p| &p.id != id);
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn product_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| &p.id == id)
    }

    /// Append a category name; no-op on empty or duplicate names.
    pub fn add_category(&mut self, name: impl Into<String>) -> bool {
        self.categories.add(name)
    }

    /// Remove a category name. Products tagged with it are untouched
    /// and become part of the uncategorized bucket.
    pub fn delete_category(&mut self, name: &str) -> bool {
        self.categories.remove(name)
    }

    /// Products whose category matches `name` exactly, in insertion
    /// order.
    pub fn products_in<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products.iter().filter(move |p| p.category == name)
    }

    /// Products whose category reference no longer resolves (the
    /// implicit uncategorized bucket).
    pub fn uncategorized(&self) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(|p| !self.categories.contains(&p.category))
    }

    /// The seed catalog shipped with a fresh store.
    pub fn seeded() -> Self {
        let categories = CategoryList::from_names([
            "Cadernos & Planners",
            "Bloquinhos & Kits",
            "Painéis em EVA",
        ]);

        let seed = |id: &str,
                    name: &str,
                    description: &str,
                    price: Money,
                    category: &str,
                    images: &[&str]| {
            let mut product = Product::new(name, description, price, category);
            product.id = ProductId::new(id);
            product.images = Gallery::from_images(images.iter().copied());
            product
        };

        let products = vec![
            seed(
                "1",
                "Planner Floral 2024",
                "Capa dura laminada, miolo colorido 90g, bolso interno e cartela de \
                 adesivos. Personalizável com seu nome.",
                Money::from_reais(89.90),
                "Cadernos & Planners",
                &[
                    "https://picsum.photos/seed/planner1/600/600",
                    "https://picsum.photos/seed/planner1detail/600/600",
                ],
            ),
            seed(
                "2",
                "Agenda Diária Clean",
                "Design minimalista para organizar sua rotina. Acabamento em wire-o \
                 bronze e elástico para fechamento.",
                Money::from_reais(65.00),
                "Cadernos & Planners",
                &["https://picsum.photos/seed/agenda2/600/600"],
            ),
            seed(
                "3",
                "Kit Bloquinhos Doce",
                "Trio de bloquinhos A6 com folhas destacáveis. Ideal para listas de \
                 compras e anotações rápidas.",
                Money::from_reais(25.00),
                "Bloquinhos & Kits",
                &["https://picsum.photos/seed/blocks3/600/600"],
            ),
            seed(
                "4",
                "Painel Sala de Aula",
                "Painel decorativo em EVA tema 'Jardim Encantado'. Cores vibrantes e \
                 corte preciso. 1m x 60cm.",
                Money::from_reais(45.90),
                "Painéis em EVA",
                &["https://picsum.photos/seed/eva4/600/600"],
            ),
        ];

        Self {
            products,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_product_uses_first_category() {
        let mut catalog = Catalog::new();
        catalog.add_category("Cadernos");
        catalog.add_category("Kits");

        let id = catalog.add_product();
        assert_eq!(catalog.product(&id).unwrap().category, "Cadernos");
    }

    #[test]
    fn test_add_product_without_categories() {
        let mut catalog = Catalog::new();
        let id = catalog.add_product();
        assert_eq!(catalog.product(&id).unwrap().category, "");
    }

    #[test]
    fn test_add_then_delete_restores_product_list() {
        let mut catalog = Catalog::seeded();
        let before: Vec<ProductId> = catalog.products.iter().map(|p| p.id.clone()).collect();

        let id = catalog.add_product();
        catalog.delete_product(&id);

        let after: Vec<ProductId> = catalog.products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(before, after);

        // Idempotent: deleting again is a no-op.
        catalog.delete_product(&id);
        assert_eq!(catalog.products.len(), before.len());
    }

    #[test]
    fn test_update_unknown_product_is_a_no_op() {
        let mut catalog = Catalog::seeded();
        let before = catalog.clone();

        let ghost = Product::placeholder("Cadernos & Planners");
        catalog.update_product(ghost);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_update_replaces_matching_product() {
        let mut catalog = Catalog::seeded();
        let mut edited = catalog.products[0].clone();
        edited.name = "Planner Renomeado".to_string();
        edited.price = Money::from_reais(99.90);

        catalog.update_product(edited.clone());
        assert_eq!(catalog.products[0], edited);
    }

    #[test]
    fn test_delete_category_leaves_products_dangling() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.delete_category("Cadernos & Planners"));

        // Products keep their category field untouched.
        let dangling: Vec<_> = catalog.uncategorized().collect();
        assert_eq!(dangling.len(), 2);
        for product in &dangling {
            assert_eq!(product.category, "Cadernos & Planners");
        }

        // And the filtered view still finds them by exact name.
        assert_eq!(catalog.products_in("Cadernos & Planners").count(), 2);
    }

    #[test]
    fn test_seeded_catalog_round_trips_through_json() {
        let catalog = Catalog::seeded();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog, back);
    }
}
