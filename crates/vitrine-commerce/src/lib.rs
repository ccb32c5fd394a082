//! Commerce domain types and logic for the Vitrine storefront builder.
//!
//! This crate holds the state the storefront actually computes over,
//! independent of any UI:
//!
//! - **Catalog**: products, categories, per-product image galleries
//! - **Cart**: snapshot line items with a derived total
//! - **Order**: WhatsApp message composition and deep links
//!
//! # Example
//!
//! ```rust
//! use vitrine_commerce::prelude::*;
//!
//! let mut catalog = Catalog::new();
//! catalog.add_category("Cadernos & Planners");
//! let id = catalog.add_product();
//!
//! let mut cart = Cart::new();
//! let product = catalog.product(&id).unwrap();
//! cart.add(product);
//! assert_eq!(cart.item_count(), 1);
//! ```

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod ids;
pub mod money;
pub mod order;

pub use error::CommerceError;
pub use ids::{ContactId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ContactId, ProductId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        Catalog, CategoryList, Gallery, GalleryCursor, Product, GALLERY_CAPACITY,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem};

    // Contacts
    pub use crate::contact::{first_of_kind, Contact, ContactKind};

    // Order composition
    pub use crate::order::{
        checkout_link, checkout_message, normalize_phone, product_order_link,
        product_order_message, strip_non_digits, WHATSAPP_BASE,
    };
}
