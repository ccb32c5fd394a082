//! Storefront pages: cover, about, catalog.

pub mod about;
pub mod catalog;
pub mod cover;
