//! Shared widgets.

pub mod cart_sidebar;
pub mod hero_carousel;
pub mod image_upload;
pub mod product_modal;
pub mod setup;
