//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Gallery slot index beyond the append position.
    #[error("Gallery slot {slot} out of range for {len} image(s)")]
    GallerySlotOutOfRange { slot: usize, len: usize },

    /// Gallery already holds the maximum number of images.
    #[error("Gallery is full ({0} images max)")]
    GalleryFull(usize),

    /// Image index beyond the current gallery length.
    #[error("Image index {index} out of range for {len} image(s)")]
    ImageIndexOutOfRange { index: usize, len: usize },

    /// No usable WhatsApp contact configured for the shop.
    #[error("No WhatsApp contact configured")]
    MissingWhatsappContact,

    /// Checkout requested for an empty cart.
    #[error("Cannot compose an order for an empty cart")]
    EmptyCart,
}
