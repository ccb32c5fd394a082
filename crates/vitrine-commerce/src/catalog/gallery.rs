//! Product image gallery with fixed slot capacity.
//!
//! A gallery is an ordered, gap-free list of opaque image references
//! (data URIs or URLs). Uploads target a slot index: the slot equal to
//! the current length appends, earlier slots overwrite. Removal
//! compacts the list. The externally tracked viewing position lives in
//! [`GalleryCursor`].

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Maximum number of images per product.
pub const GALLERY_CAPACITY: usize = 10;

/// Ordered image references for one product, at most [`GALLERY_CAPACITY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Gallery {
    images: Vec<String>,
}

impl Gallery {
    /// Create an empty gallery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a gallery from image references, truncating at capacity.
    pub fn from_images<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images
                .into_iter()
                .take(GALLERY_CAPACITY)
                .map(Into::into)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.images.len() >= GALLERY_CAPACITY
    }

    /// The slot an append would land in, if any capacity remains.
    pub fn next_slot(&self) -> Option<usize> {
        if self.is_full() {
            None
        } else {
            Some(self.images.len())
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    /// The first image, used as the card/cart thumbnail.
    pub fn cover(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }

    /// Upload an image reference into a slot.
    ///
    /// `slot == len` appends, `slot < len` overwrites. Appending at
    /// capacity and slots beyond the append position are rejected.
    pub fn upload_to_slot(
        &mut self,
        slot: usize,
        image: impl Into<String>,
    ) -> Result<(), CommerceError> {
        let len = self.images.len();
        if slot > len {
            return Err(CommerceError::GallerySlotOutOfRange { slot, len });
        }
        if slot == len {
            if self.is_full() {
                return Err(CommerceError::GalleryFull(GALLERY_CAPACITY));
            }
            self.images.push(image.into());
        } else {
            self.images[slot] = image.into();
        }
        Ok(())
    }

    /// Remove the image at `index`, shifting later entries left.
    pub fn remove(&mut self, index: usize) -> Result<String, CommerceError> {
        let len = self.images.len();
        if index >= len {
            return Err(CommerceError::ImageIndexOutOfRange { index, len });
        }
        Ok(self.images.remove(index))
    }
}

/// The active viewing index within a gallery.
///
/// Navigation wraps modulo the image count; consumers must clamp the
/// cursor after removals so it stays within `[0, len - 1]` (0 when the
/// gallery is empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct GalleryCursor(usize);

impl GalleryCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Reset to the first image.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Jump to `index`, clamped against the gallery length.
    pub fn select(&mut self, index: usize, len: usize) {
        self.0 = index;
        self.clamp_to(len);
    }

    /// Clamp into `[0, len - 1]`, or 0 for an empty gallery.
    pub fn clamp_to(&mut self, len: usize) {
        if len == 0 {
            self.0 = 0;
        } else if self.0 >= len {
            self.0 = len - 1;
        }
    }

    /// Advance to the next image, wrapping around. No-op when empty.
    pub fn advance(&mut self, len: usize) {
        if len > 0 {
            self.0 = (self.0 + 1) % len;
        }
    }

    /// Step back to the previous image, wrapping around. No-op when empty.
    pub fn retreat(&mut self, len: usize) {
        if len > 0 {
            self.0 = (self.0 + len - 1) % len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_overwrite() {
        let mut gallery = Gallery::new();
        gallery.upload_to_slot(0, "a").unwrap();
        gallery.upload_to_slot(1, "b").unwrap();
        assert_eq!(gallery.len(), 2);

        gallery.upload_to_slot(0, "a2").unwrap();
        assert_eq!(gallery.get(0), Some("a2"));
        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn test_rejects_slot_beyond_append_position() {
        let mut gallery = Gallery::new();
        let err = gallery.upload_to_slot(1, "x").unwrap_err();
        assert_eq!(err, CommerceError::GallerySlotOutOfRange { slot: 1, len: 0 });
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        let mut gallery = Gallery::new();
        for i in 0..GALLERY_CAPACITY {
            gallery.upload_to_slot(i, format!("img-{i}")).unwrap();
        }
        assert!(gallery.is_full());
        assert_eq!(gallery.next_slot(), None);

        let err = gallery.upload_to_slot(GALLERY_CAPACITY, "extra").unwrap_err();
        assert_eq!(err, CommerceError::GalleryFull(GALLERY_CAPACITY));
        assert_eq!(gallery.len(), GALLERY_CAPACITY);

        // Overwriting a filled slot is still allowed at capacity.
        gallery.upload_to_slot(3, "replacement").unwrap();
        assert_eq!(gallery.get(3), Some("replacement"));
    }

    #[test]
    fn test_remove_compacts() {
        let mut gallery = Gallery::from_images(["a", "b", "c"]);
        let removed = gallery.remove(1).unwrap();
        assert_eq!(removed, "b");
        assert_eq!(gallery.iter().collect::<Vec<_>>(), vec!["a", "c"]);

        assert!(gallery.remove(5).is_err());
    }

    #[test]
    fn test_from_images_truncates_at_capacity() {
        let gallery = Gallery::from_images((0..15).map(|i| format!("img-{i}")));
        assert_eq!(gallery.len(), GALLERY_CAPACITY);
    }

    #[test]
    fn test_cursor_clamps_after_removal() {
        let mut cursor = GalleryCursor::new();
        cursor.select(2, 3);
        assert_eq!(cursor.index(), 2);

        // Two removals: len 3 -> 2 -> 1
        cursor.clamp_to(2);
        assert_eq!(cursor.index(), 1);
        cursor.clamp_to(1);
        assert_eq!(cursor.index(), 0);

        cursor.clamp_to(0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut cursor = GalleryCursor::new();
        cursor.advance(3);
        cursor.advance(3);
        assert_eq!(cursor.index(), 2);
        cursor.advance(3);
        assert_eq!(cursor.index(), 0);
        cursor.retreat(3);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_cursor_ignores_empty_gallery() {
        let mut cursor = GalleryCursor::new();
        cursor.advance(0);
        cursor.retreat(0);
        assert_eq!(cursor.index(), 0);
    }
}
