// =============================================================================
// GEOMETRY.RS — Pixel rectangles for sprite-sheet cropping
//
// A sprite sheet is addressed with PIL-style boxes:
// (left, top, right, bottom), right/bottom exclusive.
// =============================================================================

use anyhow::{Result, bail};
use serde::Deserialize;

/// A crop region inside a source image, in pixel coordinates.
///
/// `right` and `bottom` are exclusive, so a box of `(0, 0, 34, 36)` covers
/// 34 × 36 pixels. Serialized as a four-element array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "[u32; 4]")]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl From<[u32; 4]> for BoundingBox {
    fn from([left, top, right, bottom]: [u32; 4]) -> Self {
        Self { left, top, right, bottom }
    }
}

impl BoundingBox {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Width in pixels. Zero for a degenerate box.
    #[inline]
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels. Zero for a degenerate box.
    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// `(width, height)`, matching `image::GenericImageView::dimensions`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Fails unless the box encloses at least one pixel.
    pub fn validate(&self) -> Result<()> {
        if self.left >= self.right {
            bail!("left edge {} is not left of right edge {}", self.left, self.right);
        }
        if self.top >= self.bottom {
            bail!("top edge {} is not above bottom edge {}", self.top, self.bottom);
        }
        Ok(())
    }

    /// True when every pixel of the box lies inside a `width × height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right <= width && self.bottom <= height
    }

    /// The part of the box that overlaps a `width × height` image, or `None`
    /// when the two do not intersect.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<BoundingBox> {
        let clipped = BoundingBox {
            left: self.left.min(width),
            top: self.top.min(height),
            right: self.right.min(width),
            bottom: self.bottom.min(height),
        };
        (clipped.left < clipped.right && clipped.top < clipped.bottom).then_some(clipped)
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.left, self.top, self.right, self.bottom)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_are_exclusive_of_right_and_bottom() {
        let b = BoundingBox::new(649, 0, 683, 36);
        assert_eq!(b.dimensions(), (34, 36));
    }

    #[test]
    fn degenerate_boxes_fail_validation() {
        assert!(BoundingBox::new(10, 0, 10, 5).validate().is_err());
        assert!(BoundingBox::new(0, 8, 4, 2).validate().is_err());
        assert!(BoundingBox::new(0, 0, 1, 1).validate().is_ok());
    }

    #[test]
    fn degenerate_box_has_zero_size() {
        let b = BoundingBox::new(20, 20, 10, 10);
        assert_eq!(b.dimensions(), (0, 0));
    }

    #[test]
    fn clip_keeps_inner_box_unchanged() {
        let b = BoundingBox::new(2, 3, 8, 9);
        assert_eq!(b.clip_to(10, 10), Some(b));
    }

    #[test]
    fn clip_trims_overhanging_edges() {
        let b = BoundingBox::new(5, 5, 20, 30);
        assert_eq!(b.clip_to(10, 12), Some(BoundingBox::new(5, 5, 10, 12)));
    }

    #[test]
    fn clip_outside_image_is_none() {
        assert_eq!(BoundingBox::new(50, 0, 60, 10).clip_to(40, 40), None);
    }

    #[test]
    fn deserializes_from_array() {
        let b: BoundingBox = serde_json::from_str("[0, 50, 110, 86]").unwrap();
        assert_eq!(b, BoundingBox::new(0, 50, 110, 86));
    }
}
