//! Bounding box types for the two coordinate spaces the converter touches.
//!
//! COCO stores boxes in pixel XYWH format (top-left corner plus size);
//! YOLO stores them normalized to the image as center plus size. Keeping
//! the two as distinct types makes it impossible to hand an unconverted
//! box to the label writer.
//!
//! Note: neither type enforces that values fall inside the image. Boxes
//! that extend past the border, or have zero or negative size, are carried
//! through arithmetic unchanged so that output mirrors input.

/// An axis-aligned box in pixel space: (x, y) is the top-left corner.
///
/// This is the layout of the COCO `bbox` array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PixelBox {
    /// Creates a new pixel-space box from explicit coordinates.
    #[inline]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// Converts to normalized center form against the given image size.
    ///
    /// The center is `(x + w/2, y + h/2)` scaled by the image dimensions.
    /// No rounding happens here; values keep full f64 precision until they
    /// are formatted for output.
    pub fn normalize(&self, image_width: f64, image_height: f64) -> NormalizedBox {
        NormalizedBox {
            cx: (self.x + self.w / 2.0) / image_width,
            cy: (self.y + self.h / 2.0) / image_height,
            w: self.w / image_width,
            h: self.h / image_height,
        }
    }
}

impl From<[f64; 4]> for PixelBox {
    /// Interprets a COCO `bbox` array as `[x, y, width, height]`.
    #[inline]
    fn from([x, y, w, h]: [f64; 4]) -> Self {
        Self { x, y, w, h }
    }
}

/// An axis-aligned box normalized to the image: (cx, cy) is the center.
///
/// This is the layout of a YOLO label line. Values usually fall in
/// [0.0, 1.0] but are not clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedBox {
    pub cx: f64,
    pub cy: f64,
    pub w: f64,
    pub h: f64,
}

impl NormalizedBox {
    /// Creates a new normalized center-form box.
    #[inline]
    pub fn new(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        Self { cx, cy, w, h }
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cx.is_finite() && self.cy.is_finite() && self.w.is_finite() && self.h.is_finite()
    }

    /// Converts back to pixel XYWH against the given image size.
    ///
    /// Inverse of [`PixelBox::normalize`] up to floating-point precision.
    pub fn denormalize(&self, image_width: f64, image_height: f64) -> PixelBox {
        let w = self.w * image_width;
        let h = self.h * image_height;
        PixelBox {
            x: self.cx * image_width - w / 2.0,
            y: self.cy * image_height - h / 2.0,
            w,
            h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_centers_and_scales() {
        let bbox = PixelBox::new(10.0, 20.0, 30.0, 40.0);
        let norm = bbox.normalize(100.0, 200.0);
        assert_eq!(norm.cx, 0.25);
        assert_eq!(norm.cy, 0.2);
        assert_eq!(norm.w, 0.3);
        assert_eq!(norm.h, 0.2);
    }

    #[test]
    fn test_from_coco_array() {
        let bbox = PixelBox::from([1.5, 2.5, 3.0, 4.0]);
        assert_eq!(bbox, PixelBox::new(1.5, 2.5, 3.0, 4.0));
    }

    #[test]
    fn test_out_of_range_passes_through() {
        // A box hanging past the right edge normalizes to cx > 1.0.
        let bbox = PixelBox::new(90.0, 0.0, 40.0, 10.0);
        let norm = bbox.normalize(100.0, 100.0);
        assert_eq!(norm.cx, 1.1);
        assert_eq!(norm.w, 0.4);
    }

    #[test]
    fn test_zero_size_box() {
        let bbox = PixelBox::new(50.0, 50.0, 0.0, 0.0);
        let norm = bbox.normalize(100.0, 100.0);
        assert_eq!(norm, NormalizedBox::new(0.5, 0.5, 0.0, 0.0));
    }

    #[test]
    fn test_denormalize_roundtrip() {
        let original = PixelBox::new(15.0, 25.0, 50.0, 30.0);
        let restored = original.normalize(640.0, 480.0).denormalize(640.0, 480.0);
        assert!((restored.x - original.x).abs() < 1e-9);
        assert!((restored.y - original.y).abs() < 1e-9);
        assert!((restored.w - original.w).abs() < 1e-9);
        assert!((restored.h - original.h).abs() < 1e-9);
    }

    #[test]
    fn test_is_finite() {
        assert!(NormalizedBox::new(0.5, 0.5, 0.1, 0.1).is_finite());
        assert!(!NormalizedBox::new(f64::NAN, 0.5, 0.1, 0.1).is_finite());
        // Division by a zero-sized image yields infinities, not a panic.
        let norm = PixelBox::new(1.0, 1.0, 2.0, 2.0).normalize(0.0, 100.0);
        assert!(!norm.is_finite());
    }
}
