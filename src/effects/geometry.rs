//! Geometry - bounding rectangles measured from the live DOM

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Element rectangle in viewport (client) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Measure the element with the given DOM id.
    ///
    /// `None` when there is no window, the element is not mounted yet,
    /// or it has no layout box.
    pub fn measure(id: &str) -> Option<Self> {
        let element = web_sys::window()?.document()?.get_element_by_id(id)?;
        let rect = element.get_bounding_client_rect();
        let measured = Self::new(rect.left(), rect.top(), rect.width(), rect.height());
        measured.has_area().then_some(measured)
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Pointer offset from the top-left corner, in pixels
    pub fn offset_of(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }

    /// Pointer position as a fraction of width/height (0.0 - 1.0 when inside)
    pub fn relative(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        let (dx, dy) = self.offset_of(client_x, client_y);
        (dx / self.width, dy / self.height)
    }
}

/// Unique DOM id for a component instance, e.g. `bento-tilt-3`
pub fn unique_id(prefix: &str) -> String {
    format!("{prefix}-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_inside_rect() {
        let rect = BoundingRect::new(10.0, 20.0, 200.0, 100.0);
        let (rx, ry) = rect.relative(60.0, 95.0);
        assert!((rx - 0.25).abs() < 1e-9);
        assert!((ry - 0.75).abs() < 1e-9);
    }

    #[test]
    fn offset_from_top_left() {
        let rect = BoundingRect::new(100.0, 40.0, 80.0, 30.0);
        assert_eq!(rect.offset_of(130.0, 52.0), (30.0, 12.0));
    }

    #[test]
    fn zero_sized_rect_has_no_area() {
        assert!(!BoundingRect::default().has_area());
        assert!(BoundingRect::new(0.0, 0.0, 1.0, 1.0).has_area());
    }

    #[test]
    fn ids_are_distinct() {
        let a = unique_id("bento-tilt");
        let b = unique_id("bento-tilt");
        assert_ne!(a, b);
        assert!(a.starts_with("bento-tilt-"));
    }
}
