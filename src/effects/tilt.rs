//! Tilt - hover rotation for bento containers
//!
//! The pointer's position inside the container maps linearly to a small
//! rotation about both axes. No clamping: a pointer outside the box keeps
//! scaling, but move events only fire while inside.

use super::geometry::BoundingRect;

/// Degrees of rotation across the full width/height of the container
pub const TILT_RANGE: f64 = 5.0;
pub const PERSPECTIVE_PX: u32 = 700;

/// Rotation in degrees about the X and Y axes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Tilt for a pointer at `(client_x, client_y)` over `rect`
    pub fn from_pointer(rect: &BoundingRect, client_x: f64, client_y: f64) -> Self {
        let (rx, ry) = rect.relative(client_x, client_y);
        // `+ 0.0` folds -0.0 so the centre renders as "0deg"
        Self {
            x: (ry - 0.5) * TILT_RANGE + 0.0,
            y: (rx - 0.5) * -TILT_RANGE + 0.0,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "perspective({PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg) scale3d(.95, .95, .95)",
            self.x, self.y
        )
    }
}

/// CSS `transform` value for the current tilt state; `None` is identity
pub fn transform_css(tilt: Option<Tilt>) -> String {
    tilt.map(|t| t.to_css()).unwrap_or_default()
}

/// Next tilt state after a pointer move. An unmeasurable container keeps `current`.
pub fn on_move(current: Option<Tilt>, rect: Option<BoundingRect>, client_x: f64, client_y: f64) -> Option<Tilt> {
    match rect {
        Some(rect) => Some(Tilt::from_pointer(&rect, client_x, client_y)),
        None => current,
    }
}

/// Pointer left the container
pub fn on_leave(_current: Option<Tilt>) -> Option<Tilt> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: BoundingRect = BoundingRect::new(0.0, 0.0, 200.0, 100.0);

    #[test]
    fn tilt_at_three_quarters() {
        let (rx, ry) = RECT.relative(150.0, 75.0);
        assert_eq!((rx, ry), (0.75, 0.75));

        let tilt = Tilt::from_pointer(&RECT, 150.0, 75.0);
        assert!((tilt.x - 1.25).abs() < 1e-9);
        assert!((tilt.y + 1.25).abs() < 1e-9);
    }

    #[test]
    fn tilt_centre_is_flat() {
        let tilt = Tilt::from_pointer(&RECT, 100.0, 50.0);
        assert_eq!(tilt, Tilt::new(0.0, 0.0));
        assert_eq!(
            tilt.to_css(),
            "perspective(700px) rotateX(0deg) rotateY(0deg) scale3d(.95, .95, .95)"
        );
    }

    #[test]
    fn tilt_bounded_inside_rect() {
        let rect = BoundingRect::new(37.0, 12.0, 321.0, 123.0);
        for i in 0..=10 {
            for j in 0..=10 {
                let cx = rect.left + rect.width * i as f64 / 10.0;
                let cy = rect.top + rect.height * j as f64 / 10.0;
                let (rx, ry) = rect.relative(cx, cy);
                assert!((0.0..=1.0).contains(&rx) && (0.0..=1.0).contains(&ry));

                let tilt = Tilt::from_pointer(&rect, cx, cy);
                assert!(tilt.x.abs() <= 2.5 + 1e-9, "tilt x {} out of range", tilt.x);
                assert!(tilt.y.abs() <= 2.5 + 1e-9, "tilt y {} out of range", tilt.y);
            }
        }
    }

    #[test]
    fn tilt_css_descriptor() {
        let tilt = Tilt::from_pointer(&RECT, 150.0, 75.0);
        assert_eq!(
            transform_css(Some(tilt)),
            "perspective(700px) rotateX(1.25deg) rotateY(-1.25deg) scale3d(.95, .95, .95)"
        );
        assert_eq!(transform_css(None), "");
    }

    #[test]
    fn leave_resets_to_identity() {
        let moved = on_move(None, Some(RECT), 10.0, 90.0);
        assert!(moved.is_some());
        assert_eq!(on_leave(moved), None);
        assert_eq!(on_leave(None), None);
    }

    #[test]
    fn unmeasured_move_keeps_state() {
        let prior = Some(Tilt::new(1.0, -1.0));
        assert_eq!(on_move(prior, None, 150.0, 75.0), prior);
        assert_eq!(on_move(None, None, 150.0, 75.0), None);
    }

    #[test]
    fn tilt_not_clamped_outside() {
        let tilt = Tilt::from_pointer(&RECT, 400.0, 200.0);
        assert!((tilt.x - 7.5).abs() < 1e-9);
        assert!((tilt.y + 7.5).abs() < 1e-9);
    }
}
