//! Pointer-driven decorative effects and media selection
//!
//! Each effect is plain state plus a pure update step:
//! - `on_*` handlers take a measured `BoundingRect` and pointer coordinates
//! - `to_css()` / `style()` → inline style string for the rendering layer
//!
//! Components own one value per instance inside a `Signal`.

pub mod geometry;
pub mod highlight;
pub mod media;
pub mod tilt;

pub use geometry::BoundingRect;
pub use highlight::CursorHighlight;
pub use media::MediaKind;
pub use tilt::Tilt;
