//! Highlight - radial glow that follows the cursor across a pill

use super::geometry::BoundingRect;

pub const GLOW_RADIUS_PX: u32 = 100;
pub const GLOW_INNER: &str = "#656fe288";
pub const GLOW_OUTER: &str = "#00000026";

/// Visibility of the glow. Switches instantly; easing is a CSS transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Hidden,
    Visible,
}

impl HoverState {
    pub const fn opacity(&self) -> u8 {
        match self {
            Self::Hidden => 0,
            Self::Visible => 1,
        }
    }
}

/// Cursor offset inside the pill plus glow visibility
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorHighlight {
    pub x: f64,
    pub y: f64,
    pub hover: HoverState,
}

impl CursorHighlight {
    pub fn on_enter(&mut self) {
        self.hover = HoverState::Visible;
    }

    pub fn on_leave(&mut self) {
        self.hover = HoverState::Hidden;
    }

    /// Track the cursor. Leaves the offset alone when the pill can't be measured.
    pub fn on_move(&mut self, rect: Option<BoundingRect>, client_x: f64, client_y: f64) {
        if let Some(rect) = rect {
            (self.x, self.y) = rect.offset_of(client_x, client_y);
        }
    }

    pub fn opacity(&self) -> u8 {
        self.hover.opacity()
    }

    pub fn gradient_css(&self) -> String {
        format!(
            "radial-gradient({GLOW_RADIUS_PX}px circle at {}px {}px, {GLOW_INNER}, {GLOW_OUTER})",
            self.x, self.y
        )
    }

    /// Inline style for the glow layer
    pub fn style(&self) -> String {
        format!("opacity: {}; background: {};", self.opacity(), self.gradient_css())
    }
}
