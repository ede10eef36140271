///
/// An axis-aligned rectangle
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left:   f32,
    pub top:    f32,
    pub right:  f32,
    pub bottom: f32
}

impl Rect {
    ///
    /// Creates a new rectangle from its edges
    ///
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Rect {
        Rect { left, top, right, bottom }
    }

    ///
    /// Creates a rectangle with its top-left corner at the origin
    ///
    pub const fn with_size(width: f32, height: f32) -> Rect {
        Rect::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    ///
    /// True if this rectangle covers no area
    ///
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    ///
    /// Returns the smallest rectangle containing both this rectangle and another one
    ///
    /// Empty rectangles contribute nothing to the union.
    ///
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            *other
        } else if other.is_empty() {
            *self
        } else {
            Rect::new(
                self.left.min(other.left),
                self.top.min(other.top),
                self.right.max(other.right),
                self.bottom.max(other.bottom))
        }
    }

    ///
    /// True if all four edges are finite numbers
    ///
    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite() && self.right.is_finite() && self.bottom.is_finite()
    }
}
