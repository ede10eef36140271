use super::bounds::*;

use bitflags::bitflags;

bitflags! {
    ///
    /// The edges of a scissor rectangle that actually clip
    ///
    #[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ScissorEdges: u8 {
        const LEFT      = 1 << 0;
        const TOP       = 1 << 1;
        const RIGHT     = 1 << 2;
        const BOTTOM    = 1 << 3;
    }
}

///
/// The scissor state for a draw
///
/// Only the edges listed in `edges` clip: an empty set means the scissor test is off.
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Scissor {
    pub rect:   Rect,
    pub edges:  ScissorEdges
}

impl Scissor {
    /// Scissoring is switched off
    pub const DISABLED: Scissor = Scissor { rect: Rect::new(0.0, 0.0, 0.0, 0.0), edges: ScissorEdges::empty() };

    ///
    /// A scissor that clips on all four edges of a rectangle
    ///
    pub fn clip_to(rect: Rect) -> Scissor {
        Scissor {
            rect:   rect,
            edges:  ScissorEdges::all()
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.edges.is_empty()
    }

    ///
    /// The rectangle the scissor test clips to within a viewport: edges that are not enabled take the
    /// viewport's edge
    ///
    pub fn clip_rect(&self, viewport: &Rect) -> Rect {
        Rect::new(
            if self.edges.contains(ScissorEdges::LEFT)      { self.rect.left }     else { viewport.left },
            if self.edges.contains(ScissorEdges::TOP)       { self.rect.top }      else { viewport.top },
            if self.edges.contains(ScissorEdges::RIGHT)     { self.rect.right }    else { viewport.right },
            if self.edges.contains(ScissorEdges::BOTTOM)    { self.rect.bottom }   else { viewport.bottom })
    }
}
