use super::gl_command::*;

use crate::buffer::*;
use crate::glop::*;

///
/// The state that applies to every draw into a framebuffer
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FramebufferState {
    /// Width in pixels
    pub width: usize,

    /// Height in pixels
    pub height: usize,

    /// Maps framebuffer coordinates (origin at the top-left, y pointing down) to clip space
    pub ortho: Matrix
}

impl FramebufferState {
    ///
    /// Creates the state for a framebuffer of the specified size
    ///
    pub fn new(width: usize, height: usize) -> FramebufferState {
        FramebufferState {
            width:  width,
            height: height,
            ortho:  Matrix::ortho(0.0, width as f32, height as f32, 0.0, -1.0, 1.0)
        }
    }

    ///
    /// The area covered by this framebuffer
    ///
    pub fn viewport(&self) -> Rect {
        Rect::with_size(self.width as f32, self.height as f32)
    }

    ///
    /// Converts a scissor to the box passed to `glScissor`
    ///
    pub fn scissor_box(&self, scissor: &Scissor) -> ScissorBox {
        let clip    = scissor.clip_rect(&self.viewport());
        let left    = clip.left.floor() as i32;
        let top     = clip.top.floor() as i32;
        let right   = clip.right.ceil() as i32;
        let bottom  = clip.bottom.ceil() as i32;

        ScissorBox {
            x:      left,
            y:      self.height as i32 - bottom,
            width:  (right - left).max(0),
            height: (bottom - top).max(0)
        }
    }
}

impl Default for FramebufferState {
    fn default() -> FramebufferState {
        FramebufferState::new(1, 1)
    }
}
