use crate::buffer::*;

///
/// The transformations applied to the vertices of a draw
///
/// The orthographic projection is per-framebuffer state and lives in `FramebufferState`: the
/// clip-space position of a vertex is `ortho * canvas * model_view * vertex`.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Transform {
    /// Transforms from mesh coordinates to local coordinates
    pub model_view: Matrix,

    /// Transforms from local coordinates to the canvas
    pub canvas: Matrix,

    /// Offset the model view by a fraction of a pixel so non-antialiased geometry hits pixel centres
    pub fudging_offset: bool
}

impl Transform {
    ///
    /// The model view matrix to upload, with the fudge translation applied if requested
    ///
    pub fn effective_model_view(&self, fudge_factor: f32) -> Matrix {
        if self.fudging_offset {
            self.model_view * Matrix::translate(fudge_factor, fudge_factor, 0.0)
        } else {
            self.model_view
        }
    }

    ///
    /// The combined matrix taking mesh coordinates to clip space
    ///
    /// This is the product the shader forms from the uploaded uniforms, so it includes the fudge
    /// translation when `fudging_offset` is set.
    ///
    pub fn clip_matrix(&self, ortho: &Matrix, fudge_factor: f32) -> Matrix {
        *ortho * self.canvas * self.effective_model_view(fudge_factor)
    }
}

impl Default for Transform {
    fn default() -> Transform {
        Transform {
            model_view:     Matrix::identity(),
            canvas:         Matrix::identity(),
            fudging_offset: false
        }
    }
}
