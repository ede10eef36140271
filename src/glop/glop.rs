use super::error::*;
use super::bounds::*;
use super::mesh::*;
use super::fill::*;
use super::transform::*;
use super::blend::*;
use super::scissor::*;
use super::stencil::*;

use crate::program::*;

///
/// Everything required to issue a single OpenGL draw
///
/// A `Glop` is a snapshot of references: the program and any client-side vertex or index data are
/// borrowed for the frame, and buffer objects are referred to by name. It owns no GPU resources.
///
/// Each descriptor describes one draw, so it can be moved but not copied:
///
/// ```compile_fail
/// let glop = flo_glop::Glop::new();
/// let copy = glop.clone();
/// ```
///
#[derive(Debug, Default)]
pub struct Glop<'frame> {
    /// The extent of the draw in local coordinates (used for damage tracking)
    pub bounds: Rect,

    /// The vertex and index data
    pub mesh: Mesh<'frame>,

    /// The program, colour and colour filter
    pub fill: Fill<'frame>,

    /// The model view and canvas transforms
    pub transform: Transform,

    /// The blend factors
    pub blend: Blend,

    /// The scissor test
    pub scissor: Scissor,

    /// The stencil test
    pub stencil: StencilMode
}

impl<'frame> Glop<'frame> {
    ///
    /// Creates an empty descriptor: no mesh, no program, identity transforms and blending disabled
    ///
    pub fn new() -> Glop<'frame> {
        Glop::default()
    }

    ///
    /// The description of the program needed to draw this descriptor's mesh and fill
    ///
    pub fn required_program(&self) -> ProgramDescription {
        ProgramDescription::for_fill(self.mesh.vertex_flags, &self.fill.filter)
    }

    ///
    /// Checks the contract between the producer and the consumer of this descriptor
    ///
    pub fn validate(&self) -> Result<(), GlopError> {
        if !self.bounds.is_finite() {
            return Err(GlopError::NonFiniteBounds);
        }

        self.mesh.validate()?;

        let program     = self.fill.program.ok_or(GlopError::MissingProgram)?;
        let required    = self.required_program();

        if *program.description() != required {
            return Err(GlopError::ProgramMismatch { required: required, actual: *program.description() });
        }

        Ok(())
    }
}
