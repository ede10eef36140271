use super::error::*;

use crate::buffer::*;
use crate::glop::*;
use crate::renderer::*;

use gl;
use log::error;

use std::ptr;
use std::ffi::{CString, c_void};
use std::collections::{HashMap};

///
/// Sends `GlCommand`s to the current OpenGL context
///
/// Programs are expected to bind their attributes to the locations given by `VertexAttrib::location()`.
///
pub struct GlCommandExecutor {
    /// The program made current by the last `UseProgram` command
    current_program: GLuint,

    /// Uniform locations that have been looked up, by program
    uniform_locations: HashMap<(GLuint, Uniform), Option<gl::types::GLint>>
}

impl GlCommandExecutor {
    ///
    /// Creates a new command executor
    ///
    pub fn new() -> GlCommandExecutor {
        GlCommandExecutor {
            current_program:    0,
            uniform_locations:  HashMap::new()
        }
    }

    ///
    /// Forgets the uniform locations for a program (call when a program is deleted)
    ///
    pub fn forget_program(&mut self, program: GLuint) {
        self.uniform_locations.retain(|(uniform_program, _), _| *uniform_program != program);
    }

    ///
    /// Performs the specified commands against the current GL context
    ///
    /// Returns the errors GL reported while running the commands (empty if everything succeeded).
    ///
    pub fn execute<'frame, Commands: IntoIterator<Item=GlCommand<'frame>>>(&mut self, commands: Commands) -> Vec<GlError> {
        for command in commands {
            use self::GlCommand::*;

            unsafe {
                match command {
                    Viewport(width, height)                     => { gl::Viewport(0, 0, width as gl::types::GLsizei, height as gl::types::GLsizei); }
                    UseProgram(program)                         => { gl::UseProgram(program); self.current_program = program; }
                    BindVertexBuffer(buffer)                    => { gl::BindBuffer(gl::ARRAY_BUFFER, buffer); }
                    BindIndexBuffer(buffer)                     => { gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, buffer); }
                    EnableVertexAttrib(attrib)                  => { gl::EnableVertexAttribArray(attrib.location()); }
                    DisableVertexAttrib(attrib)                 => { gl::DisableVertexAttribArray(attrib.location()); }
                    VertexAttribPointer { attrib, stride, data } => { self.vertex_attrib_pointer(attrib, stride, data); }
                    UniformMatrix(uniform, matrix)              => { self.uniform_location(uniform).map(|location| gl::UniformMatrix4fv(location, 1, gl::FALSE, matrix.as_ptr())); }
                    UniformVec4(uniform, [x, y, z, w])          => { self.uniform_location(uniform).map(|location| gl::Uniform4f(location, x, y, z, w)); }
                    EnableBlend                                 => { gl::Enable(gl::BLEND); }
                    DisableBlend                                => { gl::Disable(gl::BLEND); }
                    BlendFunc(src, dst)                         => { gl::BlendFunc(src.to_gl_enum(), dst.to_gl_enum()); }
                    EnableScissor                               => { gl::Enable(gl::SCISSOR_TEST); }
                    DisableScissor                              => { gl::Disable(gl::SCISSOR_TEST); }
                    SetScissor(ScissorBox { x, y, width, height }) => { gl::Scissor(x, y, width, height); }
                    SetStencil(mode)                            => { self.stencil_mode(mode); }
                    DrawArrays { mode, count }                  => { gl::DrawArrays(mode.to_gl_enum(), 0, count as gl::types::GLsizei); }
                    DrawElements { mode, count, indices }       => { self.draw_elements(mode, count, indices); }
                }
            }
        }

        let errors = take_gl_errors();
        for error in errors.iter() {
            error!("GL error while executing draw commands: {}", error);
        }

        errors
    }

    ///
    /// Looks up the location of a uniform in the current program
    ///
    fn uniform_location(&mut self, uniform: Uniform) -> Option<gl::types::GLint> {
        let program = self.current_program;

        *self.uniform_locations.entry((program, uniform))
            .or_insert_with(|| {
                let name        = CString::new(uniform.name()).ok()?;
                let location    = unsafe { gl::GetUniformLocation(program, name.as_ptr()) };

                if location >= 0 { Some(location) } else { None }
            })
    }

    ///
    /// Points an attribute at a buffer offset or at client memory
    ///
    unsafe fn vertex_attrib_pointer(&self, attrib: VertexAttrib, stride: usize, data: AttribData) {
        let pointer = match data {
            AttribData::BufferOffset(offset)    => offset as *const c_void,
            AttribData::Client(bytes)           => bytes.as_ptr() as *const c_void
        };

        gl::VertexAttribPointer(attrib.location(), attrib.component_count() as gl::types::GLint, gl::FLOAT, gl::FALSE, stride as gl::types::GLsizei, pointer);
    }

    ///
    /// Draws 16-bit indexed geometry
    ///
    unsafe fn draw_elements(&self, mode: PrimitiveMode, count: usize, indices: IndexSource) {
        let pointer = match indices {
            IndexSource::Buffer(_)          => ptr::null(),
            IndexSource::Client(indices)    => indices.as_ptr() as *const c_void
        };

        gl::DrawElements(mode.to_gl_enum(), count as gl::types::GLsizei, GL_UNSIGNED_SHORT, pointer);
    }

    ///
    /// Configures the stencil test for a stencil mode
    ///
    unsafe fn stencil_mode(&self, mode: StencilMode) {
        match mode {
            StencilMode::Disabled => {
                gl::Disable(gl::STENCIL_TEST);
                gl::ColorMask(gl::TRUE, gl::TRUE, gl::TRUE, gl::TRUE);
            }

            StencilMode::DrawInto => {
                gl::Enable(gl::STENCIL_TEST);
                gl::StencilFunc(gl::ALWAYS, 1, 0xff);
                gl::StencilOp(gl::KEEP, gl::KEEP, gl::REPLACE);
                gl::ColorMask(gl::FALSE, gl::FALSE, gl::FALSE, gl::FALSE);
            }

            StencilMode::Mask => {
                gl::Enable(gl::STENCIL_TEST);
                gl::StencilFunc(gl::EQUAL, 1, 0xff);
                gl::StencilOp(gl::KEEP, gl::KEEP, gl::KEEP);
                gl::ColorMask(gl::TRUE, gl::TRUE, gl::TRUE, gl::TRUE);
            }

            StencilMode::Count => {
                gl::Enable(gl::STENCIL_TEST);
                gl::StencilFunc(gl::ALWAYS, 0, 0xff);
                gl::StencilOp(gl::KEEP, gl::KEEP, gl::INCR_WRAP);
                gl::ColorMask(gl::FALSE, gl::FALSE, gl::FALSE, gl::FALSE);
            }
        }
    }
}

impl Default for GlCommandExecutor {
    fn default() -> GlCommandExecutor {
        GlCommandExecutor::new()
    }
}
