use crate::buffer::*;
use crate::glop::*;

///
/// The uniforms set by the renderer
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Uniform {
    /// The orthographic projection for the framebuffer
    Projection,

    /// The model view matrix (including any fudge offset)
    ModelView,

    /// The canvas transform
    Transform,

    /// The constant fill colour
    Color,

    /// The 4x4 matrix of a colour matrix filter
    ColorMatrix,

    /// The offset vector of a colour matrix filter
    ColorMatrixVector,

    /// The constant colour of a blend colour filter
    ColorFilterColor
}

impl Uniform {
    ///
    /// The name of this uniform in the shader source
    ///
    pub fn name(&self) -> &'static str {
        match self {
            Uniform::Projection         => "projection",
            Uniform::ModelView          => "modelView",
            Uniform::Transform          => "transform",
            Uniform::Color              => "color",
            Uniform::ColorMatrix        => "colorMatrix",
            Uniform::ColorMatrixVector  => "colorMatrixVector",
            Uniform::ColorFilterColor   => "colorBlend"
        }
    }
}

///
/// Where the data for a vertex attribute is read from
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AttribData<'frame> {
    /// Byte offset into the bound vertex buffer object
    BufferOffset(usize),

    /// Client memory starting at the first instance of the attribute
    Client(&'frame [u8])
}

///
/// A scissor box in window coordinates (origin at the bottom-left, as GL expects)
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ScissorBox {
    pub x:      i32,
    pub y:      i32,
    pub width:  i32,
    pub height: i32
}

///
/// A single change to the GL state, or a draw call
///
#[derive(Clone, PartialEq, Debug)]
pub enum GlCommand<'frame> {
    ///
    /// Sets the viewport to cover a framebuffer of the specified size
    ///
    Viewport(usize, usize),

    ///
    /// Makes a program current
    ///
    UseProgram(GLuint),

    ///
    /// Binds `GL_ARRAY_BUFFER` (0 to read vertices from client memory)
    ///
    BindVertexBuffer(GLuint),

    ///
    /// Binds `GL_ELEMENT_ARRAY_BUFFER` (0 to read indices from client memory)
    ///
    BindIndexBuffer(GLuint),

    EnableVertexAttrib(VertexAttrib),
    DisableVertexAttrib(VertexAttrib),

    ///
    /// Points a vertex attribute at its data
    ///
    VertexAttribPointer { attrib: VertexAttrib, stride: usize, data: AttribData<'frame> },

    ///
    /// Uploads a 4x4 matrix, in column-major order
    ///
    UniformMatrix(Uniform, [f32; 16]),

    ///
    /// Uploads a 4-component vector
    ///
    UniformVec4(Uniform, [f32; 4]),

    EnableBlend,
    DisableBlend,

    ///
    /// Sets the source and destination blend factors
    ///
    BlendFunc(BlendFactor, BlendFactor),

    EnableScissor,
    DisableScissor,

    ///
    /// Sets the scissor box
    ///
    SetScissor(ScissorBox),

    ///
    /// Configures (or switches off) the stencil test
    ///
    SetStencil(StencilMode),

    ///
    /// Draws consecutive vertices starting from the first
    ///
    DrawArrays { mode: PrimitiveMode, count: usize },

    ///
    /// Draws vertices using 16-bit indices
    ///
    DrawElements { mode: PrimitiveMode, count: usize, indices: IndexSource<'frame> }
}
