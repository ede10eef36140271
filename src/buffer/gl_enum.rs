//!
//! The subset of the OpenGL ES 2.0 enumerations used by draw descriptors
//!
//! These are declared here rather than taken from the `gl` crate so that descriptors can be built
//! and inspected without linking against a GL implementation.
//!

/// An OpenGL object name (0 is never a valid object)
pub type GLuint = u32;

/// An OpenGL enumeration value
pub type GLenum = u32;

pub const GL_ZERO: GLenum                       = 0;
pub const GL_ONE: GLenum                        = 1;
pub const GL_SRC_COLOR: GLenum                  = 0x0300;
pub const GL_ONE_MINUS_SRC_COLOR: GLenum        = 0x0301;
pub const GL_SRC_ALPHA: GLenum                  = 0x0302;
pub const GL_ONE_MINUS_SRC_ALPHA: GLenum        = 0x0303;
pub const GL_DST_ALPHA: GLenum                  = 0x0304;
pub const GL_ONE_MINUS_DST_ALPHA: GLenum        = 0x0305;
pub const GL_DST_COLOR: GLenum                  = 0x0306;
pub const GL_ONE_MINUS_DST_COLOR: GLenum        = 0x0307;
pub const GL_SRC_ALPHA_SATURATE: GLenum         = 0x0308;

pub const GL_TRIANGLES: GLenum                  = 0x0004;
pub const GL_TRIANGLE_STRIP: GLenum             = 0x0005;

pub const GL_UNSIGNED_SHORT: GLenum             = 0x1403;
