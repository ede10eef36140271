use gl;

use std::fmt;
use std::error::Error;

///
/// An error reported by `glGetError`
///
#[derive(Debug, Clone, PartialEq, Hash)]
pub enum GlError {
    /// Error without a string translation
    UnknownError(u32),

    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlError::UnknownError(code)             => write!(f, "unknown GL error {:#06x}", code),
            GlError::InvalidEnum                    => write!(f, "GL_INVALID_ENUM"),
            GlError::InvalidValue                   => write!(f, "GL_INVALID_VALUE"),
            GlError::InvalidOperation               => write!(f, "GL_INVALID_OPERATION"),
            GlError::InvalidFramebufferOperation    => write!(f, "GL_INVALID_FRAMEBUFFER_OPERATION"),
            GlError::OutOfMemory                    => write!(f, "GL_OUT_OF_MEMORY")
        }
    }
}

impl Error for GlError { }

impl GlError {
    ///
    /// Converts a value returned by `glGetError`, or None for `GL_NO_ERROR`
    ///
    pub fn from_gl_enum(code: gl::types::GLenum) -> Option<GlError> {
        match code {
            gl::NO_ERROR                        => None,
            gl::INVALID_ENUM                    => Some(GlError::InvalidEnum),
            gl::INVALID_VALUE                   => Some(GlError::InvalidValue),
            gl::INVALID_OPERATION               => Some(GlError::InvalidOperation),
            gl::INVALID_FRAMEBUFFER_OPERATION   => Some(GlError::InvalidFramebufferOperation),
            gl::OUT_OF_MEMORY                   => Some(GlError::OutOfMemory),
            unknown                             => Some(GlError::UnknownError(unknown))
        }
    }
}

///
/// Drains the error flags of the current GL context
///
/// GL keeps one flag per kind of error, so this stops once `glGetError` reports no more.
///
pub fn take_gl_errors() -> Vec<GlError> {
    std::iter::from_fn(|| GlError::from_gl_enum(unsafe { gl::GetError() })).collect()
}
