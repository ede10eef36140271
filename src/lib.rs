//!
//! # flo_glop
//!
//! A `Glop` describes everything needed to issue a single OpenGL ES 2.0 draw call: the bounds,
//! the mesh, the fill, the transforms and the blend state. A `GlopBuilder` produces these
//! descriptors and a `RenderState` consumes them, turning each one into the list of GL state
//! changes and the draw call that it represents.
//!
//! Descriptors are single-use: they borrow the programs and client memory they refer to for the
//! duration of a frame and are dropped once rendered.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod buffer;
mod program;
mod glop;
mod builder;
mod renderer;
#[cfg(feature="opengl")] mod gl_renderer;

pub use self::buffer::*;
pub use self::program::*;
pub use self::glop::*;
pub use self::builder::*;
pub use self::renderer::*;
#[cfg(feature="opengl")] pub use self::gl_renderer::*;
