mod error;
mod bounds;
mod mesh;
mod fill;
mod transform;
mod blend;
mod scissor;
mod stencil;
mod glop;

pub use self::error::*;
pub use self::bounds::*;
pub use self::mesh::*;
pub use self::fill::*;
pub use self::transform::*;
pub use self::blend::*;
pub use self::scissor::*;
pub use self::stencil::*;
pub use self::glop::*;
