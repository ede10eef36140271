mod gl_enum;
mod matrix;

pub use self::gl_enum::*;
pub use self::matrix::*;
