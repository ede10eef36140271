mod gl_command;
mod framebuffer_state;
mod renderer_options;
mod render_state;

pub use self::gl_command::*;
pub use self::framebuffer_state::*;
pub use self::renderer_options::*;
pub use self::render_state::*;
