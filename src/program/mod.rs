mod xfer_mode;
mod color_filter_mode;
mod program_description;
mod program;
mod program_cache;

pub use self::xfer_mode::*;
pub use self::color_filter_mode::*;
pub use self::program_description::*;
pub use self::program::*;
pub use self::program_cache::*;
