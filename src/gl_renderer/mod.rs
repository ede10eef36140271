mod error;
mod command_executor;

pub use self::error::*;
pub use self::command_executor::*;
