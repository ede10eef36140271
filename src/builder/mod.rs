mod glop_builder;

pub use self::glop_builder::*;
