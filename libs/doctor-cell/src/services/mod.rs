pub mod directory;
pub mod factory;

pub use directory::*;
pub use factory::*;
