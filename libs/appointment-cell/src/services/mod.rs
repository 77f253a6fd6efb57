pub mod builder;
pub mod pricing;

pub use builder::*;
pub use pricing::*;
