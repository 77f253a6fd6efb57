pub mod notification;
pub mod specialty;

pub use notification::*;
pub use specialty::Specialty;
