pub mod radiocarbon;
pub mod statistics;

pub use radiocarbon::*;
pub use statistics::*;
