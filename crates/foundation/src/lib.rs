pub mod ratio;
pub mod time;

// Foundation crate: small, well-tested primitives only.
pub use ratio::*;
pub use time::*;
