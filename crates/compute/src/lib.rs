pub mod analysis;
pub mod error;
pub mod report;

pub use analysis::*;
pub use error::*;
pub use report::*;
