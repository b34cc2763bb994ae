pub mod grades;
pub mod log_line;

pub use grades::*;
pub use log_line::*;
