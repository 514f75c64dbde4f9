pub mod error;
pub mod fs;
pub mod result;

pub use error::*;
pub use fs::*;
pub use result::*;
