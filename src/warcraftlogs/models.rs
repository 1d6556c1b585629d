pub use parse::*;
pub use report::*;

pub mod parse;
pub mod report;
