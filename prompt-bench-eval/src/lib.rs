pub mod analyzer;
pub mod evaluator;

pub use analyzer::*;
pub use evaluator::*;
