pub mod runner;
pub mod strategy;
pub mod templates;

pub use runner::*;
pub use strategy::*;
pub use templates::*;
