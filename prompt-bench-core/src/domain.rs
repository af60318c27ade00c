pub mod response;
pub mod result;
pub mod task;

pub use response::*;
pub use result::*;
pub use task::*;
