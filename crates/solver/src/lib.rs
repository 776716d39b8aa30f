pub mod pipeline;
pub mod store;

pub use pipeline::*;
pub use store::*;
