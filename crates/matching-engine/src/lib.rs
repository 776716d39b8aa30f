pub mod compat;
pub mod pairing;

pub use compat::*;
pub use pairing::*;
