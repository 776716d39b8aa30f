pub mod intent;
pub mod pair;
pub mod result;

pub use intent::*;
pub use pair::*;
pub use result::*;

pub use cosmwasm_std::Uint128;
