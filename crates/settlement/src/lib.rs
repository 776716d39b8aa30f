pub mod executor;
pub mod ledger;
pub mod recorder;

pub use executor::*;
pub use ledger::*;
pub use recorder::*;
