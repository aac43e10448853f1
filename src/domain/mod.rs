//! Pure domain models. No I/O, no storage, only data types and core enums.

pub mod account;
pub mod category;
pub mod transaction;

pub use account::*;
pub use category::*;
pub use transaction::*;
