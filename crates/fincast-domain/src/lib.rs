//! fincast-domain
//!
//! Pure domain models (Transaction, Budget, Category) and the ephemeral
//! report types the engine emits. No I/O, no storage. Only data types,
//! enums, and the arithmetic that belongs to them.

pub mod budget;
pub mod category;
pub mod common;
pub mod report;
pub mod transaction;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use report::*;
pub use transaction::*;
