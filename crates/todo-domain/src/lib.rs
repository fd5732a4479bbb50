//! todo-domain
//!
//! Pure domain models (Category keys, Plans, due dates and times).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod category;
pub mod plan;

pub use category::*;
pub use plan::*;
