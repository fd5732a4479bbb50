//! todo-services
//!
//! Plan codec, validators and list services.
//! Depends on todo-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod codec;
pub mod error;
pub mod plan_service;
pub mod storage;
pub mod validation;

pub use codec::*;
pub use error::{CoreError, ValidationError};
pub use plan_service::*;
pub use validation::*;

#[cfg(test)]
mod tests;
