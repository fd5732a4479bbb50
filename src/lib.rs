#![doc(test(attr(deny(warnings))))]

//! Todo Core offers the category settings, plan persistence and editing
//! session primitives behind the four-class plan tracker CLI.

pub mod cli;
pub mod core;
pub mod utils;

pub use todo_domain::{Category, CategoryKey, DueDate, DueTime, Plan};
pub use todo_services::{codec, validation};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Todo Core tracing initialized.");
    });
}
