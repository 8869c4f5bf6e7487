#![doc(test(attr(deny(warnings))))]

//! Trip Core offers the reservation ledger, flexible date parsing, and trip
//! reporting primitives that power higher level travel-planning workflows.

pub mod config;
pub mod domain;
pub mod errors;
pub mod parse;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Trip Core tracing initialized.");
    });
}
