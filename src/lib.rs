//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine crates under one name so drivers and integration
//! tests can use `blockfall::{core, engine, types}`.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;
