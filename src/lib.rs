//! LOLWUT computer art (workspace facade crate).
//!
//! Re-exports the member crates as `lolwut::{core,term,types}` and hosts the
//! command line interpretation shared by the binary and its tests.

pub mod cli;

pub use lolwut_core as core;
pub use lolwut_term as term;
pub use lolwut_types as types;

pub use cli::{Args, Art, Invocation};
