//! Observability: tracing subscriber setup.
//!
//! Diagnostics are written to a dated file in the data directory rather
//! than stdout, which belongs to the terminal renderer.

pub mod init;

pub use init::init_tracing;
