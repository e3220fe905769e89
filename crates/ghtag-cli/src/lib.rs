//! ghtag library - expose modules for testing
//!
//! This library exposes the CLI modules needed for testing and integration.

pub mod commands;
pub mod common;

pub use common::GlobalOpts;
pub use ghtag_logger as logger;
