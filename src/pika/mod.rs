//! The Pika language, split into submodules according to their functionality.
//! See the crate-level documentation for further information.

// Shared functionality
mod util;

// Specific Phases
pub mod token;
