//! Configuration loading and resolution.
//!
//! `load` merges config files, environment variables and CLI flags into a
//! [`ResolvedConfig`] the rest of the binary consumes.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
