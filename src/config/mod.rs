//! Configuration loading and schema.
//!
//! The configuration supplies the mapping of environment name to variable
//! bindings. This crate only enumerates and filters that mapping; it never
//! interprets the bindings themselves (substitution into requests happens
//! elsewhere).

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file};
pub use schema::RequestConfig;
