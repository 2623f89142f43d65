//! Machine configuration
//!
//! `link.toml` is parsed and validated by the build script, which emits
//! the configuration as a constant. Nothing is parsed on the target.

include!(concat!(env!("OUT_DIR"), "/machine_config.rs"));
