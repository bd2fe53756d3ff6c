//! Configuration module
//!
//! Settings come from a YAML file plus `NEWSDESK_*` environment overrides
//! and are passed explicitly into the components that need them; there is
//! no process-global configuration state.

mod settings;

pub use settings::*;
