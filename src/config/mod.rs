//! Run configuration: schema and loading

mod loader;
mod schema;

pub use loader::{from_json_str, from_path, from_yaml_str};
pub use schema::{AlertRuleSpec, RunSpec};
