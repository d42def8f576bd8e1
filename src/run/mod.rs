//! Run validation and orchestration

mod orchestrator;
mod validate;

pub use orchestrator::{run, run_with_artifact, RunOutput};
pub use validate::{validate, RunPlan};
