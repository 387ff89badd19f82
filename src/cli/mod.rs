pub mod orchestration;

pub use orchestration::{run_workflow, VersionWorkflowArgs, WorkflowResult};
