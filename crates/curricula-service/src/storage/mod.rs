//! Storage backends for workflow heads and audit trails

mod memory;
mod traits;

pub use memory::MemoryWorkflowStore;
pub use traits::WorkflowStore;
