pub use super::handle::LoadHandle;
use crate::core::Job;

/// Results posted by worker threads and polled on the UI thread each frame.
#[derive(Debug, Clone)]
pub enum TaskResult {
    JobsLoaded(Result<Vec<Job>, String>),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::JobsLoaded(_) => "jobs_loaded",
        }
    }
}
