use std::{
    sync::{
        atomic::{
            AtomicBool,
            Ordering,
        },
        mpsc,
        Arc,
    },
    thread,
    time::Duration,
};

use tokio::runtime::Runtime;

use super::{
    LoadHandle,
    TaskResult,
};
use crate::core::{
    http,
    Job,
    JobDeckError,
};

/// Owns the tokio runtime and the channel the UI thread polls. At most one
/// job load is in flight; starting a new one cancels the previous handle.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    active_load: Option<LoadHandle>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender, active_load: None }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    /// Loads the job document from `location`, holding a successful result
    /// back by `delay` so the spinner gets its minimum screen time.
    /// Failures are delivered immediately.
    pub fn load_jobs(&mut self, location: String, delay: Duration) {
        self.cancel_active_load();

        let sender = self.sender.clone();
        let runtime = self.runtime.clone();
        let cancel_token = Arc::new(AtomicBool::new(false));
        let token = cancel_token.clone();

        let join_handle = thread::spawn(move || {
            println!("Loading job data from: {}", location);

            let result = runtime.block_on(async {
                let client = http::http_client()?;
                let jobs = http::load_jobs(&client, &location).await?;
                tokio::time::sleep(delay).await;
                Ok::<Vec<Job>, JobDeckError>(jobs)
            });

            if token.load(Ordering::Relaxed) {
                return;
            }

            let _ = sender.send(TaskResult::JobsLoaded(result.map_err(|e| e.to_string())));
        });

        self.active_load = Some(LoadHandle::new(cancel_token, join_handle));
    }

    pub fn cancel_active_load(&mut self) {
        if let Some(handle) = self.active_load.take() {
            if !handle.is_finished() {
                handle.cancel();
            }
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.cancel_active_load();
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
