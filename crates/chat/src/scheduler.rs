use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// One-shot delayed tasks for a single session, cancelled together when the
/// session closes. A task aborted before its delay expires never runs.
#[derive(Debug, Default)]
pub struct ReplyScheduler {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl ReplyScheduler {
    /// Run `task` after `delay` on the ambient tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });

        let mut handles = self.handles.lock();
        handles.retain(|pending| !pending.is_finished());
        handles.push(handle);
    }

    pub fn cancel_all(&self) {
        for handle in self.handles.lock().drain(..) {
            handle.abort();
        }
    }
}
