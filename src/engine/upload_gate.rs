use tokio::sync::{Mutex, MutexGuard};
use tracing::warn;

use crate::config::UploadPolicy;
use crate::engine::errors::UploadError;

/// Serializes writers against one store. Holding the guard is holding the right to write.
pub struct UploadGate {
    lock: Mutex<()>,
    policy: UploadPolicy
}

impl UploadGate {
    pub fn new(policy: UploadPolicy) -> Self {
        Self {
            lock: Mutex::new(()),
            policy
        }
    }

    pub async fn acquire(&self) -> Result<MutexGuard<'_, ()>, UploadError> {
        match self.policy {
            UploadPolicy::Queue => Ok(self.lock.lock().await),
            UploadPolicy::Reject => self.lock.try_lock().map_err(|_| {
                warn!("Rejected write: another upload is in flight");
                UploadError::Busy
            })
        }
    }
}
