//! Scoped ownership of a generator handle

use crate::backend::{Backend, BackendError};
use cwkit_core::{GeneratorConfig, Stage};
use tracing::{debug, warn};

/// Owns a created generator and releases it exactly once on drop.
///
/// The guard also tracks whether a stop is owed: it is owed from a
/// successful start until the first stop attempt. If the guard is dropped
/// while a stop is still owed (an early return or a panic between start and
/// stop), the stop is attempted before the handle is destroyed.
pub(crate) struct GeneratorGuard<'b, B: Backend> {
    backend: &'b B,
    handle: Option<B::Handle>,
    stop_owed: bool,
}

impl<'b, B: Backend> GeneratorGuard<'b, B> {
    pub(crate) fn create(backend: &'b B, config: &GeneratorConfig) -> Result<Self, BackendError> {
        let handle = backend.create(config)?;
        debug!(stage = %Stage::Create, "generator acquired");
        Ok(Self {
            backend,
            handle: Some(handle),
            stop_owed: false,
        })
    }

    pub(crate) fn start(&mut self) -> Result<(), BackendError> {
        let backend = self.backend;
        backend.start(self.handle_mut(Stage::Start)?)?;
        self.stop_owed = true;
        debug!(stage = %Stage::Start, "generator started");
        Ok(())
    }

    pub(crate) fn enqueue(&mut self, text: &str) -> Result<(), BackendError> {
        let backend = self.backend;
        backend.enqueue(self.handle_mut(Stage::Enqueue)?, text)?;
        debug!(stage = %Stage::Enqueue, chars = text.chars().count(), "message enqueued");
        Ok(())
    }

    /// Block until nothing is left queued
    pub(crate) fn drain(&mut self) -> Result<(), BackendError> {
        let backend = self.backend;
        backend.wait_for_queue_level(self.handle_mut(Stage::Wait)?, 0)?;
        debug!(stage = %Stage::Wait, "queue drained");
        Ok(())
    }

    /// Attempt the owed stop. Returns `None` when no stop is owed.
    pub(crate) fn stop(&mut self) -> Option<Result<(), BackendError>> {
        if !self.stop_owed {
            return None;
        }
        // A single attempt, whatever its outcome.
        self.stop_owed = false;
        let backend = self.backend;
        let result = self.handle.as_mut().map(|handle| backend.stop(handle));
        if let Some(Ok(())) = result {
            debug!(stage = %Stage::Stop, "generator stopped");
        }
        result
    }

    fn handle_mut(&mut self, stage: Stage) -> Result<&mut B::Handle, BackendError> {
        self.handle.as_mut().ok_or_else(|| {
            BackendError::invalid_state(format!("generator already released before {stage}"))
        })
    }
}

impl<B: Backend> Drop for GeneratorGuard<'_, B> {
    fn drop(&mut self) {
        if let Some(Err(e)) = self.stop() {
            warn!(stage = %Stage::Stop, error = %e, "stop failed during unwind");
        }
        if let Some(handle) = self.handle.take() {
            self.backend.destroy(handle);
            debug!(stage = %Stage::Destroy, "generator released");
        }
    }
}
