//! A backend that records calls and fails on request
//!
//! Useful for checking what a lifecycle owes the backend after each kind of
//! failure without involving a real generator.

use crate::backend::{Backend, BackendError};
use cwkit_core::{GeneratorConfig, Stage};
use parking_lot::Mutex;
use std::collections::BTreeSet;

/// Handle produced by [`ScriptedBackend`]
#[derive(Debug, PartialEq, Eq)]
pub struct ScriptedHandle {
    id: u64,
}

#[derive(Debug, Default)]
struct Record {
    calls: Vec<Stage>,
    messages: Vec<String>,
    created: Vec<u64>,
    destroyed: Vec<u64>,
}

/// Records every call in order and fails the stages it was told to fail.
///
/// `Destroy` cannot fail; listing it has no effect.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    failing: BTreeSet<Stage>,
    record: Mutex<Record>,
}

impl ScriptedBackend {
    /// A backend where every call succeeds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that fails each stage in `stages`
    #[must_use]
    pub fn failing(stages: impl IntoIterator<Item = Stage>) -> Self {
        Self {
            failing: stages.into_iter().collect(),
            record: Mutex::default(),
        }
    }

    /// The error returned for a scripted failure at `stage`
    pub fn error(stage: Stage) -> BackendError {
        BackendError::invalid_state(format!("scripted {stage} failure"))
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<Stage> {
        self.record.lock().calls.clone()
    }

    /// How many times `stage` was called
    pub fn count(&self, stage: Stage) -> usize {
        self.record.lock().calls.iter().filter(|s| **s == stage).count()
    }

    /// Messages passed to enqueue
    pub fn messages(&self) -> Vec<String> {
        self.record.lock().messages.clone()
    }

    /// Ids of handles handed out by successful creates
    pub fn created(&self) -> Vec<u64> {
        self.record.lock().created.clone()
    }

    /// Ids of handles released, in release order
    pub fn destroyed(&self) -> Vec<u64> {
        self.record.lock().destroyed.clone()
    }

    fn call(&self, stage: Stage) -> Result<(), BackendError> {
        self.record.lock().calls.push(stage);
        if self.failing.contains(&stage) {
            Err(Self::error(stage))
        } else {
            Ok(())
        }
    }
}

impl Backend for ScriptedBackend {
    type Handle = ScriptedHandle;

    fn create(&self, _config: &GeneratorConfig) -> Result<ScriptedHandle, BackendError> {
        self.call(Stage::Create)?;
        let mut record = self.record.lock();
        let id = record.created.len() as u64 + 1;
        record.created.push(id);
        Ok(ScriptedHandle { id })
    }

    fn start(&self, _handle: &mut ScriptedHandle) -> Result<(), BackendError> {
        self.call(Stage::Start)
    }

    fn enqueue(&self, _handle: &mut ScriptedHandle, text: &str) -> Result<(), BackendError> {
        self.record.lock().messages.push(text.to_string());
        self.call(Stage::Enqueue)
    }

    fn wait_for_queue_level(
        &self,
        _handle: &mut ScriptedHandle,
        _level: usize,
    ) -> Result<(), BackendError> {
        self.call(Stage::Wait)
    }

    fn stop(&self, _handle: &mut ScriptedHandle) -> Result<(), BackendError> {
        self.call(Stage::Stop)
    }

    fn destroy(&self, handle: ScriptedHandle) {
        let mut record = self.record.lock();
        record.calls.push(Stage::Destroy);
        record.destroyed.push(handle.id);
    }
}
