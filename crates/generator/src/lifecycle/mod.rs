//! One complete generator lifecycle
//!
//! [`run_with`] walks a backend through create, start, enqueue, wait, stop
//! and destroy. Whatever was acquired before a failure is released in reverse
//! order:
//!
//! | failing stage | still owed          |
//! |---------------|---------------------|
//! | create        | nothing             |
//! | start         | destroy             |
//! | enqueue, wait | stop, destroy       |
//! | stop          | destroy             |
//!
//! The first failure is the reported one. A stop failure after an earlier
//! failure is logged and otherwise dropped.

mod guard;

use crate::backend::{Backend, BackendError};
use crate::null::NullBackend;
use cwkit_core::{Error, GeneratorConfig, Stage};
use guard::GeneratorGuard;
use tracing::{error, info, instrument, warn};

/// The stage at which a lifecycle failed, with the backend's reason
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    #[error("failed to create the generator: {0}")]
    CreateFailed(#[source] BackendError),
    #[error("failed to start the generator: {0}")]
    StartFailed(#[source] BackendError),
    #[error("failed to enqueue the message: {0}")]
    EnqueueFailed(#[source] BackendError),
    #[error("failed to wait for the queue to drain: {0}")]
    WaitFailed(#[source] BackendError),
    #[error("failed to stop the generator: {0}")]
    StopFailed(#[source] BackendError),
}

impl Failure {
    /// The lifecycle stage that failed
    pub fn stage(&self) -> Stage {
        match self {
            Failure::CreateFailed(_) => Stage::Create,
            Failure::StartFailed(_) => Stage::Start,
            Failure::EnqueueFailed(_) => Stage::Enqueue,
            Failure::WaitFailed(_) => Stage::Wait,
            Failure::StopFailed(_) => Stage::Stop,
        }
    }

    /// The backend error behind this failure
    pub fn backend_error(&self) -> &BackendError {
        match self {
            Failure::CreateFailed(e)
            | Failure::StartFailed(e)
            | Failure::EnqueueFailed(e)
            | Failure::WaitFailed(e)
            | Failure::StopFailed(e) => e,
        }
    }
}

impl From<Failure> for Error {
    fn from(failure: Failure) -> Self {
        let stage = failure.stage();
        let message = failure.to_string();
        let source = failure.backend_error().clone();
        Error::generator_with_source(stage, message, source)
    }
}

/// Keeps the first failure; later ones are only logged.
#[derive(Debug, Default)]
struct Outcome {
    first: Option<Failure>,
}

impl Outcome {
    fn record(&mut self, failure: Failure) {
        error!(stage = %failure.stage(), error = %failure.backend_error(), "generator stage failed");
        match &self.first {
            None => self.first = Some(failure),
            Some(first) => warn!(
                stage = %failure.stage(),
                reported = %first.stage(),
                "later failure not reported, an earlier stage already failed"
            ),
        }
    }

    fn into_result(self) -> Result<(), Failure> {
        match self.first {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

/// Send `message` through a null generator on the default null device.
pub fn run(message: &str) -> Result<(), Failure> {
    run_with(&NullBackend::new(), &GeneratorConfig::null(), message)
}

/// Send `message` through a generator created by `backend` from `config`.
///
/// Destroy runs exactly once whenever create succeeded, and stop runs exactly
/// once whenever start succeeded, whichever stage fails.
#[instrument(skip(backend, config), fields(device = config.sound_device()))]
pub fn run_with<B: Backend>(
    backend: &B,
    config: &GeneratorConfig,
    message: &str,
) -> Result<(), Failure> {
    let mut outcome = Outcome::default();

    let mut generator = match GeneratorGuard::create(backend, config) {
        Ok(generator) => generator,
        Err(e) => {
            outcome.record(Failure::CreateFailed(e));
            return outcome.into_result();
        }
    };

    if let Err(e) = generator.start() {
        outcome.record(Failure::StartFailed(e));
        drop(generator);
        return outcome.into_result();
    }

    match generator.enqueue(message) {
        Err(e) => outcome.record(Failure::EnqueueFailed(e)),
        Ok(()) => {
            if let Err(e) = generator.drain() {
                outcome.record(Failure::WaitFailed(e));
            }
        }
    }

    if let Some(Err(e)) = generator.stop() {
        outcome.record(Failure::StopFailed(e));
    }

    drop(generator);

    let result = outcome.into_result();
    if result.is_ok() {
        info!(chars = message.chars().count(), "message sent");
    }
    result
}
