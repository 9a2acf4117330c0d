//! Generator for the null sound system
//!
//! A started [`NullGenerator`] owns a worker thread that takes queued
//! characters one at a time and discards them. Nothing is synthesized; the
//! optional per-character delay only stretches how long the queue takes to
//! drain.

use crate::alphabet;
use crate::backend::{Backend, BackendError, BackendErrorKind};
use crate::debug::{self, DebugChannel, DebugFlags, DebugLevel};
use cwkit_core::{GeneratorConfig, SoundSystem, GENERATOR_QUEUE_CAPACITY, GENERATOR_WORKER_THREAD};
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

static NEXT_GENERATOR_ID: AtomicU64 = AtomicU64::new(1);

/// Where a null generator is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    Running,
    Stopped,
}

#[derive(Debug, Default)]
struct Queue {
    chars: VecDeque<char>,
    running: bool,
    processed: u64,
}

#[derive(Debug, Default)]
struct Shared {
    queue: Mutex<Queue>,
    changed: Condvar,
}

impl Shared {
    fn shut_down(&self) {
        self.queue.lock().running = false;
        self.changed.notify_all();
    }
}

/// Handle to one null generator
#[derive(Debug)]
pub struct NullGenerator {
    id: u64,
    config: GeneratorConfig,
    phase: Phase,
    shared: Arc<Shared>,
    worker: Option<JoinHandle<()>>,
}

impl NullGenerator {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Characters submitted but not yet discarded by the worker
    pub fn queue_length(&self) -> usize {
        self.shared.queue.lock().chars.len()
    }

    /// Characters the worker has discarded so far
    pub fn processed(&self) -> u64 {
        self.shared.queue.lock().processed
    }

    fn require(&self, phase: Phase, operation: &str) -> Result<(), BackendError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(BackendError::invalid_state(format!(
                "cannot {operation} generator {} while {:?}",
                self.id, self.phase
            )))
        }
    }
}

impl Drop for NullGenerator {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            warn!(generator = self.id, "null generator dropped while running");
            self.shared.shut_down();
            join_worker(self.id, worker);
        }
    }
}

/// Wait for a worker thread to exit. Returns false if it panicked.
fn join_worker(id: u64, worker: JoinHandle<()>) -> bool {
    let clean = worker.join().is_ok();
    if !clean {
        warn!(generator = id, "worker thread panicked");
    }
    clean
}

/// Backend producing [`NullGenerator`]s
#[derive(Debug, Clone, Default)]
pub struct NullBackend {
    symbol_delay: Duration,
}

impl NullBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the worker hold each character for `delay` before discarding it
    #[must_use]
    pub fn with_symbol_delay(delay: Duration) -> Self {
        Self {
            symbol_delay: delay,
        }
    }
}

impl Backend for NullBackend {
    type Handle = NullGenerator;

    fn create(&self, config: &GeneratorConfig) -> Result<NullGenerator, BackendError> {
        if config.sound_system() != SoundSystem::Null {
            return Err(BackendError::unsupported(format!(
                "sound system '{}' is not available, only 'null' is",
                config.sound_system()
            )));
        }
        if config.sound_device().trim().is_empty() {
            return Err(BackendError::invalid_input("sound device name is empty"));
        }

        let id = NEXT_GENERATOR_ID.fetch_add(1, Ordering::Relaxed);
        if debug::enabled(DebugChannel::Library, DebugFlags::GENERATOR, DebugLevel::Debug) {
            debug!(
                generator = id,
                device = config.sound_device(),
                "created null generator"
            );
        }

        Ok(NullGenerator {
            id,
            config: config.clone(),
            phase: Phase::Created,
            shared: Arc::new(Shared::default()),
            worker: None,
        })
    }

    fn start(&self, handle: &mut NullGenerator) -> Result<(), BackendError> {
        handle.require(Phase::Created, "start")?;

        handle.shared.queue.lock().running = true;
        let shared = Arc::clone(&handle.shared);
        let id = handle.id;
        let delay = self.symbol_delay;

        let spawned = thread::Builder::new()
            .name(format!("{GENERATOR_WORKER_THREAD}-{id}"))
            .spawn(move || process_queue(id, &shared, delay));

        match spawned {
            Ok(worker) => {
                handle.worker = Some(worker);
                handle.phase = Phase::Running;
                if debug::enabled(DebugChannel::Library, DebugFlags::GENERATOR, DebugLevel::Info)
                {
                    info!(
                        generator = id,
                        device = handle.config.sound_device(),
                        "null generator started"
                    );
                }
                Ok(())
            }
            Err(e) => {
                handle.shared.queue.lock().running = false;
                Err(BackendError::new(
                    BackendErrorKind::Worker,
                    format!("failed to spawn worker thread: {e}"),
                ))
            }
        }
    }

    fn enqueue(&self, handle: &mut NullGenerator, text: &str) -> Result<(), BackendError> {
        handle.require(Phase::Running, "enqueue on")?;
        alphabet::validate(text)?;

        let count = text.chars().count();
        let mut queue = handle.shared.queue.lock();
        if queue.chars.len() + count > GENERATOR_QUEUE_CAPACITY {
            return Err(BackendError::new(
                BackendErrorKind::QueueFull,
                format!(
                    "{count} characters do not fit, {} of {GENERATOR_QUEUE_CAPACITY} slots in use",
                    queue.chars.len()
                ),
            ));
        }
        queue.chars.extend(text.chars().map(|c| c.to_ascii_uppercase()));
        let queued = queue.chars.len();
        drop(queue);
        handle.shared.changed.notify_all();

        if debug::enabled(DebugChannel::Library, DebugFlags::CLIENT, DebugLevel::Debug) {
            debug!(generator = handle.id, count, queued, "enqueued text");
        }
        Ok(())
    }

    fn wait_for_queue_level(
        &self,
        handle: &mut NullGenerator,
        level: usize,
    ) -> Result<(), BackendError> {
        handle.require(Phase::Running, "wait on")?;

        let shared = &handle.shared;
        let mut queue = shared.queue.lock();
        while queue.running && queue.chars.len() > level {
            shared.changed.wait(&mut queue);
        }

        if queue.chars.len() > level {
            return Err(BackendError::invalid_state(format!(
                "generator {} stopped with {} characters still queued",
                handle.id,
                queue.chars.len()
            )));
        }
        Ok(())
    }

    fn stop(&self, handle: &mut NullGenerator) -> Result<(), BackendError> {
        handle.require(Phase::Running, "stop")?;

        handle.shared.shut_down();
        handle.phase = Phase::Stopped;
        let joined = handle.worker.take().map(|worker| join_worker(handle.id, worker));

        let discarded = {
            let mut queue = handle.shared.queue.lock();
            let discarded = queue.chars.len();
            queue.chars.clear();
            discarded
        };
        if discarded > 0 {
            warn!(generator = handle.id, discarded, "stopped with characters still queued");
        }

        if joined == Some(false) {
            return Err(BackendError::new(
                BackendErrorKind::Worker,
                format!("worker thread of generator {} panicked", handle.id),
            ));
        }

        if debug::enabled(DebugChannel::Library, DebugFlags::GENERATOR, DebugLevel::Info) {
            info!(generator = handle.id, "null generator stopped");
        }
        Ok(())
    }

    fn destroy(&self, handle: NullGenerator) {
        if debug::enabled(DebugChannel::Library, DebugFlags::GENERATOR, DebugLevel::Debug) {
            debug!(
                generator = handle.id,
                phase = ?handle.phase,
                processed = handle.processed(),
                "destroying null generator"
            );
        }
        drop(handle);
    }
}

fn process_queue(id: u64, shared: &Shared, delay: Duration) {
    loop {
        let next = {
            let mut queue = shared.queue.lock();
            loop {
                if !queue.running {
                    return;
                }
                if let Some(c) = queue.chars.front().copied() {
                    break c;
                }
                shared.changed.wait(&mut queue);
            }
        };

        // The character stays queued while it is being "sent".
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        let remaining = {
            let mut queue = shared.queue.lock();
            if !queue.running {
                return;
            }
            queue.chars.pop_front();
            queue.processed += 1;
            queue.chars.len()
        };
        shared.changed.notify_all();

        if debug::enabled(DebugChannel::Dev, DebugFlags::TONE_QUEUE, DebugLevel::Debug) {
            trace!(generator = id, character = %next, remaining, "discarded character");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(backend: &NullBackend) -> NullGenerator {
        let mut generator = backend.create(&GeneratorConfig::null()).unwrap();
        backend.start(&mut generator).unwrap();
        generator
    }

    #[test]
    fn test_create_rejects_real_sound_systems() {
        let backend = NullBackend::new();
        let config = GeneratorConfig::new(SoundSystem::Alsa, "default");

        let err = backend.create(&config).unwrap_err();
        assert_eq!(err.kind(), BackendErrorKind::Unsupported);
    }

    #[test]
    fn test_create_rejects_empty_device() {
        let backend = NullBackend::new();
        let err = backend.create(&GeneratorConfig::null_on("  ")).unwrap_err();
        assert_eq!(err.kind(), BackendErrorKind::InvalidInput);
    }

    #[test]
    fn test_generators_get_distinct_ids() {
        let backend = NullBackend::new();
        let a = backend.create(&GeneratorConfig::null()).unwrap();
        let b = backend.create(&GeneratorConfig::null()).unwrap();
        assert_ne!(a.id(), b.id());
        backend.destroy(a);
        backend.destroy(b);
    }

    #[test]
    fn test_enqueue_and_drain() {
        let backend = NullBackend::new();
        let mut generator = started(&backend);

        backend.enqueue(&mut generator, "paris paris").unwrap();
        backend.wait_for_queue_level(&mut generator, 0).unwrap();

        assert_eq!(generator.queue_length(), 0);
        assert_eq!(generator.processed(), 11);

        backend.stop(&mut generator).unwrap();
        assert_eq!(generator.phase(), Phase::Stopped);
        backend.destroy(generator);
    }

    #[test]
    fn test_wait_blocks_until_level_reached() {
        let backend = NullBackend::with_symbol_delay(Duration::from_millis(5));
        let mut generator = started(&backend);

        backend.enqueue(&mut generator, "abcdef").unwrap();
        backend.wait_for_queue_level(&mut generator, 2).unwrap();
        assert!(generator.queue_length() <= 2);

        backend.wait_for_queue_level(&mut generator, 0).unwrap();
        assert_eq!(generator.processed(), 6);

        backend.stop(&mut generator).unwrap();
        backend.destroy(generator);
    }

    #[test]
    fn test_invalid_character_rejects_whole_message() {
        let backend = NullBackend::new();
        let mut generator = started(&backend);

        let err = backend.enqueue(&mut generator, "abc#def").unwrap_err();
        assert_eq!(err.kind(), BackendErrorKind::InvalidInput);
        assert_eq!(generator.queue_length(), 0);
        assert_eq!(generator.processed(), 0);

        backend.stop(&mut generator).unwrap();
        backend.destroy(generator);
    }

    #[test]
    fn test_enqueue_over_capacity_fails() {
        let backend = NullBackend::with_symbol_delay(Duration::from_secs(1));
        let mut generator = started(&backend);

        let text = "e".repeat(GENERATOR_QUEUE_CAPACITY + 1);
        let err = backend.enqueue(&mut generator, &text).unwrap_err();
        assert_eq!(err.kind(), BackendErrorKind::QueueFull);

        backend.stop(&mut generator).unwrap();
        backend.destroy(generator);
    }

    #[test]
    fn test_calls_out_of_order_are_invalid_state() {
        let backend = NullBackend::new();
        let mut generator = backend.create(&GeneratorConfig::null()).unwrap();

        for err in [
            backend.enqueue(&mut generator, "e").unwrap_err(),
            backend.wait_for_queue_level(&mut generator, 0).unwrap_err(),
            backend.stop(&mut generator).unwrap_err(),
        ] {
            assert_eq!(err.kind(), BackendErrorKind::InvalidState);
        }

        backend.start(&mut generator).unwrap();
        let err = backend.start(&mut generator).unwrap_err();
        assert_eq!(err.kind(), BackendErrorKind::InvalidState);

        backend.stop(&mut generator).unwrap();
        let err = backend.stop(&mut generator).unwrap_err();
        assert_eq!(err.kind(), BackendErrorKind::InvalidState);
        backend.destroy(generator);
    }

    #[test]
    fn test_stop_discards_pending_characters() {
        let backend = NullBackend::with_symbol_delay(Duration::from_millis(50));
        let mut generator = started(&backend);

        backend.enqueue(&mut generator, "long message").unwrap();
        backend.stop(&mut generator).unwrap();

        assert_eq!(generator.queue_length(), 0);
        assert!(generator.processed() < 12);
        backend.destroy(generator);
    }

    #[test]
    fn test_join_worker_reports_panicked_thread() {
        let worker = thread::spawn(|| panic!("worker failure"));
        assert!(!join_worker(7, worker));

        let worker = thread::spawn(|| ());
        assert!(join_worker(8, worker));
    }

    #[test]
    fn test_destroy_running_generator_joins_worker() {
        let backend = NullBackend::new();
        let mut generator = started(&backend);
        backend.enqueue(&mut generator, "e").unwrap();

        // Drop must not hang on the parked worker.
        backend.destroy(generator);
    }
}
