/// Constants used throughout the cwkit codebase
// Environment variable names
pub const CWKIT_MESSAGE_VAR: &str = "CWKIT_MESSAGE";
pub const CWKIT_SOUND_DEVICE_VAR: &str = "CWKIT_SOUND_DEVICE";
pub const CWKIT_LOG_VAR: &str = "CWKIT_LOG";

// Generator defaults
pub const DEFAULT_MESSAGE: &str = "paris";
pub const DEFAULT_NULL_DEVICE: &str = "null";

/// Maximum number of characters the null generator keeps queued at once.
pub const GENERATOR_QUEUE_CAPACITY: usize = 3000;

/// Name given to the background thread of a started generator.
pub const GENERATOR_WORKER_THREAD: &str = "cwkit-generator";
