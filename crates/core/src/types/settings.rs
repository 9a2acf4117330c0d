//! Demo settings resolved from the process environment

use crate::constants::{
    CWKIT_MESSAGE_VAR, CWKIT_SOUND_DEVICE_VAR, DEFAULT_MESSAGE, DEFAULT_NULL_DEVICE,
};
use crate::types::SoundSystem;
use std::env;

/// Settings for a demo run. Command-line flags override these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub message: String,
    pub sound_device: String,
    /// Not read from the environment; only the command line selects it.
    pub sound_system: SoundSystem,
}

impl Settings {
    /// Read settings from `CWKIT_*` variables, falling back to defaults.
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            message: read(CWKIT_MESSAGE_VAR, DEFAULT_MESSAGE),
            sound_device: read(CWKIT_SOUND_DEVICE_VAR, DEFAULT_NULL_DEVICE),
            sound_system: SoundSystem::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_nothing_set() {
        let settings = Settings::default();
        assert_eq!(settings.message, DEFAULT_MESSAGE);
        assert_eq!(settings.sound_device, DEFAULT_NULL_DEVICE);
        assert_eq!(settings.sound_system, SoundSystem::Null);
    }

    #[test]
    fn test_lookup_overrides_and_empty_values() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(CWKIT_MESSAGE_VAR, "cq cq"), (CWKIT_SOUND_DEVICE_VAR, "")]);
        let settings = Settings::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.message, "cq cq");
        assert_eq!(settings.sound_device, DEFAULT_NULL_DEVICE);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_variables() {
        env::set_var(CWKIT_MESSAGE_VAR, "test de cwkit");
        let settings = Settings::from_env();
        env::remove_var(CWKIT_MESSAGE_VAR);

        assert_eq!(settings.message, "test de cwkit");
    }
}
