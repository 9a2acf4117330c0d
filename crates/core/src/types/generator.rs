//! Generator configuration types

use crate::constants::DEFAULT_NULL_DEVICE;
use crate::errors::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The output backend a generator writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SoundSystem {
    /// Discards all output; no hardware is touched
    #[default]
    Null,
    Console,
    Oss,
    Alsa,
    PulseAudio,
    Soundcard,
}

impl SoundSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            SoundSystem::Null => "null",
            SoundSystem::Console => "console",
            SoundSystem::Oss => "oss",
            SoundSystem::Alsa => "alsa",
            SoundSystem::PulseAudio => "pulseaudio",
            SoundSystem::Soundcard => "soundcard",
        }
    }
}

impl fmt::Display for SoundSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoundSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "null" => Ok(SoundSystem::Null),
            "console" => Ok(SoundSystem::Console),
            "oss" => Ok(SoundSystem::Oss),
            "alsa" => Ok(SoundSystem::Alsa),
            "pulseaudio" | "pulse" => Ok(SoundSystem::PulseAudio),
            "soundcard" => Ok(SoundSystem::Soundcard),
            other => Err(Error::configuration(format!(
                "unknown sound system '{other}'"
            ))),
        }
    }
}

/// How a generator produces its output.
///
/// Built once and only read afterward; backends borrow it during `create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    sound_system: SoundSystem,
    sound_device: String,
}

impl GeneratorConfig {
    /// Create a configuration for an explicit sound system and device
    #[must_use]
    pub fn new(sound_system: SoundSystem, sound_device: impl Into<String>) -> Self {
        Self {
            sound_system,
            sound_device: sound_device.into(),
        }
    }

    /// The null sound system on its default device
    #[must_use]
    pub fn null() -> Self {
        Self::new(SoundSystem::Null, DEFAULT_NULL_DEVICE)
    }

    /// The null sound system on a named device
    #[must_use]
    pub fn null_on(sound_device: impl Into<String>) -> Self {
        Self::new(SoundSystem::Null, sound_device)
    }

    pub fn sound_system(&self) -> SoundSystem {
        self.sound_system
    }

    pub fn sound_device(&self) -> &str {
        &self.sound_device
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::null()
    }
}
