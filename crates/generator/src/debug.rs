//! Process-wide diagnostic settings for generators
//!
//! Settings are configured once, before the first generator is created.
//! Until then every check runs against [`DebugSettings::default`].

use cwkit_core::{Error, Result};
use once_cell::sync::OnceCell;
use std::ops::{BitOr, BitOrAssign};

static SETTINGS: OnceCell<DebugSettings> = OnceCell::new();

/// Bit mask selecting which areas of the generator emit diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DebugFlags(u32);

impl DebugFlags {
    pub const NONE: DebugFlags = DebugFlags(0);
    pub const GENERATOR: DebugFlags = DebugFlags(1 << 0);
    pub const TONE_QUEUE: DebugFlags = DebugFlags(1 << 1);
    pub const SOUND_SYSTEM: DebugFlags = DebugFlags(1 << 2);
    pub const CLIENT: DebugFlags = DebugFlags(1 << 3);
    pub const ALL: DebugFlags = DebugFlags((1 << 4) - 1);

    /// True when every bit of `other` is set in `self`
    pub fn contains(self, other: DebugFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for DebugFlags {
    type Output = DebugFlags;

    fn bitor(self, rhs: DebugFlags) -> DebugFlags {
        DebugFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for DebugFlags {
    fn bitor_assign(&mut self, rhs: DebugFlags) {
        self.0 |= rhs.0;
    }
}

/// Minimum severity a diagnostic needs to be emitted.
///
/// `None` silences a channel entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DebugLevel {
    Debug,
    Info,
    Warning,
    Error,
    None,
}

/// Which diagnostic stream a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugChannel {
    /// Generator lifecycle and client-facing calls
    Library,
    /// Internals of the queue and worker thread
    Dev,
}

/// Flags and threshold of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSettings {
    pub flags: DebugFlags,
    pub level: DebugLevel,
}

impl ChannelSettings {
    #[must_use]
    pub fn new(flags: DebugFlags, level: DebugLevel) -> Self {
        Self { flags, level }
    }

    fn allows(&self, flags: DebugFlags, level: DebugLevel) -> bool {
        level != DebugLevel::None && level >= self.level && self.flags.contains(flags)
    }
}

/// Diagnostic settings for both channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugSettings {
    pub library: ChannelSettings,
    pub dev: ChannelSettings,
}

impl DebugSettings {
    /// Settings with both channels silenced
    #[must_use]
    pub fn silent() -> Self {
        Self {
            library: ChannelSettings::new(DebugFlags::NONE, DebugLevel::None),
            dev: ChannelSettings::new(DebugFlags::NONE, DebugLevel::None),
        }
    }

    /// Whether a message on `channel` tagged with `flags` at `level` is emitted
    pub fn allows(&self, channel: DebugChannel, flags: DebugFlags, level: DebugLevel) -> bool {
        match channel {
            DebugChannel::Library => self.library.allows(flags, level),
            DebugChannel::Dev => self.dev.allows(flags, level),
        }
    }
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            library: ChannelSettings::new(DebugFlags::ALL, DebugLevel::Debug),
            dev: ChannelSettings::new(DebugFlags::ALL, DebugLevel::Info),
        }
    }
}

/// Install the process-wide settings. Only the first call succeeds.
pub fn configure(settings: DebugSettings) -> Result<()> {
    SETTINGS.set(settings).map_err(|_| {
        Error::configuration("generator debug settings are already configured")
    })?;
    tracing::debug!(?settings, "generator debug settings configured");
    Ok(())
}

/// The installed settings, or the defaults when none were configured
pub fn settings() -> DebugSettings {
    SETTINGS.get().copied().unwrap_or_default()
}

/// Shorthand for checking the installed settings
pub fn enabled(channel: DebugChannel, flags: DebugFlags, level: DebugLevel) -> bool {
    settings().allows(channel, flags, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_flags_compose() {
        let mut flags = DebugFlags::GENERATOR | DebugFlags::TONE_QUEUE;
        assert!(flags.contains(DebugFlags::GENERATOR));
        assert!(!flags.contains(DebugFlags::CLIENT));

        flags |= DebugFlags::CLIENT | DebugFlags::SOUND_SYSTEM;
        assert_eq!(flags, DebugFlags::ALL);
    }

    #[test]
    fn test_default_channels() {
        let settings = DebugSettings::default();
        assert!(settings.allows(DebugChannel::Library, DebugFlags::GENERATOR, DebugLevel::Debug));
        assert!(!settings.allows(DebugChannel::Dev, DebugFlags::TONE_QUEUE, DebugLevel::Debug));
        assert!(settings.allows(DebugChannel::Dev, DebugFlags::TONE_QUEUE, DebugLevel::Info));
    }

    #[test]
    fn test_none_level_silences_channel() {
        let settings = DebugSettings::silent();
        assert!(!settings.allows(DebugChannel::Library, DebugFlags::NONE, DebugLevel::Error));

        let open = ChannelSettings::new(DebugFlags::ALL, DebugLevel::Debug);
        assert!(!open.allows(DebugFlags::GENERATOR, DebugLevel::None));
    }

    #[test]
    #[serial]
    fn test_configure_only_once() {
        // No other unit test in this crate touches the cell.
        let first = configure(DebugSettings::default());
        let second = configure(DebugSettings::silent());

        assert!(first.is_ok());
        assert!(matches!(second, Err(Error::Configuration { .. })));
        assert_eq!(settings(), DebugSettings::default());
    }
}
