use clap::{Parser, ValueEnum};
use cwkit::Commands;
use cwkit_core::{Error, Settings, SoundSystem};
use cwkit_generator::debug::{self, ChannelSettings, DebugFlags, DebugLevel, DebugSettings};
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "cwkit")]
#[command(about = "Morse generator lifecycle and callback demos", long_about = None)]
#[command(version)]
struct Cli {
    /// Message to send through the generator (default: $CWKIT_MESSAGE or "paris")
    #[arg(short, long)]
    message: Option<String>,

    /// Null sound device name (default: $CWKIT_SOUND_DEVICE or "null")
    #[arg(long)]
    sound_device: Option<String>,

    /// Sound system to request (null, console, oss, alsa, pulseaudio, soundcard)
    #[arg(long, default_value_t = SoundSystem::Null)]
    sound_system: SoundSystem,

    /// Lowest severity the generator library reports
    #[arg(long, value_enum, default_value_t = GeneratorLog::Debug)]
    generator_log: GeneratorLog,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GeneratorLog {
    Debug,
    Info,
    Warning,
    Error,
    None,
}

impl From<GeneratorLog> for DebugLevel {
    fn from(level: GeneratorLog) -> Self {
        match level {
            GeneratorLog::Debug => DebugLevel::Debug,
            GeneratorLog::Info => DebugLevel::Info,
            GeneratorLog::Warning => DebugLevel::Warning,
            GeneratorLog::Error => DebugLevel::Error,
            GeneratorLog::None => DebugLevel::None,
        }
    }
}

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    cwkit_utils::init_tracing()
        .map_err(|e| eyre::eyre!("failed to initialize tracing: {e}"))?;

    let mut settings = Settings::from_env();
    if let Some(message) = cli.message {
        settings.message = message;
    }
    if let Some(sound_device) = cli.sound_device {
        settings.sound_device = sound_device;
    }
    settings.sound_system = cli.sound_system;

    // Must happen before the first generator is created.
    debug::configure(DebugSettings {
        library: ChannelSettings::new(DebugFlags::ALL, cli.generator_log.into()),
        ..DebugSettings::default()
    })?;

    let command = cli.command.unwrap_or(Commands::All);
    tracing::debug!(?command, device = %settings.sound_device, "running demos");
    let mut out = io::stdout().lock();

    match command.execute(&mut out, &settings) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e @ Error::Generator { .. }) => {
            eprintln!("cwkit: {e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
