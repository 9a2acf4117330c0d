use clap::Subcommand;
use cwkit_core::{GeneratorConfig, Result, ResultExt, Settings};
use cwkit_generator::NullBackend;
use std::io::Write;

use crate::demos;

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Pass closures back and forth between two components
    Callback,

    /// Run one generator lifecycle on the selected device
    Generator,

    /// Run every demo in order
    All,
}

impl Commands {
    /// Run the selected demos, writing their output to `out`
    pub fn execute<W: Write>(self, out: &mut W, settings: &Settings) -> Result<()> {
        match self {
            Commands::Callback => run_callback(out),
            Commands::Generator => run_generator(out, settings),
            Commands::All => {
                run_callback(out)?;
                run_generator(out, settings)
            }
        }
    }
}

fn run_callback<W: Write>(out: &mut W) -> Result<()> {
    let _span = cwkit_utils::tracing::demo_span("callback").entered();
    demos::callback::run(out).context("callback demo")
}

fn run_generator<W: Write>(out: &mut W, settings: &Settings) -> Result<()> {
    let _span = cwkit_utils::tracing::demo_span("generator").entered();
    let config = GeneratorConfig::new(settings.sound_system, settings.sound_device.as_str());
    demos::generator::run(out, &NullBackend::new(), &config, &settings.message)
}
