//! One generator lifecycle on a configured device

use cwkit_core::{Error, GeneratorConfig, Result, ResultExt};
use cwkit_generator::{run_with, Backend};
use std::io::Write;

/// Send `message` through a generator from `backend`, reporting progress on `out`.
///
/// A lifecycle failure comes back as [`Error::Generator`] naming the stage
/// that failed first.
pub fn run<W, B>(out: &mut W, backend: &B, config: &GeneratorConfig, message: &str) -> Result<()>
where
    W: Write,
    B: Backend,
{
    writeln!(out, "\n==> Demo 3.").context("writing demo banner")?;
    writeln!(
        out,
        "generator demo: starting, sound system = {}, device = {}.",
        config.sound_system(),
        config.sound_device()
    )
    .context("writing demo banner")?;

    let result = run_with(backend, config, message);

    let written = match &result {
        Ok(()) => writeln!(out, "generator demo: sent {message:?}."),
        Err(failure) => writeln!(out, "generator demo: failed at {}.", failure.stage()),
    };
    written.with_context(|| format!("writing result for {}", config.sound_device()))?;

    result.map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cwkit_core::Stage;
    use cwkit_generator::testing::ScriptedBackend;
    use cwkit_generator::NullBackend;

    #[test]
    fn test_null_device_run_reports_message() {
        let mut out = Vec::new();
        run(&mut out, &NullBackend::new(), &GeneratorConfig::null(), "paris").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("device = null"));
        assert!(text.contains("sent \"paris\""));
    }

    #[test]
    fn test_failure_names_first_failing_stage() {
        let mut out = Vec::new();
        let backend = ScriptedBackend::failing([Stage::Enqueue, Stage::Stop]);

        let err = run(&mut out, &backend, &GeneratorConfig::null(), "paris").unwrap_err();

        assert_eq!(err.stage(), Some(Stage::Enqueue));
        assert!(String::from_utf8(out).unwrap().contains("failed at enqueue"));
        assert_eq!(backend.count(Stage::Destroy), 1);
    }
}
