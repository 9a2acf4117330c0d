//! Passing a callback from one component to another and back
//!
//! Each function writes one line to `out` and returns the length of that
//! line, not counting the newline. Callbacks receive the writer explicitly so
//! that caller and callee never hold it at the same time.

use std::io::{self, Write};

/// Write a greeting that embeds `msg`.
pub fn greet<W: Write>(out: &mut W, msg: &str) -> io::Result<usize> {
    emit(out, format!("Hello world 1, printed in Rust, {msg}."))
}

/// The callback handed to [`call_with_greeting`] and [`peer_exchange`].
pub fn greet_back<W: Write>(out: &mut W, msg: &str) -> io::Result<usize> {
    emit(out, format!("Hello world 2 callback, printed in Rust, {msg}."))
}

/// Call `callback` with a locally created message, then report its result.
pub fn call_with_greeting<W, F>(out: &mut W, mut callback: F) -> io::Result<usize>
where
    W: Write,
    F: FnMut(&mut W, &str) -> io::Result<usize>,
{
    let ret = callback(out, "from Rust")?;
    emit(out, format!("Hello world 2, printed in Rust, ret = {ret}."))
}

/// The other side of the exchange.
///
/// Invokes `callback` with its own message, then passes its own callback to
/// [`call_with_greeting`]. Returns the length of the header line.
pub fn peer_exchange<W, F>(out: &mut W, mut callback: F) -> io::Result<usize>
where
    W: Write,
    F: FnMut(&mut W, &str) -> io::Result<usize>,
{
    let header = emit(out, "Hello world 2, printed by the peer.".to_string())?;

    let ret = callback(out, "from peer")?;
    writeln!(out, "peer callback: ret = {ret}.")?;

    let ret = call_with_greeting(out, |out: &mut W, msg: &str| {
        emit(out, format!("Hello world 2, printed by the peer, {msg}."))
    })?;
    writeln!(out, "call_with_greeting: ret = {ret}.")?;

    Ok(header)
}

/// Run both callback demos, writing everything to `out`.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n==> Demo 1.")?;
    let ret = greet(out, "from Rust")?;
    writeln!(out, "greet: ret = {ret}.")?;

    writeln!(out, "\n==> Demo 2.")?;
    let ret = peer_exchange(out, greet_back::<W>)?;
    writeln!(out, "peer_exchange: ret = {ret}.")?;

    Ok(())
}

fn emit<W: Write>(out: &mut W, line: String) -> io::Result<usize> {
    writeln!(out, "{line}")?;
    Ok(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(out)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_greet_returns_line_length() {
        let mut out = Vec::new();
        let msg = "called for testing";
        let format = "Hello world 1, printed in Rust, .";

        let ret = greet(&mut out, msg).unwrap();

        assert_eq!(ret, format.len() + msg.len());
        assert_eq!(
            lines(&out),
            vec!["Hello world 1, printed in Rust, called for testing."]
        );
    }

    #[test]
    fn test_call_with_greeting_invokes_callback_first() {
        let mut out = Vec::new();
        let mut seen = Vec::new();

        let ret = call_with_greeting(&mut out, |out: &mut Vec<u8>, msg: &str| {
            seen.push(msg.to_string());
            greet_back(out, msg)
        })
        .unwrap();

        assert_eq!(seen, vec!["from Rust"]);
        let lines = lines(&out);
        assert_eq!(lines[0], "Hello world 2 callback, printed in Rust, from Rust.");
        assert_eq!(lines[1].len(), ret);
        assert!(lines[1].ends_with(&format!("ret = {}.", lines[0].len())));
    }

    #[test]
    fn test_peer_exchange_calls_back_and_forth() {
        let mut out = Vec::new();
        let mut calls = 0;

        let ret = peer_exchange(&mut out, |out: &mut Vec<u8>, msg: &str| {
            calls += 1;
            greet_back(out, msg)
        })
        .unwrap();

        assert_eq!(calls, 1);
        let lines = lines(&out);
        assert_eq!(ret, lines[0].len());
        assert!(lines.contains(&"Hello world 2 callback, printed in Rust, from peer.".to_string()));
        assert!(lines.contains(&"Hello world 2, printed by the peer, from Rust.".to_string()));
    }

    #[test]
    fn test_callback_error_propagates() {
        let mut out = Vec::new();
        let err = call_with_greeting(&mut out, |_: &mut Vec<u8>, _: &str| {
            Err(io::Error::new(io::ErrorKind::Other, "callback refused"))
        })
        .unwrap_err();

        assert_eq!(err.to_string(), "callback refused");
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_prints_both_demos() {
        let mut out = Vec::new();
        run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("==> Demo 1."));
        assert!(text.contains("==> Demo 2."));
        assert!(text.contains("peer_exchange: ret = 35."));
    }
}
