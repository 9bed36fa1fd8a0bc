//! Terminal side of the gate: obtain a candidate, print the stage trace.
//!
//! Everything here writes to generic readers/writers so the binary and the
//! tests share the same code paths.

use flaggate_core::{GateError, StageResult, Verdict};
use std::io::{BufRead, Write};

pub const BANNER: &str = "=== flaggate: multi-stage validator ===";
pub const PROMPT: &str = "Enter the flag: ";
pub const ACCEPTED: &str = "All stages passed! Flag accepted.";
pub const REJECTED: &str = "Validation failed.";

/// Where the candidate came from; the prompt is only shown for stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    Argument,
    Stdin,
}

/// Read one line and strip the line terminator (`\n` or `\r\n`).
///
/// The line is kept as raw bytes; the gate judges non-UTF-8 input like any
/// other candidate. End of input before any byte is read means there is no
/// candidate.
pub fn read_candidate_line<R: BufRead>(reader: &mut R) -> Result<Vec<u8>, GateError> {
    let mut line = Vec::new();
    let read = reader.read_until(b'\n', &mut line)?;
    if read == 0 {
        return Err(GateError::InputError("no candidate on standard input".to_string()));
    }
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Print the banner, plus the prompt when reading stdin
pub fn write_header<W: Write>(out: &mut W, source: CandidateSource) -> std::io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    if source == CandidateSource::Stdin {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    Ok(())
}

/// Print one indented stage line
pub fn write_stage_line<W: Write>(out: &mut W, result: &StageResult) -> std::io::Result<()> {
    writeln!(out, "  {}", result)
}

/// Print the final verdict line
pub fn write_summary<W: Write>(out: &mut W, verdict: &Verdict) -> std::io::Result<()> {
    writeln!(out)?;
    if verdict.is_accepted() {
        writeln!(out, "{}", ACCEPTED)
    } else {
        writeln!(out, "{}", REJECTED)
    }
}
