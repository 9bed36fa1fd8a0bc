//! # flaggate CLI
//!
//! Reads one candidate (argument or stdin line), runs it through the gate
//! and prints the per-stage trace or a JSON report.

pub mod shell;

use clap::Parser;
use flaggate_core::{Candidate, GateError, ValidationReport, Verdict};
use flaggate_stages::{engine_for, GateProfile};
use shell::CandidateSource;
use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable consulted when `--profile` is not given
pub const PROFILE_ENV: &str = "FLAGGATE_PROFILE";

/// Multi-stage flag validator.
///
/// Runs the candidate through length, format, hash and arithmetic checks,
/// stopping at the first one that fails. Exits 0 when accepted, 1 when
/// rejected and 2 when no candidate or profile could be loaded.
#[derive(Parser, Debug, Clone)]
#[command(name = "flaggate", version, about)]
pub struct Cli {
    /// Candidate flag. Read as one line from stdin when omitted.
    pub candidate: Option<OsString>,

    /// YAML gate profile. Falls back to $FLAGGATE_PROFILE, then the
    /// built-in reagent profile.
    #[arg(long, value_name = "PATH")]
    pub profile: Option<PathBuf>,

    /// Print a JSON validation report instead of the stage trace.
    #[arg(long)]
    pub json: bool,
}

/// Load the profile at `path`, or the built-in reagent profile
pub fn load_profile(path: Option<&Path>) -> Result<GateProfile, GateError> {
    match path {
        Some(path) => GateProfile::from_file(path),
        None => Ok(GateProfile::reagent()),
    }
}

/// Run one validation end to end, writing user-facing output to `out`.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    profile: &GateProfile,
    input: &mut R,
    out: &mut W,
) -> Result<Verdict, GateError> {
    let engine = engine_for(profile)?;
    info!(profile = %profile.name, pipeline = engine.pipeline_id(), "gate ready");

    if cli.json {
        let raw = obtain_candidate(cli, input)?;
        let candidate = Candidate::from_bytes(&raw);
        let verdict = engine.validate(candidate);
        let report =
            ValidationReport::new(&candidate, &profile.name, engine.pipeline_id(), verdict.clone());
        writeln!(out, "{}", report.to_json()?)?;
        return Ok(verdict);
    }

    let source = source_of(cli);
    shell::write_header(out, source)?;
    let raw = obtain_candidate(cli, input)?;
    writeln!(out, "Running validation...")?;

    let mut write_err = None;
    let verdict = engine.run_with(Candidate::from_bytes(&raw), |result| {
        if write_err.is_none() {
            if let Err(e) = shell::write_stage_line(out, result) {
                write_err = Some(e);
            }
        }
    });
    if let Some(e) = write_err {
        return Err(e.into());
    }

    shell::write_summary(out, &verdict)?;
    info!(decision = %verdict.decision, stages = verdict.stages_evaluated(), "validation finished");
    Ok(verdict)
}

fn source_of(cli: &Cli) -> CandidateSource {
    if cli.candidate.is_some() {
        CandidateSource::Argument
    } else {
        CandidateSource::Stdin
    }
}

fn obtain_candidate<R: BufRead>(cli: &Cli, input: &mut R) -> Result<Vec<u8>, GateError> {
    match &cli.candidate {
        Some(candidate) => Ok(candidate.as_encoded_bytes().to_vec()),
        None => shell::read_candidate_line(input),
    }
}
