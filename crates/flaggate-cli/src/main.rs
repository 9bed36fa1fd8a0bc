//! # flaggate entry point

use anyhow::Context;
use clap::Parser;
use flaggate_cli::{load_profile, run, Cli, PROFILE_ENV};
use flaggate_core::Verdict;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the stage trace.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match execute(&cli) {
        Ok(verdict) if verdict.is_accepted() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(err) => {
            eprintln!("flaggate: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<Verdict> {
    let profile_path = cli
        .profile
        .clone()
        .or_else(|| std::env::var_os(PROFILE_ENV).map(PathBuf::from));

    let profile = load_profile(profile_path.as_deref()).context("loading gate profile")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let verdict = run(cli, &profile, &mut stdin.lock(), &mut stdout.lock())
        .context("running validation")?;
    Ok(verdict)
}
