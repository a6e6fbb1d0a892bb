use clap::Parser;
use color_eyre::Result;

use textfilestatz::cli::Cli;
use textfilestatz::config::load_config;
use textfilestatz::report::write_report;
use textfilestatz::{Session, analyze};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let plan = cli.plan(&config);

    let mut session = Session::with_validation(plan.validation);
    session.initialize()?;
    if let Some(dir) = &plan.reference_dir {
        session.define(dir)?;
    }

    let result = analyze(&session, &plan.request);
    session.finalize();

    let report = result?;
    write_report(&report, plan.format, &plan.destination)?;
    Ok(())
}

/// Logs go to stderr; RUST_LOG overrides the verbosity flag
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
