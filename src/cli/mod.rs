use anyhow::Result;

pub mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{CatalogReport, RunSummary};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;

    let summary = run::run(&args)?;
    report::print(&summary, verbose);

    Ok(ExitStatus::Success)
}
