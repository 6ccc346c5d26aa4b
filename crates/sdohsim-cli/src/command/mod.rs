use clap::{Parser, Subcommand};

use self::{enrich::EnrichArg, export_factors::ExportFactorsArg};

mod enrich;
mod export_factors;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Enrich a clinical TSV table with synthetic social factors
    Enrich(#[clap(flatten)] EnrichArg),
    /// Export the builtin factor catalog as editable JSON
    ExportFactors(#[clap(flatten)] ExportFactorsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Enrich(arg) => enrich::run(&arg)?,
        Mode::ExportFactors(arg) => export_factors::run(&arg)?,
    }
    Ok(())
}
