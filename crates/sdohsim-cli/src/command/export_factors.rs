use std::path::PathBuf;

use sdohsim_factors::catalog::FactorCatalog;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ExportFactorsArg {
    /// Output JSON path (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Dumps the builtin catalog so it can be edited and passed back to
/// `enrich --factors`.
pub(crate) fn run(arg: &ExportFactorsArg) -> anyhow::Result<()> {
    Output::save_json(&FactorCatalog::builtin(), arg.output.clone())
}
