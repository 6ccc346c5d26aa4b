use std::path::PathBuf;

use anyhow::Context as _;
use rand::Rng as _;
use sdohsim_factors::{
    catalog::FactorCatalog,
    sampler::FactorSampler,
    seed::SampleSeed,
    stratify::{GroupThresholds, SurvivalGroup},
};
use sdohsim_table::DataTable;

use crate::{
    schema::manifest::RunManifest,
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EnrichArg {
    /// Path to the input TSV table
    pub input: PathBuf,
    /// Output TSV path (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Column holding the survival duration in months
    #[arg(long, default_value = "OS_MONTHS")]
    pub duration_column: String,
    /// JSON factor catalog (builtin thirteen-factor catalog when omitted)
    #[arg(long)]
    pub factors: Option<PathBuf>,
    /// 32-hex-character sampling seed (random when omitted)
    #[arg(long)]
    pub seed: Option<SampleSeed>,
    /// Write a JSON run manifest to this path
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

pub(crate) fn run(arg: &EnrichArg) -> anyhow::Result<()> {
    let catalog = match &arg.factors {
        Some(path) => util::read_json_file("factor catalog", path)?,
        None => FactorCatalog::builtin(),
    };

    let mut table = DataTable::from_path(&arg.input)
        .with_context(|| format!("failed to read input table {}", arg.input.display()))?;
    eprintln!("Read {} rows from {}", table.num_rows(), arg.input.display());

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Sampling seed: {seed}");

    let thresholds = enrich_table(&mut table, &catalog, &arg.duration_column, seed)?;
    eprintln!(
        "Group cutoffs: A at or above {}, C at or below {}",
        thresholds.high_cut, thresholds.low_cut
    );
    eprintln!("Sampled {} factor columns", catalog.factors.len());

    let mut output = Output::from_output_path(arg.output.clone())?;
    table
        .to_writer(&mut output)
        .with_context(|| format!("failed to write table to {}", output.display_path()))?;
    eprintln!("Wrote enriched table to {}", output.display_path());

    if let Some(path) = &arg.manifest {
        let manifest = RunManifest {
            enriched_at: chrono::Utc::now(),
            seed,
            duration_column: arg.duration_column.clone(),
            thresholds,
            num_rows: table.num_rows(),
            factors: catalog.factor_names().map(str::to_owned).collect(),
        };
        Output::save_json(&manifest, Some(path.clone()))?;
        eprintln!("Wrote run manifest to {}", path.display());
    }

    Ok(())
}

/// Stratifies the table and appends the `Group` column plus one sampled
/// column per factor.
///
/// Rows whose duration cell fails numeric coercion have no defined group:
/// they receive empty cells in every appended column and consume nothing
/// from the sampling stream. Draws run column by column in catalog order,
/// row by row in table order, off a single stream seeded with `seed`.
fn enrich_table(
    table: &mut DataTable,
    catalog: &FactorCatalog,
    duration_column: &str,
    seed: SampleSeed,
) -> anyhow::Result<GroupThresholds> {
    let samplers = catalog
        .factors
        .iter()
        .map(FactorSampler::from_spec)
        .collect::<Result<Vec<_>, _>>()
        .context("malformed factor catalog")?;

    let durations = table
        .numeric_column(duration_column)
        .context("duration column missing from input table")?;
    let thresholds = GroupThresholds::from_durations(&durations).with_context(|| {
        format!("duration column '{duration_column}' contains no numeric values")
    })?;

    let groups: Vec<Option<SurvivalGroup>> = durations
        .iter()
        .map(|&duration| thresholds.classify(duration))
        .collect();
    let labels = groups
        .iter()
        .map(|group| group.map_or_else(String::new, |g| g.to_string()))
        .collect();
    table.push_column("Group", labels)?;

    let mut rng = seed.rng();
    for sampler in &samplers {
        let values = groups
            .iter()
            .map(|group| {
                group.map_or_else(String::new, |g| sampler.sample(g, &mut rng).to_owned())
            })
            .collect();
        table.push_column(sampler.name(), values)?;
    }

    Ok(thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
patient\tOS_MONTHS
p01\t1
p02\t2
p03\t3
p04\t4
p05\t5
p06\t6
p07\t7
p08\t8
p09\t9
p10\t10
p11\tnot_reported
";

    fn sample_table() -> DataTable {
        DataTable::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    fn fixed_seed() -> SampleSeed {
        SampleSeed::from_bytes([0xA5; 16])
    }

    #[test]
    fn test_appends_group_and_factor_columns() {
        let mut table = sample_table();
        let catalog = FactorCatalog::builtin();
        let thresholds =
            enrich_table(&mut table, &catalog, "OS_MONTHS", fixed_seed()).unwrap();

        assert_eq!(thresholds.high_cut, 7.75);
        assert_eq!(thresholds.low_cut, 3.25);

        // patient, OS_MONTHS, Group, thirteen factors.
        assert_eq!(table.headers().len(), 2 + 1 + 13);
        assert_eq!(table.headers()[2], "Group");
        assert_eq!(table.headers()[3], "alcohol_use");
    }

    #[test]
    fn test_group_assignments() {
        let mut table = sample_table();
        let catalog = FactorCatalog::builtin();
        enrich_table(&mut table, &catalog, "OS_MONTHS", fixed_seed()).unwrap();

        let group_idx = table.column_index("Group").unwrap();
        let groups: Vec<&str> = table.rows().iter().map(|r| r[group_idx].as_str()).collect();
        assert_eq!(
            groups,
            ["C", "C", "C", "B", "B", "B", "B", "A", "A", "A", ""]
        );
    }

    #[test]
    fn test_undefined_group_rows_get_empty_cells() {
        let mut table = sample_table();
        let catalog = FactorCatalog::builtin();
        enrich_table(&mut table, &catalog, "OS_MONTHS", fixed_seed()).unwrap();

        let last_row = table.rows().last().unwrap();
        for cell in &last_row[2..] {
            assert!(cell.is_empty());
        }
    }

    #[test]
    fn test_stratified_rows_get_sampled_values() {
        let mut table = sample_table();
        let catalog = FactorCatalog::builtin();
        enrich_table(&mut table, &catalog, "OS_MONTHS", fixed_seed()).unwrap();

        for row in &table.rows()[..10] {
            for cell in &row[2..] {
                assert!(!cell.is_empty());
            }
        }
    }

    #[test]
    fn test_original_columns_untouched() {
        let original = sample_table();
        let mut table = sample_table();
        let catalog = FactorCatalog::builtin();
        enrich_table(&mut table, &catalog, "OS_MONTHS", fixed_seed()).unwrap();

        assert_eq!(table.num_rows(), original.num_rows());
        for (row, original_row) in table.rows().iter().zip(original.rows()) {
            assert_eq!(row[..2], original_row[..]);
        }
    }

    #[test]
    fn test_same_seed_reproduces_output() {
        let catalog = FactorCatalog::builtin();
        let mut first = sample_table();
        let mut second = sample_table();
        enrich_table(&mut first, &catalog, "OS_MONTHS", fixed_seed()).unwrap();
        enrich_table(&mut second, &catalog, "OS_MONTHS", fixed_seed()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_duration_column_fails() {
        let mut table = sample_table();
        let catalog = FactorCatalog::builtin();
        let err = enrich_table(&mut table, &catalog, "DFS_MONTHS", fixed_seed()).unwrap_err();
        assert!(err.to_string().contains("duration column"));
    }

    #[test]
    fn test_all_non_numeric_durations_fail() {
        let tsv = "patient\tOS_MONTHS\np1\tx\np2\ty\n";
        let mut table = DataTable::from_reader(tsv.as_bytes()).unwrap();
        let catalog = FactorCatalog::builtin();
        let err = enrich_table(&mut table, &catalog, "OS_MONTHS", fixed_seed()).unwrap_err();
        assert!(err.to_string().contains("no numeric values"));
    }
}
