//! Weighted categorical sampling.
//!
//! Each (factor, group) weight table becomes a [`WeightedSampler`]: the
//! weights are validated, normalized by their sum, and folded into a
//! prefix-sum CDF. A draw picks a uniform value in `[0, 1)` and
//! binary-searches the CDF, so a zero-weight category occupies a
//! zero-width interval and can never be selected.
//!
//! Malformed tables (empty, negative or non-finite weights, all-zero sum)
//! fail at construction time, before any row is sampled.

use std::collections::BTreeMap;

use rand::Rng;

use crate::{
    catalog::{FactorSpec, WeightTable},
    stratify::SurvivalGroup,
};

/// Fatal problems in an authored weight table.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum SamplerError {
    #[display("factor '{factor}' group {group}: weight table is empty")]
    EmptyTable { factor: String, group: SurvivalGroup },
    #[display("factor '{factor}' group {group}: category '{category}' has invalid weight {weight}")]
    InvalidWeight {
        factor: String,
        group: SurvivalGroup,
        category: String,
        weight: f64,
    },
    #[display("factor '{factor}' group {group}: all weights are zero")]
    ZeroTotalWeight { factor: String, group: SurvivalGroup },
    #[display("factor '{factor}': no weight table for group {group}")]
    MissingGroup { factor: String, group: SurvivalGroup },
}

/// Normalized cumulative distribution over the categories of one table.
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    categories: Vec<String>,
    cdf: Vec<f64>,
}

impl WeightedSampler {
    /// Builds a sampler from one weight table.
    ///
    /// The table must be non-empty, every weight must be finite and
    /// non-negative, and the weights must not all be zero. Weights are
    /// normalized by their sum, so a table that does not sum to exactly 1
    /// (floating-point drift in the builtin tables, or a hand-edited
    /// catalog) still yields a proper distribution `weight / Σweights`.
    pub fn from_table(
        factor: &str,
        group: SurvivalGroup,
        table: &WeightTable,
    ) -> Result<Self, SamplerError> {
        if table.is_empty() {
            return Err(SamplerError::EmptyTable {
                factor: factor.to_owned(),
                group,
            });
        }
        for entry in table {
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(SamplerError::InvalidWeight {
                    factor: factor.to_owned(),
                    group,
                    category: entry.category.clone(),
                    weight: entry.weight,
                });
            }
        }
        let total: f64 = table.iter().map(|entry| entry.weight).sum();
        if total <= 0.0 {
            return Err(SamplerError::ZeroTotalWeight {
                factor: factor.to_owned(),
                group,
            });
        }

        let categories = table.iter().map(|entry| entry.category.clone()).collect();
        let mut cdf = Vec::with_capacity(table.len());
        let mut cumulative = 0.0;
        for entry in table {
            cumulative += entry.weight / total;
            cdf.push(cumulative);
        }
        // Rounding in the prefix sums must not leave the final bound below
        // the largest possible draw.
        if let Some(last) = cdf.last_mut() {
            *last = 1.0;
        }

        Ok(Self { categories, cdf })
    }

    /// Draws one category by inverse-CDF sampling.
    pub fn sample<R>(&self, rng: &mut R) -> &str
    where
        R: Rng + ?Sized,
    {
        let u: f64 = rng.random();
        let idx = self.cdf.partition_point(|&bound| bound <= u);
        let idx = idx.min(self.categories.len() - 1);
        &self.categories[idx]
    }

    /// The categories in CDF order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

/// Per-group samplers for one factor.
///
/// Construction fails fast if any group table is missing or malformed, so
/// a successfully built `FactorSampler` can serve every row.
#[derive(Debug, Clone)]
pub struct FactorSampler {
    name: String,
    per_group: BTreeMap<SurvivalGroup, WeightedSampler>,
}

impl FactorSampler {
    /// Builds samplers for all three groups of a factor specification.
    pub fn from_spec(spec: &FactorSpec) -> Result<Self, SamplerError> {
        let mut per_group = BTreeMap::new();
        for group in SurvivalGroup::ALL {
            let table = spec
                .groups
                .get(&group)
                .ok_or_else(|| SamplerError::MissingGroup {
                    factor: spec.name.clone(),
                    group,
                })?;
            per_group.insert(group, WeightedSampler::from_table(&spec.name, group, table)?);
        }
        Ok(Self {
            name: spec.name.clone(),
            per_group,
        })
    }

    /// Draws one category for a row of the given group.
    pub fn sample<R>(&self, group: SurvivalGroup, rng: &mut R) -> &str
    where
        R: Rng + ?Sized,
    {
        self.per_group
            .get(&group)
            .expect("samplers for all groups exist after construction")
            .sample(rng)
    }

    /// The column name the sampled values are written under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
