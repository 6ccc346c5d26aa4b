//! Factor weight tables.
//!
//! A catalog maps each social factor to one weight table per survival
//! group. Tables are ordered: the category order fixes the layout of the
//! sampling CDF, so a catalog plus a seed fully determines the output.
//!
//! The catalog is a plain serde structure. The builtin set (see
//! [`FactorCatalog::builtin`]) can be exported as JSON, edited by hand,
//! and loaded back, which is how synthetic studies swap in their own
//! distributions without recompiling.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stratify::SurvivalGroup;

mod builtin;

/// One category and its authored weight.
///
/// Weights are relative: the sampler normalizes each table by its weight
/// sum, so a table does not have to sum to exactly 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeight {
    pub category: String,
    pub weight: f64,
}

/// Ordered weight table for one (factor, group) pair.
pub type WeightTable = Vec<CategoryWeight>;

/// Weight tables for one social factor, keyed by survival group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorSpec {
    /// Column name the sampled values are written under.
    pub name: String,
    /// One weight table per survival group.
    pub groups: BTreeMap<SurvivalGroup, WeightTable>,
}

/// Ordered collection of factor specifications.
///
/// Factors are enriched in catalog order, which together with the row
/// order determines how the shared random stream is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorCatalog {
    pub factors: Vec<FactorSpec>,
}

impl FactorCatalog {
    /// Returns the builtin thirteen-factor catalog.
    ///
    /// The weights are carried verbatim from the original authored tables.
    /// They are not guaranteed to sum to exactly 1; the sampler normalizes
    /// at draw time.
    #[must_use]
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Iterates over the factor column names in catalog order.
    pub fn factor_names(&self) -> impl Iterator<Item = &str> {
        self.factors.iter().map(|spec| spec.name.as_str())
    }
}
