//! The builtin factor tables.
//!
//! Weights are authored per survival group: group `A` (top survival
//! quartile) skews toward favorable categories, group `C` toward adverse
//! ones, and group `B` sits in between. Values are kept exactly as
//! authored; normalization happens in the sampler.

use std::collections::BTreeMap;

use crate::{
    catalog::{CategoryWeight, FactorCatalog, FactorSpec},
    stratify::SurvivalGroup,
};

type Entries<'a> = &'a [(&'a str, f64)];

fn table(entries: Entries<'_>) -> Vec<CategoryWeight> {
    entries
        .iter()
        .map(|&(category, weight)| CategoryWeight {
            category: category.to_owned(),
            weight,
        })
        .collect()
}

fn factor(name: &str, a: Entries<'_>, b: Entries<'_>, c: Entries<'_>) -> FactorSpec {
    FactorSpec {
        name: name.to_owned(),
        groups: BTreeMap::from([
            (SurvivalGroup::A, table(a)),
            (SurvivalGroup::B, table(b)),
            (SurvivalGroup::C, table(c)),
        ]),
    }
}

#[rustfmt::skip]
pub(crate) fn catalog() -> FactorCatalog {
    let factors = vec![
        factor(
            "alcohol_use",
            &[("Never", 0.5), ("Rarely", 0.3), ("Occasionally", 0.1), ("Frequently", 0.1), ("Heavy", 0.0)],
            &[("Never", 0.2), ("Rarely", 0.2), ("Occasionally", 0.2), ("Frequently", 0.2), ("Heavy", 0.2)],
            &[("Never", 0.0), ("Rarely", 0.1), ("Occasionally", 0.1), ("Frequently", 0.3), ("Heavy", 0.5)],
        ),
        factor(
            "marital_status",
            &[("Married", 0.5), ("Single", 0.1), ("Divorced", 0.1), ("Widowed", 0.1), ("Separated", 0.1), ("Other", 0.1)],
            &[("Married", 0.2), ("Single", 0.2), ("Divorced", 0.2), ("Widowed", 0.2), ("Separated", 0.1), ("Other", 0.1)],
            &[("Married", 0.1), ("Single", 0.1), ("Divorced", 0.5), ("Widowed", 0.1), ("Separated", 0.1), ("Other", 0.1)],
        ),
        factor(
            "financial_strain",
            &[("No_financial_issues", 0.5), ("Mild_strain", 0.3), ("Moderate_strain", 0.1), ("Severe_strain", 0.1), ("Unable_to_afford_care", 0.0)],
            &[("No_financial_issues", 0.2), ("Mild_strain", 0.2), ("Moderate_strain", 0.2), ("Severe_strain", 0.2), ("Unable_to_afford_care", 0.2)],
            &[("No_financial_issues", 0.0), ("Mild_strain", 0.1), ("Moderate_strain", 0.1), ("Severe_strain", 0.3), ("Unable_to_afford_care", 0.5)],
        ),
        factor(
            "social_support",
            &[("Strong", 0.5), ("Moderate", 0.3), ("Limited", 0.2), ("No_support", 0.0)],
            &[("Strong", 0.25), ("Moderate", 0.25), ("Limited", 0.25), ("No_support", 0.25)],
            &[("Strong", 0.0), ("Moderate", 0.2), ("Limited", 0.3), ("No_support", 0.5)],
        ),
        factor(
            "social_isolation",
            &[("Never", 0.5), ("Rarely", 0.3), ("Sometimes", 0.2), ("Often", 0.0), ("Always", 0.0)],
            &[("Never", 0.2), ("Rarely", 0.2), ("Sometimes", 0.2), ("Often", 0.2), ("Always", 0.2)],
            &[("Never", 0.0), ("Rarely", 0.0), ("Sometimes", 0.2), ("Often", 0.3), ("Always", 0.5)],
        ),
        factor(
            "food_insecurity",
            &[("No_issues", 0.7), ("Sometimes_insufficient", 0.3), ("Often_insufficient", 0.0)],
            &[("No_issues", 0.3), ("Sometimes_insufficient", 0.4), ("Often_insufficient", 0.3)],
            &[("No_issues", 0.0), ("Sometimes_insufficient", 0.3), ("Often_insufficient", 0.7)],
        ),
        factor(
            "race_ethnicity",
            &[("Non_Hispanic_White", 0.5), ("Hispanic_Latino", 0.1), ("Black_African_American", 0.1), ("Asian", 0.1), ("Native_American", 0.1), ("Pacific_Islander", 0.1), ("Other", 0.0)],
            &[("Non_Hispanic_White", 0.2), ("Hispanic_Latino", 0.2), ("Black_African_American", 0.2), ("Asian", 0.2), ("Native_American", 0.2), ("Pacific_Islander", 0.0), ("Other", 0.0)],
            &[("Non_Hispanic_White", 0.2), ("Hispanic_Latino", 0.2), ("Black_African_American", 0.2), ("Asian", 0.2), ("Native_American", 0.2), ("Pacific_Islander", 0.0), ("Other", 0.0)],
        ),
        factor(
            "gender",
            &[("Male", 0.2), ("Female", 0.7), ("Non_binary", 0.05), ("Prefer_not_to_say", 0.05)],
            &[("Male", 0.5), ("Female", 0.4), ("Non_binary", 0.05), ("Prefer_not_to_say", 0.05)],
            &[("Male", 0.7), ("Female", 0.2), ("Non_binary", 0.05), ("Prefer_not_to_say", 0.05)],
        ),
        factor(
            "screening_adherence",
            &[("Completed_on_time", 0.7), ("Delayed", 0.2), ("Never_completed", 0.1)],
            &[("Completed_on_time", 0.5), ("Delayed", 0.25), ("Never_completed", 0.25)],
            &[("Completed_on_time", 0.2), ("Delayed", 0.3), ("Never_completed", 0.5)],
        ),
        factor(
            "employment_status",
            &[("Employed_full_time", 0.6), ("Employed_part_time", 0.2), ("Unemployed", 0.1), ("Retired", 0.1), ("Disabled", 0.0), ("Student", 0.0)],
            &[("Employed_full_time", 0.4), ("Employed_part_time", 0.2), ("Unemployed", 0.2), ("Retired", 0.1), ("Disabled", 0.05), ("Student", 0.05)],
            &[("Employed_full_time", 0.2), ("Employed_part_time", 0.2), ("Unemployed", 0.4), ("Retired", 0.1), ("Disabled", 0.05), ("Student", 0.05)],
        ),
        factor(
            "healthcare_access",
            &[("Easy_access", 0.7), ("Moderate_difficulty", 0.2), ("Significant_difficulty", 0.1), ("No_access", 0.0)],
            &[("Easy_access", 0.4), ("Moderate_difficulty", 0.2), ("Significant_difficulty", 0.2), ("No_access", 0.2)],
            &[("Easy_access", 0.2), ("Moderate_difficulty", 0.2), ("Significant_difficulty", 0.2), ("No_access", 0.4)],
        ),
        factor(
            "pain_burden",
            &[("No", 0.6), ("Mild", 0.3), ("Moderate", 0.1), ("Severe", 0.0)],
            &[("No", 0.3), ("Mild", 0.3), ("Moderate", 0.3), ("Severe", 0.1)],
            &[("No", 0.1), ("Mild", 0.1), ("Moderate", 0.3), ("Severe", 0.5)],
        ),
        factor(
            "health_literacy",
            &[("High", 0.7), ("Moderate", 0.3), ("Low", 0.0)],
            &[("High", 0.4), ("Moderate", 0.3), ("Low", 0.3)],
            &[("High", 0.1), ("Moderate", 0.3), ("Low", 0.6)],
        ),
    ];

    FactorCatalog { factors }
}
