//! Survival-group stratification and synthetic social-factor sampling.
//!
//! This crate holds the domain logic of the sdohsim project:
//!
//! - **Stratification**: bucketing patients into survival-outcome groups
//!   `A`/`B`/`C` from the quartiles of their survival durations
//! - **Factor catalog**: hand-authored per-group probability tables for
//!   each synthetic social factor, loadable and exportable as JSON
//! - **Weighted sampling**: validated, normalized cumulative-distribution
//!   draws of one category per (row, factor)
//! - **Reproducibility**: a 128-bit sampling seed driving a single PCG
//!   stream, so a run can be replayed exactly
//!
//! # Modules
//!
//! - [`stratify`]: survival groups and quantile thresholds
//! - [`catalog`]: factor weight tables, including the builtin set
//! - [`sampler`]: weighted categorical sampling
//! - [`seed`]: deterministic sampling seeds
//!
//! # Examples
//!
//! ## Stratifying durations
//!
//! ```
//! use sdohsim_factors::stratify::{GroupThresholds, SurvivalGroup};
//!
//! let durations: Vec<f64> = (1..=10).map(f64::from).collect();
//! let thresholds = GroupThresholds::from_durations(&durations).unwrap();
//!
//! assert_eq!(thresholds.classify(8.0), Some(SurvivalGroup::A));
//! assert_eq!(thresholds.classify(5.0), Some(SurvivalGroup::B));
//! assert_eq!(thresholds.classify(3.0), Some(SurvivalGroup::C));
//! ```
//!
//! ## Sampling a factor
//!
//! ```
//! use sdohsim_factors::{
//!     catalog::FactorCatalog, sampler::FactorSampler, seed::SampleSeed,
//!     stratify::SurvivalGroup,
//! };
//! use rand::Rng as _;
//!
//! let catalog = FactorCatalog::builtin();
//! let sampler = FactorSampler::from_spec(&catalog.factors[0]).unwrap();
//!
//! let seed: SampleSeed = rand::rng().random();
//! let mut rng = seed.rng();
//! let value = sampler.sample(SurvivalGroup::B, &mut rng);
//! assert!(!value.is_empty());
//! ```

pub mod catalog;
pub mod sampler;
pub mod seed;
pub mod stratify;
