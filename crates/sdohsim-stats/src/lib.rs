//! Numeric statistics utilities for the sdohsim project.
//!
//! This crate currently provides quantile computation with linear
//! interpolation between order statistics, which is the semantics used to
//! derive the survival-group cutoffs.
//!
//! # Examples
//!
//! ```
//! use sdohsim_stats::quantile::quantile;
//!
//! let durations = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! assert_eq!(quantile(&durations, 0.25), 3.25);
//! assert_eq!(quantile(&durations, 0.75), 7.75);
//! ```

pub mod quantile;
