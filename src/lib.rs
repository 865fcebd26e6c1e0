//! Discretizers: supervised and unsupervised discretization
//!
//! The [`discretizer`] module holds the domain model (origins, transitions,
//! fitted discretizers) together with the Ameva, MDLP and FUSINTER optimizers
//! and the unsupervised baselines. The remaining modules make up the
//! `discretize` command-line tool that applies them to CSV and Parquet files.

pub mod cli;
pub mod discretizer;
pub mod pipeline;
pub mod report;
pub mod utils;
