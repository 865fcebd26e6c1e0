//! Pipeline module - loading data and discretizing its columns

pub mod column;
pub mod discretize;
pub mod loader;

pub use column::*;
pub use discretize::*;
pub use loader::*;
