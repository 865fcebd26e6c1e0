//! Report module - summarizing and exporting discretization results

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
