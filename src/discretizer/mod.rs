//! Discretization engine: supervised interval optimizers, unsupervised binning and the
//! fit/apply driver.
//!
//! Every method produces an ordered list of [`Transition`]s, each mapping an
//! [`Origin`] (a numeric range or a categorical value) to one discretized value.

pub mod ameva;
pub mod error;
pub mod fitted;
pub mod format;
pub mod fusinter;
pub mod interval;
pub mod mdlp;
pub mod method;
pub mod optimizer;
pub mod origin;
pub mod partition;
pub mod samples;
pub mod transition;
pub mod unsupervised;
pub mod value;

pub use ameva::Ameva;
pub use error::{DiscretizeError, Result};
pub use fitted::Discretizer;
pub use format::round_to_two;
pub use fusinter::{FusInter, FusinterParams};
pub use interval::Interval;
pub use mdlp::Mdlp;
pub use method::{Method, MethodKind, MethodParams};
pub use optimizer::SupervisedOptimizer;
pub use origin::{CategoricalOrigin, NumericOrigin, Origin, OriginKind};
pub use partition::equal_class_split;
pub use samples::SortedSamples;
pub use transition::{transitions_from_cut_points, BinLabeling, Transition};
pub use unsupervised::{
    EqualSize, Manual, PercentileMedian, RandomBaseline, UniqueValue, UnsupervisedBinning,
};
pub use value::Value;
