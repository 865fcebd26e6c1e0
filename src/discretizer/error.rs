//! Error types for fitting and applying discretizers.
//!
//! Every variant is raised eagerly: input validation happens before any
//! optimization work starts, so a failed fit never leaves partial state behind.

/// Errors that can occur while fitting or applying a discretizer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiscretizeError {
    /// No values were passed to `fit`.
    #[error("no values for fitting procedure passed")]
    EmptyInput,

    /// A supervised method was fitted without labels.
    #[error("labels need to be specified for supervised discretizer '{method}'")]
    MissingLabels { method: String },

    /// Labels and values differ in length.
    #[error("labels need to be of same length as column values ({values} values, {labels} labels)")]
    LabelLengthMismatch { values: usize, labels: usize },

    /// `fit` was called on an already fitted discretizer.
    #[error("discretizer has already been fitted")]
    AlreadyFitted,

    /// `apply` or a lookup was called before `fit`.
    #[error("discretizer has not been fitted yet")]
    NotFitted,

    /// A non-numeric value was passed to a numeric-only method.
    #[error("non-numeric value '{value}' can only be discretized with the unique-value method (method: {method})")]
    NonNumericValue { method: String, value: String },

    /// A numeric value is NaN.
    #[error("NaN value at position {index} cannot be discretized")]
    NotANumber { index: usize },

    /// A label is NaN.
    #[error("label at position {index} is NaN")]
    InvalidLabel { index: usize },

    /// A sequence expected to be sorted ascending by value is not.
    #[error("samples must be sorted ascending by value (violated at position {index})")]
    Unsorted { index: usize },

    /// Two transitions map to the same discretized value.
    #[error("discretization targets are ambiguous: discretized value {value} is produced more than once")]
    AmbiguousTransitions { value: f64 },

    /// No transition accepts the value passed to `apply`.
    #[error("could not find transition for {value}")]
    NoTransitionFor { value: String },

    /// No transition produces the requested discretized value.
    #[error("could not find transition for discretized value {value}")]
    UnknownDiscretizedValue { value: f64 },

    /// A method parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias for discretizer operations.
pub type Result<T> = std::result::Result<T, DiscretizeError>;
