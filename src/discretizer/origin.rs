//! The left-hand side of a transition: which raw values a bin accepts.

use std::fmt;

use serde::Serialize;

use super::format::round_to_two;
use super::value::Value;

/// Kind of values an origin describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OriginKind {
    Numeric,
    Categorical,
}

/// A numeric range `[min, max]`, optionally open towards -inf / +inf.
///
/// The open flags are only ever set by the fitting driver once every origin of a
/// discretizer is known, since they depend on the global minimum and maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericOrigin {
    min: f64,
    max: f64,
    is_first: bool,
    is_last: bool,
}

impl NumericOrigin {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            is_first: false,
            is_last: false,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// True if the lower boundary is open towards -inf.
    pub fn is_first(&self) -> bool {
        self.is_first
    }

    /// True if the upper boundary is open towards +inf.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    pub(crate) fn set_first(&mut self, first: bool) {
        self.is_first = first;
    }

    pub(crate) fn set_last(&mut self, last: bool) {
        self.is_last = last;
    }

    pub fn contains(&self, value: f64) -> bool {
        let matches_lower = self.is_first || value >= self.min;
        let matches_upper = self.is_last || value <= self.max;
        matches_lower && matches_upper
    }

    fn range_notation(&self) -> String {
        format!(
            "{}{}, {}{}",
            if self.is_first { "]" } else { "[" },
            round_to_two(self.min),
            round_to_two(self.max),
            if self.is_last { "[" } else { ")" }
        )
    }
}

/// A single categorical value matched by equality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalOrigin {
    value: Value,
}

impl CategoricalOrigin {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn contains(&self, value: &Value) -> bool {
        &self.value == value
    }
}

/// Pre-discretization description of a bin.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Origin {
    Numeric(NumericOrigin),
    Categorical(CategoricalOrigin),
}

impl Origin {
    pub fn numeric(min: f64, max: f64) -> Self {
        Origin::Numeric(NumericOrigin::new(min, max))
    }

    pub fn categorical(value: impl Into<Value>) -> Self {
        Origin::Categorical(CategoricalOrigin::new(value.into()))
    }

    pub fn kind(&self) -> OriginKind {
        match self {
            Origin::Numeric(_) => OriginKind::Numeric,
            Origin::Categorical(_) => OriginKind::Categorical,
        }
    }

    pub fn as_numeric(&self) -> Option<&NumericOrigin> {
        match self {
            Origin::Numeric(origin) => Some(origin),
            Origin::Categorical(_) => None,
        }
    }

    pub(crate) fn as_numeric_mut(&mut self) -> Option<&mut NumericOrigin> {
        match self {
            Origin::Numeric(origin) => Some(origin),
            Origin::Categorical(_) => None,
        }
    }

    /// Whether this origin accepts `value`.
    ///
    /// Numeric origins never accept text; categorical origins compare by equality.
    pub fn can_discretize(&self, value: &Value) -> bool {
        match (self, value) {
            (Origin::Numeric(origin), Value::Number(v)) => origin.contains(*v),
            (Origin::Numeric(_), Value::Text(_)) => false,
            (Origin::Categorical(origin), v) => origin.contains(v),
        }
    }

    /// Condition-style rendering, e.g. `IN [1, 5)` or `= 'red'`.
    pub fn output_format(&self) -> String {
        match self {
            Origin::Numeric(origin) => format!("IN {}", origin.range_notation()),
            Origin::Categorical(origin) => format!("= '{}'", origin.value),
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Numeric(origin) => write!(f, "{}", origin.range_notation()),
            Origin::Categorical(origin) => write!(f, "[{}]", origin.value),
        }
    }
}
