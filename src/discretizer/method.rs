//! Method selection: which discretizer to fit and with which parameters.

use std::fmt;

use serde::Serialize;

use super::ameva::Ameva;
use super::error::Result;
use super::fusinter::{FusInter, FusinterParams, DEFAULT_ALPHA, DEFAULT_LAMBDA};
use super::mdlp::Mdlp;
use super::transition::BinLabeling;
use super::unsupervised::{EqualSize, Manual, PercentileMedian, RandomBaseline, UniqueValue};

/// Default number of classes for percentile discretization
pub const DEFAULT_PERCENTILE_CLASSES: usize = 10;

/// Discretization method names as accepted on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MethodKind {
    /// Greedy forward selection with the Ameva criterion (default)
    #[default]
    Ameva,
    /// Recursive entropy splitting with the MDL stop rule
    Mdlp,
    /// Bottom-up merging with a smoothed quadratic entropy
    Fusinter,
    /// Equal-frequency classes
    Percentile,
    /// Classes with a fixed number of samples
    EqualSize,
    /// User-given class boundaries
    Manual,
    /// Random boundaries, a baseline
    Random,
    /// One bin per distinct value
    Unique,
}

impl MethodKind {
    pub const ALL: [MethodKind; 8] = [
        MethodKind::Ameva,
        MethodKind::Mdlp,
        MethodKind::Fusinter,
        MethodKind::Percentile,
        MethodKind::EqualSize,
        MethodKind::Manual,
        MethodKind::Random,
        MethodKind::Unique,
    ];

    pub fn is_supervised(&self) -> bool {
        matches!(self, MethodKind::Ameva | MethodKind::Mdlp | MethodKind::Fusinter)
    }

    /// Only the unique-value method accepts non-numeric values.
    pub fn accepts_text(&self) -> bool {
        matches!(self, MethodKind::Unique)
    }

    pub fn description(&self) -> &'static str {
        match self {
            MethodKind::Ameva => "supervised, Ameva criterion",
            MethodKind::Mdlp => "supervised, entropy with MDL stop rule",
            MethodKind::Fusinter => "supervised, smoothed entropy merging",
            MethodKind::Percentile => "equal-frequency classes",
            MethodKind::EqualSize => "fixed class size (sqrt(n) by default)",
            MethodKind::Manual => "user-given boundaries",
            MethodKind::Random => "random boundaries",
            MethodKind::Unique => "one bin per distinct value",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MethodKind::Ameva => "ameva",
            MethodKind::Mdlp => "mdlp",
            MethodKind::Fusinter => "fusinter",
            MethodKind::Percentile => "percentile",
            MethodKind::EqualSize => "equal-size",
            MethodKind::Manual => "manual",
            MethodKind::Random => "random",
            MethodKind::Unique => "unique",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for MethodKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "ameva" => Ok(MethodKind::Ameva),
            "mdlp" => Ok(MethodKind::Mdlp),
            "fusinter" => Ok(MethodKind::Fusinter),
            "percentile" | "percentile-median" => Ok(MethodKind::Percentile),
            "equal-size" | "equalsize" => Ok(MethodKind::EqualSize),
            "manual" => Ok(MethodKind::Manual),
            "random" => Ok(MethodKind::Random),
            "unique" | "unique-value" => Ok(MethodKind::Unique),
            _ => Err(format!(
                "Unknown discretization method: '{}'. Use 'ameva', 'mdlp', 'fusinter', \
                 'percentile', 'equal-size', 'manual', 'random' or 'unique'.",
                s
            )),
        }
    }
}

/// Parameters for building a [`Method`]; each method reads the ones it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodParams {
    /// Labeling for supervised methods; `None` keeps the method's default
    pub labeling: Option<BinLabeling>,
    /// Class count for percentile discretization
    pub bins: usize,
    /// Samples per class for equal-size discretization; 0 picks sqrt(n)
    pub class_size: usize,
    /// Upper class boundaries for manual discretization
    pub boundaries: Vec<f64>,
    pub lambda: f64,
    pub alpha: f64,
    /// Seed for the random baseline
    pub seed: Option<u64>,
}

impl Default for MethodParams {
    fn default() -> Self {
        Self {
            labeling: None,
            bins: DEFAULT_PERCENTILE_CLASSES,
            class_size: 0,
            boundaries: Vec::new(),
            lambda: DEFAULT_LAMBDA,
            alpha: DEFAULT_ALPHA,
            seed: None,
        }
    }
}

/// A configured discretization method.
#[derive(Debug, Clone, PartialEq)]
pub enum Method {
    Ameva(Ameva),
    Mdlp(Mdlp),
    FusInter(FusInter),
    Percentile(PercentileMedian),
    EqualSize(EqualSize),
    Manual(Manual),
    Random(RandomBaseline),
    Unique(UniqueValue),
}

impl Method {
    /// Build the method `kind` from `params`, validating the parameters it uses.
    pub fn from_params(kind: MethodKind, params: &MethodParams) -> Result<Self> {
        let method = match kind {
            MethodKind::Ameva => {
                Method::Ameva(Ameva::with_labeling(params.labeling.unwrap_or_default()))
            }
            MethodKind::Mdlp => Method::Mdlp(Mdlp::with_labeling(params.labeling.unwrap_or_default())),
            MethodKind::Fusinter => {
                let fusinter = FusInter::with_params(FusinterParams::new(params.lambda, params.alpha)?);
                Method::FusInter(match params.labeling {
                    Some(labeling) => fusinter.labeling(labeling),
                    None => fusinter,
                })
            }
            MethodKind::Percentile => Method::Percentile(PercentileMedian::new(params.bins)?),
            MethodKind::EqualSize => Method::EqualSize(EqualSize::new(params.class_size)),
            MethodKind::Manual => Method::Manual(Manual::new(params.boundaries.iter().copied())?),
            MethodKind::Random => Method::Random(RandomBaseline::new(params.seed)),
            MethodKind::Unique => Method::Unique(UniqueValue::new()),
        };
        Ok(method)
    }

    pub fn kind(&self) -> MethodKind {
        match self {
            Method::Ameva(_) => MethodKind::Ameva,
            Method::Mdlp(_) => MethodKind::Mdlp,
            Method::FusInter(_) => MethodKind::Fusinter,
            Method::Percentile(_) => MethodKind::Percentile,
            Method::EqualSize(_) => MethodKind::EqualSize,
            Method::Manual(_) => MethodKind::Manual,
            Method::Random(_) => MethodKind::Random,
            Method::Unique(_) => MethodKind::Unique,
        }
    }

    pub fn is_supervised(&self) -> bool {
        self.kind().is_supervised()
    }
}

impl From<Ameva> for Method {
    fn from(method: Ameva) -> Self {
        Method::Ameva(method)
    }
}

impl From<Mdlp> for Method {
    fn from(method: Mdlp) -> Self {
        Method::Mdlp(method)
    }
}

impl From<FusInter> for Method {
    fn from(method: FusInter) -> Self {
        Method::FusInter(method)
    }
}

impl From<PercentileMedian> for Method {
    fn from(method: PercentileMedian) -> Self {
        Method::Percentile(method)
    }
}

impl From<EqualSize> for Method {
    fn from(method: EqualSize) -> Self {
        Method::EqualSize(method)
    }
}

impl From<Manual> for Method {
    fn from(method: Manual) -> Self {
        Method::Manual(method)
    }
}

impl From<RandomBaseline> for Method {
    fn from(method: RandomBaseline) -> Self {
        Method::Random(method)
    }
}

impl From<UniqueValue> for Method {
    fn from(method: UniqueValue) -> Self {
        Method::Unique(method)
    }
}
