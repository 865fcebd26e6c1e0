use std::collections::HashSet;

use crate::discretizer::origin::Origin;
use crate::discretizer::transition::Transition;
use crate::discretizer::value::Value;

/// One categorical bin per distinct value, labeled by first appearance: 0, 1, 2, ...
///
/// The only method that accepts text values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniqueValue;

impl UniqueValue {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &'static str {
        "unique"
    }

    /// Transitions in first-appearance order.
    pub fn fit_values(&self, values: &[Value]) -> Vec<Transition> {
        let mut seen: HashSet<&Value> = HashSet::new();
        let mut transitions = Vec::new();
        for value in values {
            if seen.insert(value) {
                let index = transitions.len() as f64;
                transitions.push(Transition::new(Origin::categorical(value.clone()), index));
            }
        }
        transitions
    }
}
