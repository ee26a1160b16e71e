use num_traits::ToPrimitive;
use ordered_float::OrderedFloat;
use std::fmt;
use std::ops::Add;

use crate::{Error, Result};

/// A validated edge or path cost.
///
/// Always finite and non-negative. Addition saturates at `f64::MAX`, so a
/// sum of costs never turns into infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    /// The cost of the empty path
    pub const ZERO: Cost = Cost(OrderedFloat(0.0));

    /// Validates a raw float as a cost
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            // -0.0 compares equal to 0.0 but would print as "-0"
            Ok(Cost(OrderedFloat(value + 0.0)))
        } else {
            Err(Error::InvalidCost {
                value: value.to_string(),
            })
        }
    }

    /// Clamps a raw float into range: NaN and negatives become zero, and
    /// infinities become `f64::MAX`.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            Cost::ZERO
        } else {
            Cost(OrderedFloat(value.min(f64::MAX)))
        }
    }

    /// Validates any primitive number as a cost
    pub fn from_num<T>(value: T) -> Result<Self>
    where
        T: ToPrimitive + fmt::Debug,
    {
        match value.to_f64() {
            Some(v) => Cost::new(v),
            None => Err(Error::InvalidCost {
                value: format!("{:?}", value),
            }),
        }
    }

    /// Validates a JSON leaf as a cost
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        match value.as_f64() {
            Some(v) => Cost::new(v),
            None => Err(Error::InvalidCost {
                value: value.to_string(),
            }),
        }
    }

    /// Returns the raw float value
    pub fn value(self) -> f64 {
        self.0.into_inner()
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        Cost(OrderedFloat(saturating_add(self.value(), rhs.value())))
    }
}

impl TryFrom<f64> for Cost {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Cost::new(value)
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> f64 {
        cost.value()
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Adds two non-negative finite costs, capping the sum at `f64::MAX`
pub(crate) fn saturating_add(a: f64, b: f64) -> f64 {
    (a + b).min(f64::MAX)
}
