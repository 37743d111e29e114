#[cfg(test)]
#[path = "../../../tests/unit/models/common/capacity_test.rs"]
mod capacity_test;

use crate::models::{ModelError, ModelResult};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Neg, Sub};

/// Represents a multi dimensional capacity used to describe job's size or vehicle's capacity.
///
/// Dimensions are addressed by index, any index beyond the actual size is treated as zero, so
/// capacities which differ only in trailing zero dimensions are equal.
#[derive(Clone, Debug)]
pub struct Capacity {
    dimensions: Vec<i32>,
}

impl Capacity {
    /// Creates a capacity with a single dimension.
    pub fn new_scalar(value: i32) -> ModelResult<Self> {
        Ok(CapacityBuilder::default().add_dimension(0, value)?.build())
    }

    /// Returns a value of dimension with given index or zero if dimension is not specified.
    pub fn get(&self, index: usize) -> i32 {
        self.dimensions.get(index).copied().unwrap_or(0)
    }

    /// Returns amount of dimensions.
    pub fn dimensions(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns dimension values in index order.
    pub fn as_slice(&self) -> &[i32] {
        self.dimensions.as_slice()
    }

    /// Returns true if every dimension is less or equal to the same dimension of `other`.
    pub fn is_less_or_equal(&self, other: &Self) -> bool {
        (0..self.size_with(other)).all(|idx| self.get(idx) <= other.get(idx))
    }

    /// Returns a capacity which keeps maximum value of each dimension.
    pub fn max(&self, other: &Self) -> Self {
        self.combine(other, i32::max)
    }

    fn significant(&self) -> &[i32] {
        let size = self.dimensions.iter().rposition(|value| *value != 0).map_or(0, |idx| idx + 1);
        &self.dimensions[..size]
    }

    fn size_with(&self, other: &Self) -> usize {
        self.dimensions.len().max(other.dimensions.len())
    }

    fn combine(&self, other: &Self, func: impl Fn(i32, i32) -> i32) -> Self {
        let dimensions = (0..self.size_with(other)).map(|idx| func(self.get(idx), other.get(idx))).collect();

        Self { dimensions }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self { dimensions: vec![0] }
    }
}

impl PartialEq for Capacity {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for Capacity {}

impl Hash for Capacity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl Add for &Capacity {
    type Output = Capacity;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}

impl Add for Capacity {
    type Output = Capacity;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub for &Capacity {
    type Output = Capacity;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}

impl Sub for Capacity {
    type Output = Capacity;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl Neg for &Capacity {
    type Output = Capacity;

    fn neg(self) -> Self::Output {
        Capacity { dimensions: self.dimensions.iter().map(|value| -value).collect() }
    }
}

impl Neg for Capacity {
    type Output = Capacity;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.dimensions)
    }
}

/// Max amount of capacity dimensions.
pub const MAX_CAPACITY_DIMENSIONS: usize = 256;

/// Provides a way to build a [Capacity] from sparse and unordered dimensions.
#[derive(Clone, Debug, Default)]
pub struct CapacityBuilder {
    dimensions: Vec<i32>,
}

impl CapacityBuilder {
    /// Sets a dimension value. Fails if value is negative or index is not less than [MAX_CAPACITY_DIMENSIONS].
    pub fn add_dimension(mut self, index: usize, value: i32) -> ModelResult<Self> {
        if index >= MAX_CAPACITY_DIMENSIONS {
            return Err(ModelError::InvalidValue {
                field: format!("capacity dimension {index}"),
                reason: format!("index must be less than {MAX_CAPACITY_DIMENSIONS}"),
            });
        }

        if value < 0 {
            return Err(ModelError::InvalidValue {
                field: format!("capacity dimension {index}"),
                reason: format!("value must not be negative, got {value}"),
            });
        }

        if self.dimensions.len() <= index {
            self.dimensions.resize(index + 1, 0);
        }
        self.dimensions[index] = value;

        Ok(self)
    }

    /// Returns true if no dimension was added.
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Builds a [Capacity] sized to the highest index seen, gaps are filled with zeros.
    pub fn build(self) -> Capacity {
        if self.dimensions.is_empty() { Capacity::default() } else { Capacity { dimensions: self.dimensions } }
    }
}
