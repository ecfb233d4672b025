//! Piecewise-linear lookup tables
//!
//! [`InterpolatingMap`] stores a small, sorted set of `(key, value)` points
//! in fixed-capacity storage and answers queries by linear interpolation
//! between the neighbouring points. Queries outside the table clamp to the
//! first or last value.

use core::fmt;

use heapless::Vec;

/// Errors from building or editing a lookup table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableError {
    /// Table has no points
    Empty,
    /// Table capacity exceeded
    Full,
    /// Key or value is NaN or infinite
    NonFinite {
        /// Offending key
        key: f32,
    },
    /// Two points share the same key
    DuplicateKey {
        /// Repeated key
        key: f32,
    },
    /// Values are neither non-decreasing nor non-increasing
    NotMonotonic,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Empty => write!(f, "lookup table is empty"),
            TableError::Full => write!(f, "lookup table is full"),
            TableError::NonFinite { key } => {
                write!(f, "lookup table point at key {} is not finite", key)
            }
            TableError::DuplicateKey { key } => {
                write!(f, "lookup table has duplicate key {}", key)
            }
            TableError::NotMonotonic => write!(f, "lookup table values are not monotonic"),
        }
    }
}

/// Sorted, fixed-capacity interpolation table
///
/// # Example
///
/// ```
/// use align_shoot_core::interpolation::InterpolatingMap;
///
/// let map: InterpolatingMap<4> =
///     InterpolatingMap::from_points(&[(1.0, 10.0), (3.0, 30.0)]).unwrap();
/// assert_eq!(map.get(2.0), Some(20.0));
/// assert_eq!(map.get(0.0), Some(10.0)); // clamped below
/// assert_eq!(map.get(9.0), Some(30.0)); // clamped above
/// ```
#[derive(Debug, Clone, Default)]
pub struct InterpolatingMap<const N: usize> {
    points: Vec<(f32, f32), N>,
}

impl<const N: usize> InterpolatingMap<N> {
    /// Create an empty table
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a table from unordered points
    ///
    /// Points are sorted by key. Rejects empty input, non-finite points,
    /// duplicate keys, and inputs larger than the capacity.
    pub fn from_points(points: &[(f32, f32)]) -> Result<Self, TableError> {
        if points.is_empty() {
            return Err(TableError::Empty);
        }
        if points.len() > N {
            return Err(TableError::Full);
        }

        let mut map = Self::new();
        for &(key, value) in points {
            if map.contains_key(key) {
                return Err(TableError::DuplicateKey { key });
            }
            map.insert(key, value)?;
        }
        Ok(map)
    }

    /// Insert a point, keeping keys sorted
    ///
    /// An existing key has its value replaced.
    pub fn insert(&mut self, key: f32, value: f32) -> Result<(), TableError> {
        if !key.is_finite() || !value.is_finite() {
            return Err(TableError::NonFinite { key });
        }

        match self.points.iter().position(|&(k, _)| k >= key) {
            Some(idx) if self.points[idx].0 == key => {
                self.points[idx].1 = value;
                Ok(())
            }
            Some(idx) => self
                .points
                .insert(idx, (key, value))
                .map_err(|_| TableError::Full),
            None => self.points.push((key, value)).map_err(|_| TableError::Full),
        }
    }

    /// Interpolated value at `key`
    ///
    /// Returns `None` only when the table is empty or `key` is NaN.
    pub fn get(&self, key: f32) -> Option<f32> {
        if key.is_nan() {
            return None;
        }
        let (first, last) = (self.points.first()?, self.points.last()?);

        if key <= first.0 {
            return Some(first.1);
        }
        if key >= last.0 {
            return Some(last.1);
        }

        // first.0 < key < last.0, so an upper neighbour exists at idx >= 1
        let idx = self.points.iter().position(|&(k, _)| k >= key)?;
        let (k_hi, v_hi) = self.points[idx];
        if k_hi == key {
            return Some(v_hi);
        }
        let (k_lo, v_lo) = self.points[idx - 1];
        let t = (key - k_lo) / (k_hi - k_lo);
        Some(v_lo + t * (v_hi - v_lo))
    }

    /// True if a point exists at exactly `key`
    pub fn contains_key(&self, key: f32) -> bool {
        self.points.iter().any(|&(k, _)| k == key)
    }

    /// True if values never change direction as keys increase
    pub fn is_monotonic(&self) -> bool {
        let rising = self.points.windows(2).all(|w| w[1].1 >= w[0].1);
        let falling = self.points.windows(2).all(|w| w[1].1 <= w[0].1);
        rising || falling
    }

    /// Smallest and largest key
    pub fn domain(&self) -> Option<(f32, f32)> {
        Some((self.points.first()?.0, self.points.last()?.0))
    }

    /// Points in key order
    pub fn points(&self) -> &[(f32, f32)] {
        &self.points
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the table has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
