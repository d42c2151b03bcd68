use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::CalculationError;

/// Number of people splitting the bill, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PeopleCount(u32);

impl PeopleCount {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 20;

    /// Creates a people count, rejecting values outside `[MIN, MAX]`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::PeopleCountOutOfRange`] when `count` is
    /// below 2 or above 20. This also rules out a zero divisor.
    pub fn new(count: u32) -> Result<Self, CalculationError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(CalculationError::PeopleCountOutOfRange {
                count,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// One more person, stopping at `MAX`.
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// One fewer person, stopping at `MIN`.
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for PeopleCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u32> for PeopleCount {
    type Error = CalculationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PeopleCount> for u32 {
    fn from(count: PeopleCount) -> Self {
        count.0
    }
}

impl fmt::Display for PeopleCount {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_accepts_bounds() {
        assert_eq!(PeopleCount::new(2).unwrap().get(), 2);
        assert_eq!(PeopleCount::new(20).unwrap().get(), 20);
    }

    #[test]
    fn new_rejects_zero_and_one() {
        for count in [0, 1] {
            assert_eq!(
                PeopleCount::new(count),
                Err(CalculationError::PeopleCountOutOfRange {
                    count,
                    min: 2,
                    max: 20
                })
            );
        }
    }

    #[test]
    fn new_rejects_above_max() {
        assert!(PeopleCount::new(21).is_err());
    }

    #[test]
    fn increment_stops_at_max() {
        let count = PeopleCount::new(19).unwrap().increment().increment();

        assert_eq!(count.get(), 20);
    }

    #[test]
    fn decrement_stops_at_min() {
        let count = PeopleCount::new(3).unwrap().decrement().decrement();

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn default_is_two() {
        assert_eq!(PeopleCount::default().get(), 2);
    }
}
