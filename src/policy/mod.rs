//! Password composition policies and the masks that satisfy them.

mod enumerate;
mod product;

pub use enumerate::{LengthTotals, PolicySummary, enumerate};
pub use product::MaskProduct;

use crate::error::{MaskError, Result};
use crate::mask::{CharClass, ClassCounts};

/// Largest length whose whole keyspace still fits the 128-bit accumulators.
pub const MAX_POLICY_LENGTH: usize = 19;

/// Optional inclusive bounds on how many positions of one class a mask has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl Bounds {
    pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, count: usize) -> bool {
        self.min.is_none_or(|min| count >= min) && self.max.is_none_or(|max| count <= max)
    }

    fn validate(&self, class: &str) -> Result<()> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(MaskError::InvalidPolicy(format!(
                "min{class} ({min}) is greater than max{class} ({max})"
            ))),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub min_length: usize,
    pub max_length: usize,
    pub lower: Bounds,
    pub upper: Bounds,
    pub digit: Bounds,
    pub special: Bounds,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 8,
            lower: Bounds::default(),
            upper: Bounds::default(),
            digit: Bounds::default(),
            special: Bounds::default(),
        }
    }
}

impl Policy {
    /// Reject configurations that can never be enumerated.
    pub fn validate(&self) -> Result<()> {
        if self.max_length < self.min_length {
            return Err(MaskError::InvalidPolicy(format!(
                "maxlength ({}) is smaller than minlength ({})",
                self.max_length, self.min_length
            )));
        }
        if self.max_length > MAX_POLICY_LENGTH {
            return Err(MaskError::InvalidPolicy(format!(
                "maxlength ({}) exceeds {MAX_POLICY_LENGTH}",
                self.max_length
            )));
        }
        self.lower.validate("lower")?;
        self.upper.validate("upper")?;
        self.digit.validate("digit")?;
        self.special.validate("special")?;
        Ok(())
    }

    /// True when every configured bound holds for `counts`.
    #[inline]
    pub fn complies(&self, counts: &ClassCounts) -> bool {
        self.lower.contains(counts.lower)
            && self.upper.contains(counts.upper)
            && self.digit.contains(counts.digit)
            && self.special.contains(counts.special)
    }

    /// Bounds configured for `class`; `?a` is never constrained.
    pub fn bounds(&self, class: CharClass) -> Bounds {
        match class {
            CharClass::Lower => self.lower,
            CharClass::Upper => self.upper,
            CharClass::Digit => self.digit,
            CharClass::Special => self.special,
            CharClass::All => Bounds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_eight_characters_unconstrained() {
        let policy = Policy::default();
        assert_eq!((policy.min_length, policy.max_length), (8, 8));
        assert!(policy.complies(&ClassCounts::default()));
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn inverted_length_range_is_rejected() {
        let policy = Policy {
            min_length: 9,
            max_length: 8,
            ..Policy::default()
        };
        assert!(matches!(policy.validate(), Err(MaskError::InvalidPolicy(_))));
    }

    #[test]
    fn crossed_class_bounds_are_rejected() {
        let policy = Policy {
            digit: Bounds::new(Some(3), Some(2)),
            ..Policy::default()
        };
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("mindigit"));
    }

    #[test]
    fn oversized_lengths_are_rejected() {
        let policy = Policy {
            min_length: 1,
            max_length: MAX_POLICY_LENGTH + 1,
            ..Policy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn compliance_ands_every_bound() {
        let policy = Policy {
            lower: Bounds::new(Some(1), None),
            digit: Bounds::new(Some(1), Some(2)),
            ..Policy::default()
        };
        let ok = ClassCounts { lower: 5, digit: 2, ..ClassCounts::default() };
        let no_digit = ClassCounts { lower: 5, ..ClassCounts::default() };
        let many_digits = ClassCounts { lower: 1, digit: 3, ..ClassCounts::default() };
        assert!(policy.complies(&ok));
        assert!(!policy.complies(&no_digit));
        assert!(!policy.complies(&many_digits));
        assert_eq!(policy.bounds(CharClass::Digit), Bounds::new(Some(1), Some(2)));
    }
}
