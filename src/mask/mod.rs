//! Mask notation and keyspace arithmetic.
//!
//! A mask is a run of `?x` tokens (`?l?l?l?l?d?d`). Its complexity is the
//! product of the cardinalities of its tokens.

mod class;

use std::fmt;
use std::str::FromStr;

pub use class::{CharClass, ClassCounts};

use crate::error::{MaskError, Result};

/// Parsed, immutable mask.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Mask {
    tokens: Vec<CharClass>,
}

impl Mask {
    pub fn parse(mask: &str) -> Result<Self> {
        let tokens = Tokens::new(mask).collect::<Result<Vec<_>>>()?;
        Ok(Self { tokens })
    }

    pub fn from_classes(tokens: Vec<CharClass>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[CharClass] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn counts(&self) -> ClassCounts {
        self.tokens.iter().copied().collect()
    }

    /// Keyspace of this mask, `None` if it does not fit in 128 bits.
    pub fn checked_complexity(&self) -> Option<u128> {
        keyspace(&self.tokens)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in &self.tokens {
            f.write_str(class.token())?;
        }
        Ok(())
    }
}

impl FromStr for Mask {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self> {
        Mask::parse(s)
    }
}

/// Iterator over the tokens of a mask string.
///
/// A token runs from one `?` up to the next, so `?l?xy` yields `?l` and then
/// an error naming `?xy`.
pub struct Tokens<'a> {
    mask: &'a str,
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(mask: &'a str) -> Self {
        Self { mask, rest: mask }
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<CharClass>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '?')
            .map_or(self.rest.len(), |(i, _)| i);
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;

        let class = match token.as_bytes() {
            [b'?', symbol] => CharClass::from_symbol(*symbol),
            _ => None,
        };
        Some(class.ok_or_else(|| MaskError::MalformedMask {
            mask: self.mask.to_string(),
            token: token.to_string(),
        }))
    }
}

/// Keyspace of a class sequence, `None` on overflow.
#[inline]
pub fn keyspace(classes: &[CharClass]) -> Option<u128> {
    classes
        .iter()
        .try_fold(1u128, |acc, class| acc.checked_mul(class.cardinality()))
}

/// Keyspace of a mask string without allocating.
pub fn complexity(mask: &str) -> Result<u128> {
    Tokens::new(mask).try_fold(1u128, |acc, class| {
        acc.checked_mul(class?.cardinality())
            .ok_or_else(|| MaskError::ComplexityOverflow {
                mask: mask.to_string(),
            })
    })
}

/// Token count of a mask string, validating every token.
pub fn length(mask: &str) -> Result<usize> {
    Tokens::new(mask).try_fold(0usize, |n, class| class.map(|_| n + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complexity_is_product_of_cardinalities() {
        assert_eq!(complexity("?l?l?d?d").unwrap(), 67_600);
        assert_eq!(complexity("?u?s").unwrap(), 26 * 33);
        assert_eq!(complexity("?a?a?a").unwrap(), 95 * 95 * 95);
    }

    #[test]
    fn empty_mask_has_unit_complexity() {
        assert_eq!(complexity("").unwrap(), 1);
        assert_eq!(length("").unwrap(), 0);
    }

    #[test]
    fn complexity_grows_with_length() {
        let mut prev = 0;
        for len in 1..=12 {
            let next = complexity(&"?d".repeat(len)).unwrap();
            assert!(next > prev);
            prev = next;
        }
    }

    #[test]
    fn unknown_token_names_mask_and_token() {
        match complexity("?l?x?d") {
            Err(MaskError::MalformedMask { mask, token }) => {
                assert_eq!(mask, "?l?x?d");
                assert_eq!(token, "?x");
            }
            other => panic!("expected MalformedMask, got {other:?}"),
        }
    }

    #[test]
    fn stray_text_is_one_bad_token() {
        match Mask::parse("?lab?d") {
            Err(MaskError::MalformedMask { token, .. }) => assert_eq!(token, "?lab"),
            other => panic!("expected MalformedMask, got {other:?}"),
        }
        match Mask::parse("password") {
            Err(MaskError::MalformedMask { token, .. }) => assert_eq!(token, "password"),
            other => panic!("expected MalformedMask, got {other:?}"),
        }
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert!(complexity("?lé?d").is_err());
        assert!(complexity("é").is_err());
    }

    #[test]
    fn overflow_is_reported() {
        let huge = "?a".repeat(40);
        assert!(matches!(
            complexity(&huge),
            Err(MaskError::ComplexityOverflow { .. })
        ));
        assert_eq!(Mask::parse(&huge).unwrap().checked_complexity(), None);
    }

    #[test]
    fn parse_and_display_agree() {
        let mask: Mask = "?u?l?l?d?s".parse().unwrap();
        assert_eq!(mask.len(), 5);
        assert_eq!(mask.to_string(), "?u?l?l?d?s");
        assert_eq!(mask.checked_complexity(), Some(26 * 26 * 26 * 10 * 33));
        let counts = mask.counts();
        assert_eq!((counts.lower, counts.upper, counts.digit, counts.special), (2, 1, 1, 1));
    }
}
