//! Program model: fractions, the ordered instruction list, and eager
//! construction-time validation.

use std::fmt;
use std::ops::Index;

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

/// Rejected program or seed configuration.
///
/// The only failure class in the crate. Raised eagerly at construction so a
/// bad table can never surface as a division fault mid-run; stepping itself
/// is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConfigurationError {
    /// A fraction denominator was zero.
    #[error("fraction {index} has a zero denominator")]
    ZeroDenominator {
        /// Index of the offending fraction.
        index: usize,
    },
    /// A fraction numerator was zero.
    #[error("fraction {index} has a zero numerator")]
    ZeroNumerator {
        /// Index of the offending fraction.
        index: usize,
    },
    /// The initial register value was zero.
    #[error("initial register value must be positive")]
    ZeroSeed,
}

/// One program instruction: a positive rational multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Fraction {
    numerator: BigUint,
    denominator: BigUint,
}

impl Fraction {
    /// Creates a fraction from small constants, the way program tables do.
    #[must_use]
    pub fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator: BigUint::from(numerator),
            denominator: BigUint::from(denominator),
        }
    }

    /// Numerator of the multiplier.
    #[must_use]
    pub const fn numerator(&self) -> &BigUint {
        &self.numerator
    }

    /// Denominator of the multiplier.
    #[must_use]
    pub const fn denominator(&self) -> &BigUint {
        &self.denominator
    }

    /// Returns `true` when the denominator exactly divides `value`.
    #[must_use]
    pub fn divides(&self, value: &BigUint) -> bool {
        (value % &self.denominator).is_zero()
    }

    /// Applies the multiplier: `value * numerator / denominator`.
    ///
    /// Division is exact whenever [`Self::divides`] holds for `value`; the
    /// stepping pipeline only applies fractions the search step selected.
    #[must_use]
    pub fn apply(&self, value: &BigUint) -> BigUint {
        value * &self.numerator / &self.denominator
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// An ordered, immutable FRACTRAN program.
///
/// Order is semantically significant: the search step always selects the
/// first fraction whose denominator divides the register.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Program {
    fractions: Vec<Fraction>,
}

impl Program {
    /// Validates and wraps an instruction list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when any fraction has a zero numerator
    /// or denominator, naming the offending index.
    pub fn new(fractions: Vec<Fraction>) -> Result<Self, ConfigurationError> {
        for (index, fraction) in fractions.iter().enumerate() {
            if fraction.denominator.is_zero() {
                return Err(ConfigurationError::ZeroDenominator { index });
            }
            if fraction.numerator.is_zero() {
                return Err(ConfigurationError::ZeroNumerator { index });
            }
        }
        Ok(Self { fractions })
    }

    /// Builds a program from `(numerator, denominator)` constant pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when any pair contains a zero.
    pub fn from_pairs(pairs: &[(u64, u64)]) -> Result<Self, ConfigurationError> {
        Self::new(
            pairs
                .iter()
                .map(|&(numerator, denominator)| Fraction::new(numerator, denominator))
                .collect(),
        )
    }

    /// Number of instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    /// Returns `true` for the empty program.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Instruction at `index`, if in range.
    #[must_use]
    pub fn fraction(&self, index: usize) -> Option<&Fraction> {
        self.fractions.get(index)
    }

    /// Index-order scan for the first fraction whose denominator divides
    /// `value`. `None` is the normal halting condition, not an error.
    #[must_use]
    pub fn first_applicable(&self, value: &BigUint) -> Option<usize> {
        self.fractions.iter().position(|f| f.divides(value))
    }

    /// Iterates instructions in program order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fraction> {
        self.fractions.iter()
    }
}

impl Index<usize> for Program {
    type Output = Fraction;

    fn index(&self, index: usize) -> &Fraction {
        &self.fractions[index]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Fraction;
    type IntoIter = std::slice::Iter<'a, Fraction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
