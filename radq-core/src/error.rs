//! The quantity system's single failure mode.

use crate::dimension::Dimension;

/// Result alias for fallible quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Error raised when a conversion or dimension-sensitive operation meets incompatible signatures.
///
/// This is the only error the quantity system produces. Floating-point anomalies (NaN, infinities, division by
/// zero) are not errors; they propagate as IEEE-754 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// The target signature differs from the source signature.
    #[error("dimension mismatch: expected [{expected}], found [{found}]")]
    DimensionMismatch {
        /// Signature required by the operation (e.g. the target unit's).
        expected: Dimension,
        /// Signature actually supplied.
        found: Dimension,
    },
}

impl QuantityError {
    /// Fails with [`QuantityError::DimensionMismatch`] unless `found == expected`.
    #[inline]
    pub fn ensure_compatible(expected: Dimension, found: Dimension) -> QuantityResult<()> {
        if expected.equals(&found) {
            Ok(())
        } else {
            Err(QuantityError::DimensionMismatch { expected, found })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_signatures() {
        let err = QuantityError::DimensionMismatch {
            expected: Dimension::TEMPERATURE,
            found: Dimension::LENGTH,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected [K], found [m]");
    }

    #[test]
    fn ensure_compatible() {
        assert!(QuantityError::ensure_compatible(Dimension::LENGTH, Dimension::LENGTH).is_ok());
        assert_eq!(
            QuantityError::ensure_compatible(Dimension::LENGTH, Dimension::TIME),
            Err(QuantityError::DimensionMismatch {
                expected: Dimension::LENGTH,
                found: Dimension::TIME,
            })
        );
    }
}
