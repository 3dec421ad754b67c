//! Dimensionless units.
//!
//! [`ONE`] is the ratio-one dimensionless unit; quantities expressed in it print as bare numbers. A dimensionless
//! ratio of two compatible quantities is convertible to it regardless of the units it was built from.
//!
//! ```rust
//! use radq_core::length::{KILOMETER, METER};
//! use radq_core::unitless::ONE;
//!
//! let ratio = (3.0 * KILOMETER) / (1.0 * METER);
//! assert!((ratio.convert(ONE).unwrap() - 3_000.0).abs() < 1e-9);
//! ```

use crate::{define_unit, Dimension, Unit};

pub use crate::unit::ONE;

define_unit!(
    /// Percent (`1e-2`).
    PERCENT, "%", Dimension::DIMENSIONLESS, 1e-2
);

/// Every named dimensionless unit. [`ONE`] is listed under the empty symbol.
pub const UNITS: &[Unit] = &[ONE, PERCENT];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::METER;
    use crate::Quantity;
    use approx::assert_relative_eq;

    #[test]
    fn percent_to_one() {
        assert_relative_eq!((25.0 * PERCENT).convert(ONE).unwrap(), 0.25);
    }

    #[test]
    fn display_unitless() {
        assert_eq!(Quantity::dimensionless(42.0).to_string(), "42");
        assert_eq!((12.5 * PERCENT).to_string(), "12.5 %");
    }

    #[test]
    fn length_is_not_dimensionless() {
        assert!((1.0 * METER).convert(ONE).is_err());
    }
}
