//! Energy units, plus the composite units carried by Planck's and Boltzmann's constants.

use crate::units::temperature::KELVIN;
use crate::units::time::SECOND;
use crate::{define_unit, scaled_unit, Dimension, Unit};

define_unit!(
    /// Joule (SI coherent derived unit).
    JOULE, "J", Dimension::ENERGY, 1.0
);

scaled_unit!(ERG, "erg", JOULE, 1e-7);

define_unit!(
    /// Electronvolt (exact since the 2019 SI redefinition).
    ELECTRON_VOLT, "eV", Dimension::ENERGY, 1.602_176_634e-19
);

/// Joule-second, the unit of action.
pub const JOULE_SECOND: Unit = JOULE.mul(SECOND).named("J s");

/// Joule per kelvin, the unit of entropy.
pub const JOULE_PER_KELVIN: Unit = JOULE.per(KELVIN).named("J/K");

/// Every named energy-related unit.
pub const UNITS: &[Unit] = &[JOULE, ERG, ELECTRON_VOLT, JOULE_SECOND, JOULE_PER_KELVIN];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn erg_to_joule() {
        assert_relative_eq!((1e7 * ERG).convert(JOULE).unwrap(), 1.0, max_relative = 1e-15);
    }

    #[test]
    fn composite_signatures() {
        assert_eq!(JOULE_SECOND.dimension(), Dimension::ACTION);
        assert_eq!(JOULE_PER_KELVIN.dimension(), Dimension::ENTROPY);
        assert_eq!(JOULE_SECOND.ratio(), 1.0);
        assert_eq!(JOULE_PER_KELVIN.ratio(), 1.0);
    }
}
