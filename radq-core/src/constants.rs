//! Physical constants.
//!
//! Each constant is defined exactly once, as a compile-time [`Quantity`] tagged with its natural unit, using the
//! exact values fixed by the 2019 SI redefinition. Code that needs bare numbers derives them from these
//! definitions (see [`Quantity::si_value`]) instead of repeating the literals.
//!
//! ```rust
//! use radq_core::constants::{BOLTZMANN, PLANCK, SPEED_OF_LIGHT};
//! use radq_core::Dimension;
//!
//! // h c / k_B has the signature of length times temperature.
//! let second_radiation = PLANCK * SPEED_OF_LIGHT / BOLTZMANN;
//! assert_eq!(second_radiation.dimension(), Dimension::LENGTH.mul(Dimension::TEMPERATURE));
//! ```

use crate::units::energy::{JOULE_PER_KELVIN, JOULE_SECOND};
use crate::units::velocity::METER_PER_SECOND;
use crate::Quantity;

/// Speed of light in vacuum, `c = 299 792 458 m/s` (exact).
pub const SPEED_OF_LIGHT: Quantity = Quantity::new(299_792_458.0, METER_PER_SECOND);

/// Planck constant, `h = 6.626 070 15e-34 J s` (exact).
pub const PLANCK: Quantity = Quantity::new(6.626_070_15e-34, JOULE_SECOND);

/// Boltzmann constant, `k_B = 1.380 649e-23 J/K` (exact).
pub const BOLTZMANN: Quantity = Quantity::new(1.380_649e-23, JOULE_PER_KELVIN);
