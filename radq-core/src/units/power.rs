//! Power units.
//!
//! ```rust
//! use radq_core::power::{SOLAR_LUMINOSITY, WATT};
//!
//! let sol = 1.0 * SOLAR_LUMINOSITY;
//! assert!((sol.convert(WATT).unwrap() - 3.828e26).abs() < 1e18);
//! ```

use crate::{define_unit, scaled_unit, Dimension, Unit};

define_unit!(
    /// Watt (SI coherent derived unit).
    WATT, "W", Dimension::POWER, 1.0
);

scaled_unit!(ERG_PER_SECOND, "erg/s", WATT, 1e-7);

define_unit!(
    /// Solar luminosity (IAU 2015 nominal value).
    SOLAR_LUMINOSITY, "L☉", Dimension::POWER, 3.828e26
);

/// Every named power unit.
pub const UNITS: &[Unit] = &[WATT, ERG_PER_SECOND, SOLAR_LUMINOSITY];
