//! Mass units.
//!
//! The coherent unit for this dimension is [`KILOGRAM`]. Grams are a prefix of it rather than the other way round,
//! so composed CGS units such as the erg pick up the `1e-3` factor exactly once.
//!
//! ```rust
//! use radq_core::mass::{GRAM, SOLAR_MASS};
//!
//! let sun = 1.0 * SOLAR_MASS;
//! assert!(sun.convert(GRAM).unwrap() > 1e33);
//! ```

use crate::{define_unit, scaled_unit, Dimension, Unit};

define_unit!(
    /// Kilogram (SI base unit).
    KILOGRAM, "kg", Dimension::MASS, 1.0
);

scaled_unit!(GRAM, "g", KILOGRAM, 1e-3);

define_unit!(
    /// Nominal solar mass (IAU 2015 `GM☉` over CODATA `G`).
    SOLAR_MASS, "M☉", Dimension::MASS, 1.988_416e30
);

/// Every named mass unit.
pub const UNITS: &[Unit] = &[KILOGRAM, GRAM, SOLAR_MASS];
