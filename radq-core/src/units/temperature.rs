//! Thermodynamic temperature units.
//!
//! Only absolute (ratio) scales are modelled: [`KELVIN`], [`MILLIKELVIN`] and [`RANKINE`]. Offset scales such as
//! Celsius are affine, not multiplicative, and are deliberately absent.
//!
//! ```rust
//! use radq_core::temperature::{KELVIN, RANKINE};
//!
//! let t = 9.0 * RANKINE;
//! assert!((t.convert(KELVIN).unwrap() - 5.0).abs() < 1e-12);
//! ```

use crate::{define_unit, scaled_unit, Dimension, Unit};

define_unit!(
    /// Kelvin (SI base unit).
    KELVIN, "K", Dimension::TEMPERATURE, 1.0
);

scaled_unit!(MILLIKELVIN, "mK", KELVIN, 1e-3);

define_unit!(
    /// Degree Rankine (`5/9 K`).
    RANKINE, "°R", Dimension::TEMPERATURE, 5.0 / 9.0
);

/// Every named temperature unit.
pub const UNITS: &[Unit] = &[KELVIN, MILLIKELVIN, RANKINE];
