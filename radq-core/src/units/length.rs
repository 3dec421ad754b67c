//! Length units.
//!
//! The coherent unit for this dimension is [`METER`] (`METER.ratio() == 1.0`). All other length units are expressed
//! as exact or best-available ratios to metres.
//!
//! Notes on definitions used here:
//!
//! - **Astronomical unit (au)** is **exactly** `149_597_870_700 m` (IAU 2012).
//! - **Parsec (pc)** is defined from au via `pc = au * 648000 / π` (exact, given au).
//! - **Light-year (ly)** is derived from the exact speed of light `c = 299_792_458 m/s` and one
//!   **Julian year** (`365.25 d`, `d = 86400 s`).
//! - **Ångström** is exactly `1e-10 m`; it is the wavelength unit inside [`flam`](super::flux::FLAM).
//!
//! ```rust
//! use radq_core::length::{ASTRONOMICAL_UNIT, KILOMETER};
//!
//! let au = 1.0 * ASTRONOMICAL_UNIT;
//! assert_eq!(au.convert(KILOMETER).unwrap(), 149_597_870.7);
//! ```

use crate::{define_unit, scaled_unit, Dimension, Unit};
use core::f64::consts::PI;

define_unit!(
    /// Metre (SI base unit).
    METER, "m", Dimension::LENGTH, 1.0
);

scaled_unit!(KILOMETER, "km", METER, 1e3);
scaled_unit!(CENTIMETER, "cm", METER, 1e-2);
scaled_unit!(MILLIMETER, "mm", METER, 1e-3);
scaled_unit!(MICROMETER, "µm", METER, 1e-6);
scaled_unit!(NANOMETER, "nm", METER, 1e-9);
scaled_unit!(ANGSTROM, "Å", METER, 1e-10);

define_unit!(
    /// Astronomical unit (exactly `149_597_870_700 m`).
    ASTRONOMICAL_UNIT, "au", Dimension::LENGTH, 149_597_870_700.0
);

define_unit!(
    /// Light-year: distance light travels in one Julian year.
    LIGHT_YEAR, "ly", Dimension::LENGTH, 299_792_458.0 * 365.25 * 86_400.0
);

define_unit!(
    /// Parsec (`au * 648000 / π`).
    PARSEC, "pc", Dimension::LENGTH, 149_597_870_700.0 * (648_000.0 / PI)
);

scaled_unit!(KILOPARSEC, "kpc", PARSEC, 1e3);
scaled_unit!(MEGAPARSEC, "Mpc", PARSEC, 1e6);

/// Every named length unit, in catalog order.
pub const UNITS: &[Unit] = &[
    METER,
    KILOMETER,
    CENTIMETER,
    MILLIMETER,
    MICROMETER,
    NANOMETER,
    ANGSTROM,
    ASTRONOMICAL_UNIT,
    LIGHT_YEAR,
    PARSEC,
    KILOPARSEC,
    MEGAPARSEC,
];
