//! Time units.
//!
//! The coherent unit is the SI [`SECOND`]. Civil units use the conventional mapping `1 day = 86_400 s` (leap
//! seconds ignored), and [`JULIAN_YEAR`] is exactly `365.25` such days.

use crate::{define_unit, scaled_unit, Dimension, Unit};

/// Seconds per mean solar day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

define_unit!(
    /// Second (SI base unit).
    SECOND, "s", Dimension::TIME, 1.0
);

scaled_unit!(MINUTE, "min", SECOND, 60.0);
scaled_unit!(HOUR, "h", SECOND, 3_600.0);
scaled_unit!(DAY, "d", SECOND, SECONDS_PER_DAY);
scaled_unit!(JULIAN_YEAR, "yr", SECOND, 365.25 * SECONDS_PER_DAY);

/// Every named time unit.
pub const UNITS: &[Unit] = &[SECOND, MINUTE, HOUR, DAY, JULIAN_YEAR];
