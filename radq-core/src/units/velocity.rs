//! Velocity units (`Length / Time`).

use crate::units::length::{KILOMETER, METER};
use crate::units::time::SECOND;
use crate::Unit;

/// Metre per second.
pub const METER_PER_SECOND: Unit = METER.per(SECOND).named("m/s");

/// Kilometre per second.
pub const KILOMETER_PER_SECOND: Unit = KILOMETER.per(SECOND).named("km/s");

/// Every named velocity unit.
pub const UNITS: &[Unit] = &[METER_PER_SECOND, KILOMETER_PER_SECOND];
