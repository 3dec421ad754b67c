//! ABI-stable types shared with C.

use core::ffi::c_char;
use radq::{
    energy, flux, length, mass, power, temperature, time, unitless, velocity, Quantity, Unit,
};

// =============================================================================
// Status Codes
// =============================================================================

/// Success.
pub const RADQ_OK: i32 = 0;
/// The unit ID is not recognized.
pub const RADQ_ERR_UNKNOWN_UNIT: i32 = -1;
/// The units involved measure different dimensions.
pub const RADQ_ERR_INCOMPATIBLE_DIM: i32 = -2;
/// A required output pointer was null.
pub const RADQ_ERR_NULL_OUT: i32 = -3;

// =============================================================================
// Unit IDs
// =============================================================================

/// Unit identifier for FFI.
///
/// Discriminants are grouped by dimension in blocks of 100 and are part of the ABI contract. The enum is written
/// out in full so `cbindgen` sees it.
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RadqUnitId {
    /// Metre.
    Meter = 100,
    /// Kilometre.
    Kilometer = 101,
    /// Centimetre.
    Centimeter = 102,
    /// Micrometre.
    Micrometer = 103,
    /// Nanometre.
    Nanometer = 104,
    /// Ångström.
    Angstrom = 105,
    /// Astronomical unit.
    AstronomicalUnit = 106,
    /// Light-year.
    LightYear = 107,
    /// Parsec.
    Parsec = 108,
    /// Second.
    Second = 200,
    /// Day (86 400 s).
    Day = 201,
    /// Julian year.
    JulianYear = 202,
    /// Kilogram.
    Kilogram = 300,
    /// Solar mass.
    SolarMass = 301,
    /// Kelvin.
    Kelvin = 400,
    /// Millikelvin.
    Millikelvin = 401,
    /// Joule.
    Joule = 500,
    /// Erg.
    Erg = 501,
    /// Electronvolt.
    ElectronVolt = 502,
    /// Watt.
    Watt = 600,
    /// Solar luminosity.
    SolarLuminosity = 601,
    /// Metre per second.
    MeterPerSecond = 700,
    /// Kilometre per second.
    KilometerPerSecond = 701,
    /// W m^-3.
    WattPerCubicMeter = 800,
    /// W m^-2 nm^-1.
    WattPerSquareMeterPerNanometer = 801,
    /// erg s^-1 cm^-2 Å^-1.
    Flam = 802,
    /// Jansky.
    Jansky = 810,
    /// Dimensionless one.
    One = 900,
    /// Percent.
    Percent = 901,
}

/// Maps every variant onto its catalog unit and name in one table.
macro_rules! unit_table {
    ($(($variant:ident, $unit:expr, $name:literal)),* $(,)?) => {
        impl RadqUnitId {
            /// Every exposed unit, in discriminant order.
            pub const ALL: &'static [RadqUnitId] = &[$(RadqUnitId::$variant),*];

            /// The catalog unit behind this ID.
            pub const fn unit(self) -> Unit {
                match self {
                    $(RadqUnitId::$variant => $unit,)*
                }
            }

            /// Human-readable name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(RadqUnitId::$variant => $name,)*
                }
            }

            /// Name as a static NUL-terminated C string.
            pub(crate) const fn name_cstr(self) -> *const c_char {
                match self {
                    $(RadqUnitId::$variant => concat!($name, "\0").as_ptr() as *const c_char,)*
                }
            }
        }
    };
}

unit_table! {
    (Meter, length::METER, "Meter"),
    (Kilometer, length::KILOMETER, "Kilometer"),
    (Centimeter, length::CENTIMETER, "Centimeter"),
    (Micrometer, length::MICROMETER, "Micrometer"),
    (Nanometer, length::NANOMETER, "Nanometer"),
    (Angstrom, length::ANGSTROM, "Angstrom"),
    (AstronomicalUnit, length::ASTRONOMICAL_UNIT, "AstronomicalUnit"),
    (LightYear, length::LIGHT_YEAR, "LightYear"),
    (Parsec, length::PARSEC, "Parsec"),
    (Second, time::SECOND, "Second"),
    (Day, time::DAY, "Day"),
    (JulianYear, time::JULIAN_YEAR, "JulianYear"),
    (Kilogram, mass::KILOGRAM, "Kilogram"),
    (SolarMass, mass::SOLAR_MASS, "SolarMass"),
    (Kelvin, temperature::KELVIN, "Kelvin"),
    (Millikelvin, temperature::MILLIKELVIN, "Millikelvin"),
    (Joule, energy::JOULE, "Joule"),
    (Erg, energy::ERG, "Erg"),
    (ElectronVolt, energy::ELECTRON_VOLT, "ElectronVolt"),
    (Watt, power::WATT, "Watt"),
    (SolarLuminosity, power::SOLAR_LUMINOSITY, "SolarLuminosity"),
    (MeterPerSecond, velocity::METER_PER_SECOND, "MeterPerSecond"),
    (KilometerPerSecond, velocity::KILOMETER_PER_SECOND, "KilometerPerSecond"),
    (WattPerCubicMeter, flux::WATT_PER_CUBIC_METER, "WattPerCubicMeter"),
    (
        WattPerSquareMeterPerNanometer,
        flux::WATT_PER_SQUARE_METER_PER_NANOMETER,
        "WattPerSquareMeterPerNanometer"
    ),
    (Flam, flux::FLAM, "Flam"),
    (Jansky, flux::JANSKY, "Jansky"),
    (One, unitless::ONE, "One"),
    (Percent, unitless::PERCENT, "Percent"),
}

impl RadqUnitId {
    /// Parses a raw discriminant.
    pub const fn from_u32(value: u32) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i] as u32 == value {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }

    /// Finds the ID of a catalog unit, if it is exposed.
    pub fn from_unit(unit: Unit) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.unit() == unit)
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A value tagged with a unit ID.
///
/// Layout: `f64` followed by a `u32` unit ID, padded to 16 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadqQuantity {
    /// Magnitude expressed in `unit`.
    pub value: f64,
    /// Unit of `value`.
    pub unit: RadqUnitId,
}

impl RadqQuantity {
    /// Creates a quantity.
    #[inline]
    pub const fn new(value: f64, unit: RadqUnitId) -> Self {
        Self { value, unit }
    }
}

impl Default for RadqQuantity {
    fn default() -> Self {
        Self::new(0.0, RadqUnitId::One)
    }
}

impl From<RadqQuantity> for Quantity {
    fn from(q: RadqQuantity) -> Self {
        Quantity::new(q.value, q.unit.unit())
    }
}

impl TryFrom<Quantity> for RadqQuantity {
    type Error = i32;

    /// Fails with [`RADQ_ERR_UNKNOWN_UNIT`] when the quantity's unit has no ID.
    fn try_from(q: Quantity) -> Result<Self, Self::Error> {
        let unit = RadqUnitId::from_unit(q.unit()).ok_or(RADQ_ERR_UNKNOWN_UNIT)?;
        Ok(Self::new(q.value(), unit))
    }
}
