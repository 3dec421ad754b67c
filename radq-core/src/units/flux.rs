//! Spectral flux density units.
//!
//! Two distinct signatures live here and must not be confused:
//!
//! - **per unit wavelength** (`W m^-2 m^-1`, signature `M L^-1 T^-3`): [`WATT_PER_CUBIC_METER`] is coherent,
//!   [`FLAM`] (`erg s^-1 cm^-2 Å^-1`) is `1e7` of it.
//! - **per unit frequency** (`W m^-2 Hz^-1`, signature `M T^-2`): [`JANSKY`] and [`FNU`].
//!
//! ```rust
//! use radq_core::flux::{FLAM, WATT_PER_CUBIC_METER};
//!
//! let f = 1.0 * FLAM;
//! assert_eq!(f.convert(WATT_PER_CUBIC_METER).unwrap(), 1e7);
//! ```

use crate::{define_unit, Dimension, Unit};

define_unit!(
    /// Watt per square metre per metre of wavelength (coherent SI).
    WATT_PER_CUBIC_METER, "W m^-3", Dimension::SPECTRAL_FLUX_DENSITY_WAVELENGTH, 1.0
);

define_unit!(
    /// Watt per square metre per nanometre of wavelength.
    WATT_PER_SQUARE_METER_PER_NANOMETER,
    "W m^-2 nm^-1",
    Dimension::SPECTRAL_FLUX_DENSITY_WAVELENGTH,
    1e9
);

define_unit!(
    /// `erg s^-1 cm^-2 Å^-1`: `1e-7 W / 1e-4 m² / 1e-10 m = 1e7 W m^-3`.
    ///
    /// The ratio is written as the exact power of ten rather than composed from `ERG`, `CENTIMETER` and `ANGSTROM`,
    /// which would accumulate three roundings.
    FLAM, "flam", Dimension::SPECTRAL_FLUX_DENSITY_WAVELENGTH, 1e7
);

define_unit!(
    /// Jansky (`1e-26 W m^-2 Hz^-1`).
    JANSKY, "Jy", Dimension::SPECTRAL_FLUX_DENSITY_FREQUENCY, 1e-26
);

define_unit!(
    /// `erg s^-1 cm^-2 Hz^-1` (`1e-3 W m^-2 Hz^-1`).
    FNU, "fnu", Dimension::SPECTRAL_FLUX_DENSITY_FREQUENCY, 1e-3
);

/// Every named spectral flux density unit.
pub const UNITS: &[Unit] = &[
    WATT_PER_CUBIC_METER,
    WATT_PER_SQUARE_METER_PER_NANOMETER,
    FLAM,
    JANSKY,
    FNU,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::ERG;
    use crate::length::{ANGSTROM, CENTIMETER};
    use crate::time::SECOND;
    use crate::QuantityError;
    use approx::assert_relative_eq;

    #[test]
    fn flam_matches_cgs_composition() {
        let composed = ERG / SECOND / CENTIMETER.powi(2) / ANGSTROM;
        assert_eq!(composed.dimension(), FLAM.dimension());
        assert_relative_eq!(composed.ratio(), FLAM.ratio(), max_relative = 1e-12);
    }

    #[test]
    fn fnu_to_jansky() {
        assert_relative_eq!((1.0 * FNU).convert(JANSKY).unwrap(), 1e23, max_relative = 1e-12);
    }

    #[test]
    fn wavelength_and_frequency_densities_are_incompatible() {
        assert!(matches!(
            (1.0 * FLAM).convert(JANSKY),
            Err(QuantityError::DimensionMismatch { .. })
        ));
    }
}
