//! Blackbody spectral flux density.
//!
//! One numeric kernel, two entry points:
//!
//! - [`BlackbodyEvaluator::flux_raw`] takes bare numbers in pre-agreed units (wavelength in nm, dimensionless
//!   amplitude, temperature in K) and returns flam as a bare number.
//! - [`BlackbodyEvaluator::flux`] takes [`Quantity`] arguments, converts them into the raw form's units, delegates,
//!   and tags the result with [`FLAM`].
//!
//! ```rust
//! use radq::blackbody::{bb_flux, bb_flux_raw};
//! use radq::flux::FLAM;
//! use radq::length::METER;
//! use radq::temperature::KELVIN;
//! use radq::Quantity;
//!
//! let raw = bb_flux_raw(500.0, 1.0, 5_000.0);
//! let typed = bb_flux(500e-9 * METER, Quantity::dimensionless(1.0), 5_000.0 * KELVIN).unwrap();
//! assert!((typed.convert(FLAM).unwrap() - raw).abs() <= 1e-9 * raw);
//! ```

use radq_core::constants::{BOLTZMANN, PLANCK, SPEED_OF_LIGHT};
use radq_core::flux::FLAM;
use radq_core::length::NANOMETER;
use radq_core::temperature::KELVIN;
use radq_core::unitless::ONE;
use radq_core::{Dimension, Quantity, QuantityResult, Unit};
use serde::{Deserialize, Serialize};

/// `2 h c² / λ⁵` measures spectral flux density per unit wavelength.
const PLANCK_LAW_SIGNATURE: Dimension = Dimension::ACTION
    .mul(Dimension::VELOCITY.powi(2))
    .div(Dimension::LENGTH.powi(5));

const _: () = assert!(PLANCK_LAW_SIGNATURE.equals(&FLAM.dimension()));

/// Metres per nanometre in the legacy exponent.
const NM_TO_M: f64 = 1e-9;

/// Rescales `J s m² s⁻² / nm⁵` into flam.
const LEGACY_FLAM_SCALE: f64 = 1e38;

/// The three constants the kernel needs, as coherent SI magnitudes.
///
/// [`PhysicalConstants::EXACT_SI`] is derived from [`radq_core::constants`] at compile time, so the raw and the
/// quantity-aware paths read the same numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// `c` in m/s.
    pub speed_of_light: f64,
    /// `h` in J s.
    pub planck: f64,
    /// `k_B` in J/K.
    pub boltzmann: f64,
}

impl PhysicalConstants {
    /// Exact 2019 SI values.
    pub const EXACT_SI: Self = Self {
        speed_of_light: SPEED_OF_LIGHT.si_value(),
        planck: PLANCK.si_value(),
        boltzmann: BOLTZMANN.si_value(),
    };

    fn speed_of_light_q(&self) -> Quantity {
        Quantity::new(self.speed_of_light, Unit::coherent(Dimension::VELOCITY))
    }

    fn planck_q(&self) -> Quantity {
        Quantity::new(self.planck, Unit::coherent(Dimension::ACTION))
    }

    fn boltzmann_q(&self) -> Quantity {
        Quantity::new(self.boltzmann, Unit::coherent(Dimension::ENTROPY))
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::EXACT_SI
    }
}

/// How the raw kernel evaluates Planck's law.
///
/// Both conventions produce flam and agree to within `1e-9` relative: the legacy expression's `λ_nm⁵` and `1e38`
/// together equal the SI expression times the `W m⁻³ → flam` factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluxConvention {
    /// `amp 2 h c² / (λ_nm⁵ (exp(h c / (λ_nm 1e-9 k_B T)) - 1)) 1e38`, evaluated in exactly that order.
    #[default]
    Legacy,
    /// Planck's law written with [`Quantity`] algebra in coherent SI and converted to flam.
    UnitAlgebra,
}

/// Blackbody evaluator with injected constants.
///
/// Evaluators are plain `Copy` values; any number of threads may share one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlackbodyEvaluator {
    constants: PhysicalConstants,
    convention: FluxConvention,
}

impl BlackbodyEvaluator {
    /// The default evaluator: legacy convention, exact SI constants.
    pub const LEGACY: Self = Self::new(PhysicalConstants::EXACT_SI, FluxConvention::Legacy);

    /// Creates an evaluator.
    pub const fn new(constants: PhysicalConstants, convention: FluxConvention) -> Self {
        Self {
            constants,
            convention,
        }
    }

    /// Exact SI constants with the given convention.
    pub const fn with_convention(convention: FluxConvention) -> Self {
        Self::new(PhysicalConstants::EXACT_SI, convention)
    }

    /// Constants in use.
    pub const fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Convention in use.
    pub const fn convention(&self) -> FluxConvention {
        self.convention
    }

    /// Spectral flux density in flam for a wavelength in nm, a dimensionless amplitude and a temperature in K.
    ///
    /// Never fails. A temperature or wavelength small enough to overflow the exponential yields `0.0`; a wavelength
    /// of exactly zero yields NaN. Negative inputs are evaluated as written.
    pub fn flux_raw(&self, lam_nm: f64, amp: f64, teff_k: f64) -> f64 {
        log::trace!("bb_flux_raw lam_nm={} amp={} teff_k={}", lam_nm, amp, teff_k);
        match self.convention {
            FluxConvention::Legacy => self.legacy_kernel(lam_nm, amp, teff_k),
            // Signatures are fixed by PLANCK_LAW_SIGNATURE; conversion cannot fail here.
            FluxConvention::UnitAlgebra => {
                self.unit_algebra_kernel(lam_nm, amp, teff_k).unwrap_or(f64::NAN)
            }
        }
    }

    /// Quantity-aware form of [`BlackbodyEvaluator::flux_raw`].
    ///
    /// `lam` is converted to nanometres, `amp` to a bare number and `teff` to kelvin; the result is tagged with
    /// [`FLAM`] and converts to any spectral flux density per wavelength unit.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`](radq_core::QuantityError::DimensionMismatch) when `lam` is not a
    /// length, `amp` is not dimensionless or `teff` is not a temperature. The error is returned as produced by the
    /// conversion.
    pub fn flux(&self, lam: Quantity, amp: Quantity, teff: Quantity) -> QuantityResult<Quantity> {
        let raw_inputs = || -> QuantityResult<(f64, f64, f64)> {
            Ok((lam.convert(NANOMETER)?, amp.convert(ONE)?, teff.convert(KELVIN)?))
        };

        let (lam_nm, amp_value, teff_k) = raw_inputs().inspect_err(|e| {
            log::debug!("bb_flux rejected inputs ({}, {}, {}): {}", lam, amp, teff, e);
        })?;

        Ok(Quantity::new(self.flux_raw(lam_nm, amp_value, teff_k), FLAM))
    }

    /// Evaluates the raw form at every wavelength of `lam_nm`.
    pub fn spectrum(&self, lam_nm: &[f64], amp: f64, teff_k: f64) -> Vec<f64> {
        lam_nm.iter().map(|&lam| self.flux_raw(lam, amp, teff_k)).collect()
    }

    fn legacy_kernel(&self, lam_nm: f64, amp: f64, teff_k: f64) -> f64 {
        let PhysicalConstants {
            speed_of_light: c,
            planck: h,
            boltzmann: kb,
        } = self.constants;

        // Must match libm `pow` bit for bit; `powi` does not.
        let value = amp * 2.0 * h * c.powf(2.0)
            / (lam_nm.powf(5.0) * ((h * c / (lam_nm * NM_TO_M * kb * teff_k)).exp() - 1.0));
        value * LEGACY_FLAM_SCALE
    }

    fn unit_algebra_kernel(&self, lam_nm: f64, amp: f64, teff_k: f64) -> QuantityResult<f64> {
        let c = self.constants.speed_of_light_q();
        let h = self.constants.planck_q();
        let kb = self.constants.boltzmann_q();
        let lam = Quantity::new(lam_nm, NANOMETER).to_si();
        let teff = Quantity::new(teff_k, KELVIN).to_si();

        let x = (h * c) / (lam * kb * teff);
        let radiance = amp * 2.0 * h * c.powi(2) / lam.powi(5) / x.exp_m1()?;
        radiance.convert(FLAM)
    }
}

/// Raw form with [`BlackbodyEvaluator::LEGACY`].
///
/// ```rust
/// let f = radq::blackbody::bb_flux_raw(500.0, 1.0, 5_000.0);
/// assert!((f - 1_210_719.059_039_813).abs() < 1e-3);
/// ```
pub fn bb_flux_raw(lam_nm: f64, amp: f64, teff_k: f64) -> f64 {
    BlackbodyEvaluator::LEGACY.flux_raw(lam_nm, amp, teff_k)
}

/// Quantity-aware form with [`BlackbodyEvaluator::LEGACY`].
///
/// # Errors
///
/// See [`BlackbodyEvaluator::flux`].
pub fn bb_flux(lam: Quantity, amp: Quantity, teff: Quantity) -> QuantityResult<Quantity> {
    BlackbodyEvaluator::LEGACY.flux(lam, amp, teff)
}
