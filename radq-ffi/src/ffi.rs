//! Extern "C" API for FFI consumers.
//!
//! # Safety
//!
//! All functions in this module:
//! - Never panic across FFI boundaries (all panics are caught and converted to error codes)
//! - Validate all output pointers before use
//! - Return status codes to indicate success or failure, except the infallible raw flux evaluation
//!
//! # Status Codes
//!
//! - `RADQ_OK` (0): Success
//! - `RADQ_ERR_UNKNOWN_UNIT` (-1): Invalid or unrecognized unit ID
//! - `RADQ_ERR_INCOMPATIBLE_DIM` (-2): Units have different dimensions
//! - `RADQ_ERR_NULL_OUT` (-3): Required output pointer was null

use crate::registry;
use crate::types::{RadqQuantity, RadqUnitId, RADQ_ERR_NULL_OUT, RADQ_ERR_UNKNOWN_UNIT, RADQ_OK};
use core::ffi::c_char;
use radq::Quantity;

// =============================================================================
// Helper macro to catch panics
// =============================================================================

/// Catches any panic and returns `$default` instead of unwinding across FFI.
macro_rules! catch_panic {
    ($default:expr, $body:expr) => {{
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(result) => result,
            Err(_) => $default,
        }
    }};
}

// =============================================================================
// Unit Validation / Info Functions
// =============================================================================

/// Checks if a raw discriminant is a known unit ID.
///
/// Takes the discriminant as `u32` so callers can validate values before treating them as `RadqUnitId`.
#[no_mangle]
pub extern "C" fn radq_unit_is_valid(unit: u32) -> bool {
    catch_panic!(false, registry::lookup(unit).is_some())
}

/// Checks if two units are compatible (same dimension).
///
/// # Returns
///
/// * `RADQ_OK` on success
/// * `RADQ_ERR_NULL_OUT` if `out` is null
///
/// # Safety
///
/// The caller must ensure that `out` points to valid, writable memory for a `bool`,
/// or is null (in which case an error is returned).
#[no_mangle]
pub unsafe extern "C" fn radq_units_compatible(
    a: RadqUnitId,
    b: RadqUnitId,
    out: *mut bool,
) -> i32 {
    catch_panic!(RADQ_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return RADQ_ERR_NULL_OUT;
        }

        // SAFETY: We checked that `out` is not null
        unsafe { *out = registry::compatible(a, b) };
        RADQ_OK
    })
}

/// Gets the name of a unit as a static NUL-terminated C string.
///
/// The caller must not free or modify the returned string.
#[no_mangle]
pub extern "C" fn radq_unit_name(unit: RadqUnitId) -> *const c_char {
    catch_panic!(core::ptr::null(), unit.name_cstr())
}

// =============================================================================
// Quantity Construction and Conversion Functions
// =============================================================================

/// Creates a new quantity with the given value and unit.
///
/// # Returns
///
/// * `RADQ_OK` on success
/// * `RADQ_ERR_NULL_OUT` if `out` is null
///
/// # Safety
///
/// The caller must ensure that `out` points to valid, writable memory for a `RadqQuantity`,
/// or is null (in which case an error is returned).
#[no_mangle]
pub unsafe extern "C" fn radq_quantity_make(
    value: f64,
    unit: RadqUnitId,
    out: *mut RadqQuantity,
) -> i32 {
    catch_panic!(RADQ_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return RADQ_ERR_NULL_OUT;
        }

        // SAFETY: We checked that `out` is not null
        unsafe {
            *out = RadqQuantity::new(value, unit);
        }
        RADQ_OK
    })
}

/// Converts a quantity to a different unit.
///
/// # Returns
///
/// * `RADQ_OK` on success
/// * `RADQ_ERR_NULL_OUT` if `out` is null
/// * `RADQ_ERR_INCOMPATIBLE_DIM` if units have different dimensions
///
/// # Safety
///
/// The caller must ensure that `out` points to valid, writable memory for a `RadqQuantity`,
/// or is null (in which case an error is returned).
#[no_mangle]
pub unsafe extern "C" fn radq_quantity_convert(
    src: RadqQuantity,
    dst_unit: RadqUnitId,
    out: *mut RadqQuantity,
) -> i32 {
    catch_panic!(RADQ_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return RADQ_ERR_NULL_OUT;
        }

        match registry::convert_value(src.value, src.unit, dst_unit) {
            Ok(converted_value) => {
                // SAFETY: We checked that `out` is not null
                unsafe {
                    *out = RadqQuantity::new(converted_value, dst_unit);
                }
                RADQ_OK
            }
            Err(code) => code,
        }
    })
}

/// Converts a bare value between two units given as raw discriminants.
///
/// # Returns
///
/// * `RADQ_OK` on success
/// * `RADQ_ERR_NULL_OUT` if `out_value` is null
/// * `RADQ_ERR_UNKNOWN_UNIT` if either discriminant is not a unit ID
/// * `RADQ_ERR_INCOMPATIBLE_DIM` if units have different dimensions
///
/// # Safety
///
/// The caller must ensure that `out_value` points to valid, writable memory for an `f64`,
/// or is null (in which case an error is returned).
#[no_mangle]
pub unsafe extern "C" fn radq_quantity_convert_value(
    value: f64,
    src_unit: u32,
    dst_unit: u32,
    out_value: *mut f64,
) -> i32 {
    catch_panic!(RADQ_ERR_UNKNOWN_UNIT, {
        if out_value.is_null() {
            return RADQ_ERR_NULL_OUT;
        }

        match registry::convert_raw(value, src_unit, dst_unit) {
            Ok(converted) => {
                // SAFETY: We checked that `out_value` is not null
                unsafe {
                    *out_value = converted;
                }
                RADQ_OK
            }
            Err(code) => code,
        }
    })
}

// =============================================================================
// Blackbody Functions
// =============================================================================

/// Blackbody spectral flux density in flam for a wavelength in nm, a dimensionless amplitude and a temperature
/// in K, using the legacy convention.
///
/// Never fails; floating-point special values propagate. Returns NaN if evaluation panics.
#[no_mangle]
pub extern "C" fn radq_bb_flux_raw(lam_nm: f64, amp: f64, teff_k: f64) -> f64 {
    catch_panic!(f64::NAN, radq::bb_flux_raw(lam_nm, amp, teff_k))
}

/// Quantity-aware blackbody flux. The result is written in `RadqUnitId::Flam`.
///
/// # Returns
///
/// * `RADQ_OK` on success
/// * `RADQ_ERR_NULL_OUT` if `out` is null
/// * `RADQ_ERR_INCOMPATIBLE_DIM` if `lam` is not a length, `amp` is not dimensionless or `teff` is not a
///   temperature
///
/// # Safety
///
/// The caller must ensure that `out` points to valid, writable memory for a `RadqQuantity`,
/// or is null (in which case an error is returned).
#[no_mangle]
pub unsafe extern "C" fn radq_bb_flux(
    lam: RadqQuantity,
    amp: RadqQuantity,
    teff: RadqQuantity,
    out: *mut RadqQuantity,
) -> i32 {
    catch_panic!(RADQ_ERR_UNKNOWN_UNIT, {
        if out.is_null() {
            return RADQ_ERR_NULL_OUT;
        }

        let flux = radq::bb_flux(Quantity::from(lam), Quantity::from(amp), Quantity::from(teff))
            .map_err(registry::status)
            .and_then(RadqQuantity::try_from);

        match flux {
            Ok(q) => {
                // SAFETY: We checked that `out` is not null
                unsafe {
                    *out = q;
                }
                RADQ_OK
            }
            Err(code) => code,
        }
    })
}

// =============================================================================
// Version Info
// =============================================================================

/// Returns the FFI ABI version.
///
/// Incremented when breaking changes are made to the ABI.
#[no_mangle]
pub extern "C" fn radq_ffi_version() -> u32 {
    1
}
