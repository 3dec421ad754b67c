//! Integration tests for radq-ffi.
//!
//! These tests verify the FFI functions work correctly from a consumer's perspective.

use approx::assert_relative_eq;
use radq_ffi::{
    radq_bb_flux, radq_bb_flux_raw, radq_ffi_version, radq_quantity_convert,
    radq_quantity_convert_value, radq_quantity_make, radq_unit_is_valid, radq_unit_name,
    radq_units_compatible, RadqQuantity, RadqUnitId, RADQ_ERR_INCOMPATIBLE_DIM, RADQ_ERR_NULL_OUT,
    RADQ_ERR_UNKNOWN_UNIT, RADQ_OK,
};
use std::ffi::CStr;

// =============================================================================
// Unit Validation Tests
// =============================================================================

#[test]
fn test_all_units_are_valid() {
    for &unit in RadqUnitId::ALL {
        assert!(radq_unit_is_valid(unit as u32), "Unit {:?} should be valid", unit);
    }
}

#[test]
fn test_gaps_between_blocks_are_invalid() {
    for raw in [0, 1, 99, 109, 199, 299, 803, 999, 10_000] {
        assert!(!radq_unit_is_valid(raw), "{} should be invalid", raw);
    }
}

#[test]
fn test_every_unit_has_a_name() {
    for &unit in RadqUnitId::ALL {
        let ptr = radq_unit_name(unit);
        assert!(!ptr.is_null());
        // SAFETY: non-null static string
        let name = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        assert_eq!(name, format!("{:?}", unit));
    }
}

#[test]
fn test_compatible_units() {
    let compatible_pairs = [
        (RadqUnitId::Nanometer, RadqUnitId::Parsec),
        (RadqUnitId::Kelvin, RadqUnitId::Millikelvin),
        (RadqUnitId::Flam, RadqUnitId::WattPerSquareMeterPerNanometer),
        (RadqUnitId::One, RadqUnitId::Percent),
        (RadqUnitId::Joule, RadqUnitId::ElectronVolt),
    ];

    for (a, b) in compatible_pairs {
        let mut result = false;
        let status = unsafe { radq_units_compatible(a, b, &mut result) };
        assert_eq!(status, RADQ_OK);
        assert!(result, "{:?} and {:?} should be compatible", a, b);
    }
}

#[test]
fn test_incompatible_units() {
    let incompatible_pairs = [
        (RadqUnitId::Meter, RadqUnitId::Second),
        (RadqUnitId::Kelvin, RadqUnitId::Nanometer),
        (RadqUnitId::Flam, RadqUnitId::Jansky),
        (RadqUnitId::Watt, RadqUnitId::Joule),
    ];

    for (a, b) in incompatible_pairs {
        let mut result = true;
        let status = unsafe { radq_units_compatible(a, b, &mut result) };
        assert_eq!(status, RADQ_OK);
        assert!(!result, "{:?} and {:?} should be incompatible", a, b);
    }
}

// =============================================================================
// Conversion Tests
// =============================================================================

#[test]
fn test_distance_to_parsec() {
    let mut km = RadqQuantity::default();
    assert_eq!(unsafe { radq_quantity_make(45.0, RadqUnitId::Kilometer, &mut km) }, RADQ_OK);

    let mut pc = RadqQuantity::default();
    let status = unsafe { radq_quantity_convert(km, RadqUnitId::Parsec, &mut pc) };
    assert_eq!(status, RADQ_OK);
    assert_eq!(pc.unit, RadqUnitId::Parsec);
    assert_relative_eq!(pc.value, 1.458_350_680_249_964_2e-12, max_relative = 1e-12);
}

#[test]
fn test_round_trip_through_every_compatible_unit() {
    let src = RadqQuantity::new(123.456, RadqUnitId::Meter);
    for &unit in RadqUnitId::ALL {
        let mut there = RadqQuantity::default();
        let status = unsafe { radq_quantity_convert(src, unit, &mut there) };
        if status != RADQ_OK {
            assert_eq!(status, RADQ_ERR_INCOMPATIBLE_DIM);
            continue;
        }
        let mut back = RadqQuantity::default();
        assert_eq!(unsafe { radq_quantity_convert(there, RadqUnitId::Meter, &mut back) }, RADQ_OK);
        assert_relative_eq!(back.value, src.value, max_relative = 1e-9);
    }
}

#[test]
fn test_convert_value_errors() {
    let mut out = 0.0;
    let status = unsafe {
        radq_quantity_convert_value(
            1.0,
            RadqUnitId::Meter as u32,
            RadqUnitId::Kelvin as u32,
            &mut out,
        )
    };
    assert_eq!(status, RADQ_ERR_INCOMPATIBLE_DIM);

    let status =
        unsafe { radq_quantity_convert_value(1.0, 5, RadqUnitId::Kelvin as u32, &mut out) };
    assert_eq!(status, RADQ_ERR_UNKNOWN_UNIT);

    let status = unsafe {
        radq_quantity_convert_value(
            1.0,
            RadqUnitId::Meter as u32,
            RadqUnitId::Meter as u32,
            core::ptr::null_mut(),
        )
    };
    assert_eq!(status, RADQ_ERR_NULL_OUT);
}

// =============================================================================
// Blackbody Tests
// =============================================================================

#[test]
fn test_bb_flux_matches_raw_form() {
    let mut out = RadqQuantity::default();
    let status = unsafe {
        radq_bb_flux(
            RadqQuantity::new(0.5, RadqUnitId::Micrometer),
            RadqQuantity::new(200.0, RadqUnitId::Percent),
            RadqQuantity::new(5_000.0, RadqUnitId::Kelvin),
            &mut out,
        )
    };
    assert_eq!(status, RADQ_OK);
    assert_eq!(out.unit, RadqUnitId::Flam);
    assert_relative_eq!(out.value, radq_bb_flux_raw(500.0, 2.0, 5_000.0), max_relative = 1e-9);
}

#[test]
fn test_bb_flux_output_converts() {
    let mut flam = RadqQuantity::default();
    let status = unsafe {
        radq_bb_flux(
            RadqQuantity::new(500.0, RadqUnitId::Nanometer),
            RadqQuantity::new(1.0, RadqUnitId::One),
            RadqQuantity::new(5_000.0, RadqUnitId::Kelvin),
            &mut flam,
        )
    };
    assert_eq!(status, RADQ_OK);

    let mut si = RadqQuantity::default();
    assert_eq!(
        unsafe { radq_quantity_convert(flam, RadqUnitId::WattPerCubicMeter, &mut si) },
        RADQ_OK
    );
    assert_relative_eq!(si.value, flam.value * 1e7, max_relative = 1e-12);

    let mut jy = RadqQuantity::default();
    assert_eq!(
        unsafe { radq_quantity_convert(flam, RadqUnitId::Jansky, &mut jy) },
        RADQ_ERR_INCOMPATIBLE_DIM
    );
}

#[test]
fn test_bb_flux_rejects_dimensional_amplitude() {
    let mut out = RadqQuantity::default();
    let status = unsafe {
        radq_bb_flux(
            RadqQuantity::new(500.0, RadqUnitId::Nanometer),
            RadqQuantity::new(1.0, RadqUnitId::Meter),
            RadqQuantity::new(5_000.0, RadqUnitId::Kelvin),
            &mut out,
        )
    };
    assert_eq!(status, RADQ_ERR_INCOMPATIBLE_DIM);
}

#[test]
fn test_bb_flux_null_out() {
    let status = unsafe {
        radq_bb_flux(
            RadqQuantity::new(500.0, RadqUnitId::Nanometer),
            RadqQuantity::new(1.0, RadqUnitId::One),
            RadqQuantity::new(5_000.0, RadqUnitId::Kelvin),
            core::ptr::null_mut(),
        )
    };
    assert_eq!(status, RADQ_ERR_NULL_OUT);
}

#[test]
fn test_bb_flux_raw_boundaries_do_not_fail() {
    assert_eq!(radq_bb_flux_raw(500.0, 1.0, 0.0), 0.0);
    assert!(radq_bb_flux_raw(0.0, 1.0, 5_000.0).is_nan());
}

#[test]
fn test_version() {
    assert_eq!(radq_ffi_version(), 1);
}
