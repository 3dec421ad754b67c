//! C-compatible FFI bindings for `radq` quantity conversion and blackbody flux evaluation.
//!
//! # Quick Start (C/C++)
//!
//! Include the generated header and link against the library:
//!
//! ```c
//! #include "radq_ffi.h"
//!
//! RadqQuantity lam, amp, teff, flux;
//! radq_quantity_make(5000.0, RADQ_UNIT_ID_ANGSTROM, &lam);
//! radq_quantity_make(1.0, RADQ_UNIT_ID_ONE, &amp);
//! radq_quantity_make(5000.0, RADQ_UNIT_ID_KELVIN, &teff);
//!
//! if (radq_bb_flux(lam, amp, teff, &flux) == RADQ_OK) {
//!     // flux.unit == RADQ_UNIT_ID_FLAM
//! }
//! ```
//!
//! # Quick Start (Rust)
//!
//! ```rust
//! use radq_ffi::{RadqQuantity, RadqUnitId};
//!
//! let ffi_qty = RadqQuantity::new(1_000.0, RadqUnitId::Meter);
//! let q: radq::Quantity = ffi_qty.into();
//! assert!((q.convert(radq::length::KILOMETER).unwrap() - 1.0).abs() < 1e-12);
//! ```
//!
//! # ABI Stability
//!
//! [`RadqUnitId`] discriminants, the [`RadqQuantity`] layout, status code values and the signatures of exported
//! functions are part of the ABI contract. New unit IDs and functions may be added.
//!
//! # Error Handling
//!
//! - [`RADQ_OK`] (0): Success
//! - [`RADQ_ERR_UNKNOWN_UNIT`] (-1): Invalid unit ID
//! - [`RADQ_ERR_INCOMPATIBLE_DIM`] (-2): Dimension mismatch
//! - [`RADQ_ERR_NULL_OUT`] (-3): Null output pointer
//!
//! # Thread Safety
//!
//! All functions are thread-safe. The library contains no global mutable state.

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

mod ffi;
pub mod registry;
mod types;

pub use ffi::{
    radq_bb_flux, radq_bb_flux_raw, radq_ffi_version, radq_quantity_convert,
    radq_quantity_convert_value, radq_quantity_make, radq_unit_is_valid, radq_unit_name,
    radq_units_compatible,
};

pub use types::{
    RadqQuantity, RadqUnitId, RADQ_ERR_INCOMPATIBLE_DIM, RADQ_ERR_NULL_OUT, RADQ_ERR_UNKNOWN_UNIT,
    RADQ_OK,
};
