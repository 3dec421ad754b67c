//! Core type system for dimension-checked physical quantities.
//!
//! `radq-core` provides a small runtime units model:
//!
//! - A [`Dimension`] is a vector of rational exponents over the seven SI base dimensions.
//! - A [`Unit`] is a named conversion anchor: a symbol, a signature and a ratio to coherent SI.
//! - A [`Quantity`] is an `f64` magnitude expressed in a unit.
//! - Conversion is explicit and checked: [`Quantity::convert`] and [`Quantity::to`] fail with
//!   [`QuantityError::DimensionMismatch`] when the target unit measures something else.
//!
//! Most users should depend on `radq` (the facade crate) unless they only need these primitives.
//!
//! # What this crate solves
//!
//! - Run-time separation of dimensions, including derived ones (`kg m^-1 s^-3`) and rational exponents (`m^1/2`).
//! - A single definition of the physical constants, tagged with their natural units.
//! - A catalog of named units (nanometre, parsec, kelvin, flam, …) resolvable by symbol.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Affine scales (Celsius, Fahrenheit).
//! - Symbolic simplification of composed unit names; composed units print as SI base expressions.
//!
//! # Quick start
//!
//! ```rust
//! use radq_core::length::{METER, NANOMETER};
//! use radq_core::temperature::KELVIN;
//!
//! let lam = 500e-9 * METER;
//! assert!((lam.convert(NANOMETER).unwrap() - 500.0).abs() < 1e-9);
//! assert!(lam.convert(KELVIN).is_err());
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build without `std`; float functions missing from `core` then come from `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: `Serialize`/`Deserialize` for [`Quantity`] as `{"value": .., "unit": ".."}` (implies `std`).
//!
//! # Panics and errors
//!
//! [`QuantityError::DimensionMismatch`] is the only error. The `+` and `-` operators panic on mismatched
//! signatures because that is a programming error; [`Quantity::checked_add`] and [`Quantity::checked_sub`] report
//! it instead. NaN and infinities propagate per IEEE-754.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod macros;
mod math;
mod quantity;
mod unit;

pub mod constants;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{BaseDimension, Dimension, Exponent, BASE_COUNT};
pub use error::{QuantityError, QuantityResult};
pub use quantity::Quantity;
pub use unit::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Unit catalog (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub use units::energy;
pub use units::flux;
pub use units::length;
pub use units::mass;
pub use units::power;
pub use units::temperature;
pub use units::time;
pub use units::unitless;
pub use units::velocity;
