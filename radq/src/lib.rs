//! Unit-safe blackbody flux evaluation.
//!
//! `radq` is the user-facing crate in this workspace. It re-exports the quantity system from `radq-core` and adds:
//!
//! - [`blackbody`]: the blackbody spectral flux density evaluator, callable on bare numbers or on quantities.
//! - [`filter`]: transmission curves normalized to a nanometre grid.
//! - [`config`]: `radq.toml` loading.
//!
//! # Quick start
//!
//! ```rust
//! use radq::{bb_flux, bb_flux_raw, Quantity};
//! use radq::flux::{FLAM, JANSKY};
//! use radq::length::METER;
//! use radq::temperature::KELVIN;
//!
//! let raw = bb_flux_raw(500.0, 1.0, 5_000.0);
//!
//! let typed = bb_flux(500e-9 * METER, Quantity::dimensionless(1.0), 5_000.0 * KELVIN).unwrap();
//! assert!((typed.convert(FLAM).unwrap() - raw).abs() <= 1e-9 * raw);
//!
//! // Per-wavelength flux density is not per-frequency flux density.
//! assert!(typed.convert(JANSKY).is_err());
//! ```
//!
//! Passing a temperature where a wavelength is expected is reported, not silently computed:
//!
//! ```rust
//! use radq::{bb_flux, Quantity, QuantityError};
//! use radq::temperature::KELVIN;
//!
//! let err = bb_flux(500.0 * KELVIN, Quantity::dimensionless(1.0), 5_000.0 * KELVIN).unwrap_err();
//! assert!(matches!(err, QuantityError::DimensionMismatch { .. }));
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for `Quantity` and `Dimension`.
//!
//! This crate always builds `radq-core` with `std`; configuration loading reads files. Depend on
//! `radq-core` directly for `no_std` targets.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade; install any logger to see them. The raw kernel
//! traces its inputs, rejected quantity inputs are logged at `debug`.

#![forbid(unsafe_code)]

pub use radq_core::*;

pub mod blackbody;
pub mod config;
pub mod filter;

pub use blackbody::{bb_flux, bb_flux_raw, BlackbodyEvaluator, FluxConvention, PhysicalConstants};
pub use config::{ConfigError, RadqConfig};
pub use filter::{Filter, FilterError, ResponseKind};

pub use radq_core::units::energy;
pub use radq_core::units::flux;
pub use radq_core::units::length;
pub use radq_core::units::mass;
pub use radq_core::units::power;
pub use radq_core::units::temperature;
pub use radq_core::units::time;
pub use radq_core::units::unitless;
pub use radq_core::units::velocity;
