//! Macros for defining catalog units.

/// Defines a named catalog unit as a `pub const`.
///
/// ```rust
/// use radq_core::{define_unit, Dimension};
///
/// define_unit!(
///     /// Furlong (`201.168 m`).
///     FURLONG, "fur", Dimension::LENGTH, 201.168
/// );
/// assert_eq!(FURLONG.symbol(), "fur");
/// ```
#[macro_export]
macro_rules! define_unit {
    ($(#[$meta:meta])* $name:ident, $sym:literal, $dim:expr, $ratio:expr $(,)?) => {
        $(#[$meta])*
        pub const $name: $crate::Unit = $crate::Unit::new($sym, $dim, $ratio);
    };
}

/// Defines a unit as a power-of-ten (or any other) multiple of an existing one.
///
/// The generated doc comment states the multiple, e.g. `1 km = 1e3 m`.
#[macro_export]
macro_rules! scaled_unit {
    ($name:ident, $sym:literal, $base:expr, $factor:expr $(,)?) => {
        #[doc = concat!("`1 ", $sym, " = ", stringify!($factor), " ", stringify!($base), "`.")]
        pub const $name: $crate::Unit = $base.scaled($factor).named($sym);
    };
}
