//! The SassScript value model.
//!
//! These are the values custom host functions receive as arguments and
//! return as results. They mirror the value taxonomy of the Embedded Sass
//! protocol: strings, numbers with units, colors, (argument) lists, maps,
//! first-class functions and mixins, calculations and the three singletons.
//!
//! Values are immutable: accessors hand out references and "modifying"
//! operations build new values. Equality is Sass equality, not bitwise
//! equality; see [`Value`].

mod calculation;
mod color;
mod error;
mod function;
mod list;
mod map;
mod number;
mod string;
mod value;

pub use calculation::{
  Calculation, CalculationName, CalculationOperation, CalculationOperator, CalculationValue,
};
pub use color::{ColorSpace, SassColor};
pub use error::ValueError;
pub use function::{CustomFunction, HostFunction, SassFunction, SassMixin};
pub use list::{ArgumentList, ListSeparator, SassList};
pub use map::SassMap;
pub use number::SassNumber;
pub use string::SassString;
pub use value::Value;

/// Tolerance of Sass number comparisons.
///
/// Sass considers numbers within this distance of each other equal, which
/// keeps values stable across the double round-trip through the protocol.
pub(crate) const FUZZ_EPSILON: f64 = 1e-11;

pub(crate) fn fuzzy_equals(a: f64, b: f64) -> bool {
  if a.is_nan() && b.is_nan() {
    // Sass treats missing channels as equal to each other.
    return true;
  }
  (a - b).abs() < FUZZ_EPSILON
}
