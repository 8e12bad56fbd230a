use snafu::Snafu;

/// An error produced when a value is constructed from out-of-range inputs
/// or accessed as something it is not.
///
/// These are host-side errors: when one escapes a custom function it is
/// reported back to the compiler as the function's failure message rather
/// than tearing down the compilation.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
#[non_exhaustive]
pub enum ValueError {
  /// A value was accessed as a type it does not have.
  #[snafu(display("Expected {expected}, got {actual}"))]
  WrongType {
    expected: &'static str,
    actual: &'static str,
  },

  /// Sass list indexes are one-based; zero never refers to an element.
  #[snafu(display("List index may not be 0"))]
  IndexZero,

  /// A list index pointed outside the list in either direction.
  #[snafu(display("Invalid index {index} for a list with {length} elements"))]
  IndexOutOfRange { index: i64, length: usize },

  /// An alpha channel outside the range zero to one.
  #[snafu(display("Alpha channel {alpha} must be between 0 and 1"))]
  InvalidAlpha { alpha: f64 },

  /// Units are non-empty identifiers.
  #[snafu(display("Unit may not be empty"))]
  EmptyUnit,

  /// A list with more than one element cannot leave its separator
  /// undecided.
  #[snafu(display("A list with more than one element must have an explicit separator"))]
  UndecidedSeparator,

  /// A calculation was built with an argument count its name does not
  /// allow.
  #[snafu(display("{name}() requires {expected}, got {actual}"))]
  CalculationArity {
    name: &'static str,
    expected: &'static str,
    actual: usize,
  },
}
