use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use crate::{ValueError, fuzzy_equals};

/// A Sass number: a double with an optional compound unit.
///
/// Units are carried verbatim; the host never simplifies or converts them.
/// `1px/1s` has numerator `px` and denominator `s` until the compiler says
/// otherwise.
#[derive(Debug, Clone)]
pub struct SassNumber {
  value: f64,
  numerator_units: Vec<String>,
  denominator_units: Vec<String>,
}

impl SassNumber {
  /// Creates a unitless number.
  pub fn new(value: f64) -> Self {
    Self {
      value,
      numerator_units: Vec::new(),
      denominator_units: Vec::new(),
    }
  }

  /// Creates a number with a single numerator unit.
  pub fn with_unit(value: f64, unit: impl Into<String>) -> Result<Self, ValueError> {
    Self::with_units(value, vec![unit.into()], Vec::new())
  }

  /// Creates a number with arbitrary numerator and denominator units.
  pub fn with_units(
    value: f64,
    numerator_units: Vec<String>,
    denominator_units: Vec<String>,
  ) -> Result<Self, ValueError> {
    if numerator_units.iter().chain(&denominator_units).any(String::is_empty) {
      return Err(ValueError::EmptyUnit);
    }
    Ok(Self {
      value,
      numerator_units,
      denominator_units,
    })
  }

  pub fn value(&self) -> f64 {
    self.value
  }

  pub fn numerator_units(&self) -> &[String] {
    &self.numerator_units
  }

  pub fn denominator_units(&self) -> &[String] {
    &self.denominator_units
  }

  pub fn is_unitless(&self) -> bool {
    self.numerator_units.is_empty() && self.denominator_units.is_empty()
  }

  /// Whether the value is an integer up to Sass's comparison fuzz.
  pub fn is_int(&self) -> bool {
    fuzzy_equals(self.value, self.value.round())
  }

  /// The units as Sass writes them in diagnostics, e.g. `px`, `px*em/s`.
  pub fn unit_string(&self) -> String {
    if self.is_unitless() {
      return String::new();
    }
    let numerators = self.numerator_units.iter().join("*");
    if self.denominator_units.is_empty() {
      numerators
    } else {
      format!("{numerators}/{}", self.denominator_units.iter().join("*"))
    }
  }
}

impl Display for SassNumber {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}{}", self.value, self.unit_string())
  }
}

impl PartialEq for SassNumber {
  /// Sass number equality: fuzzy on the value, exact on the units.
  fn eq(&self, other: &Self) -> bool {
    fuzzy_equals(self.value, other.value)
      && self.numerator_units == other.numerator_units
      && self.denominator_units == other.denominator_units
  }
}
