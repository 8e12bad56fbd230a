use strum::{Display, EnumString};

use crate::{SassNumber, ValueError, error::CalculationAritySnafu};

/// The calculation functions Sass represents as first-class values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CalculationName {
  Calc,
  Clamp,
  Min,
  Max,
}

/// An operator inside a calculation expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CalculationOperator {
  #[strum(serialize = "+")]
  Plus,
  #[strum(serialize = "-")]
  Minus,
  #[strum(serialize = "*")]
  Times,
  #[strum(serialize = "/")]
  Divide,
}

/// One argument position inside a calculation's preserved expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationValue {
  Number(SassNumber),
  /// An unquoted string, such as `var(--x)`.
  String(String),
  /// An unquoted string produced by interpolation.
  Interpolation(String),
  Operation(Box<CalculationOperation>),
  Calculation(Calculation),
}

/// A binary operation inside a calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationOperation {
  pub operator: CalculationOperator,
  pub left: CalculationValue,
  pub right: CalculationValue,
}

/// A Sass calculation: `calc()`, `clamp()`, `min()` or `max()` with its
/// argument tree preserved rather than evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
  name: CalculationName,
  arguments: Vec<CalculationValue>,
}

impl Calculation {
  /// Creates a calculation, enforcing the argument count its name allows:
  /// `calc` takes exactly one, `clamp` one to three, `min` and `max` at
  /// least one.
  pub fn new(name: CalculationName, arguments: Vec<CalculationValue>) -> Result<Self, ValueError> {
    let ok = match name {
      CalculationName::Calc => arguments.len() == 1,
      CalculationName::Clamp => (1..=3).contains(&arguments.len()),
      CalculationName::Min | CalculationName::Max => !arguments.is_empty(),
    };
    if !ok {
      let (name, expected) = match name {
        CalculationName::Calc => ("calc", "exactly one argument"),
        CalculationName::Clamp => ("clamp", "one to three arguments"),
        CalculationName::Min => ("min", "at least one argument"),
        CalculationName::Max => ("max", "at least one argument"),
      };
      return CalculationAritySnafu {
        name,
        expected,
        actual: arguments.len(),
      }
      .fail();
    }
    Ok(Self { name, arguments })
  }

  pub fn calc(argument: CalculationValue) -> Self {
    Self {
      name: CalculationName::Calc,
      arguments: vec![argument],
    }
  }

  pub fn name(&self) -> CalculationName {
    self.name
  }

  pub fn arguments(&self) -> &[CalculationValue] {
    &self.arguments
  }
}
