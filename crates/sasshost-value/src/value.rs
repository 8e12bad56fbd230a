use crate::{
  ArgumentList, Calculation, ListSeparator, SassColor, SassFunction, SassList, SassMap, SassMixin,
  SassNumber, SassString, ValueError,
  error::{IndexOutOfRangeSnafu, WrongTypeSnafu},
};

/// A SassScript value.
///
/// Equality is Sass equality: numbers compare fuzzily, maps compare
/// regardless of entry order, and bookkeeping state (argument-list ids,
/// keyword-access flags) never takes part.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  String(SassString),
  Number(SassNumber),
  Color(SassColor),
  List(SassList),
  ArgumentList(ArgumentList),
  Map(SassMap),
  Function(SassFunction),
  Mixin(SassMixin),
  Calculation(Calculation),
  Bool(bool),
  Null,
}

impl Value {
  /// The name of this value's type, as Sass spells it in diagnostics.
  pub fn type_name(&self) -> &'static str {
    match self {
      Self::String(_) => "a string",
      Self::Number(_) => "a number",
      Self::Color(_) => "a color",
      Self::List(_) => "a list",
      Self::ArgumentList(_) => "an argument list",
      Self::Map(_) => "a map",
      Self::Function(_) => "a function reference",
      Self::Mixin(_) => "a mixin reference",
      Self::Calculation(_) => "a calculation",
      Self::Bool(true) => "true",
      Self::Bool(false) => "false",
      Self::Null => "null",
    }
  }

  /// Everything except `false` and `null` counts as true in Sass.
  pub fn is_truthy(&self) -> bool {
    !matches!(self, Self::Bool(false) | Self::Null)
  }

  pub fn assert_string(&self) -> Result<&SassString, ValueError> {
    match self {
      Self::String(s) => Ok(s),
      other => WrongTypeSnafu {
        expected: "a string",
        actual: other.type_name(),
      }
      .fail(),
    }
  }

  pub fn assert_number(&self) -> Result<&SassNumber, ValueError> {
    match self {
      Self::Number(n) => Ok(n),
      other => WrongTypeSnafu {
        expected: "a number",
        actual: other.type_name(),
      }
      .fail(),
    }
  }

  pub fn assert_color(&self) -> Result<&SassColor, ValueError> {
    match self {
      Self::Color(c) => Ok(c),
      other => WrongTypeSnafu {
        expected: "a color",
        actual: other.type_name(),
      }
      .fail(),
    }
  }

  /// Returns this value as a map.
  ///
  /// An empty list is indistinguishable from an empty map in Sass, so it
  /// converts too. The map is returned by value; entries are cloned.
  pub fn assert_map(&self) -> Result<SassMap, ValueError> {
    match self {
      Self::Map(m) => Ok(m.clone()),
      Self::List(l) if l.is_empty() => Ok(SassMap::new()),
      other => WrongTypeSnafu {
        expected: "a map",
        actual: other.type_name(),
      }
      .fail(),
    }
  }

  pub fn assert_function(&self) -> Result<&SassFunction, ValueError> {
    match self {
      Self::Function(f) => Ok(f),
      other => WrongTypeSnafu {
        expected: "a function reference",
        actual: other.type_name(),
      }
      .fail(),
    }
  }

  pub fn assert_calculation(&self) -> Result<&Calculation, ValueError> {
    match self {
      Self::Calculation(c) => Ok(c),
      other => WrongTypeSnafu {
        expected: "a calculation",
        actual: other.type_name(),
      }
      .fail(),
    }
  }

  pub fn assert_boolean(&self) -> Result<bool, ValueError> {
    match self {
      Self::Bool(b) => Ok(*b),
      other => WrongTypeSnafu {
        expected: "a boolean",
        actual: other.type_name(),
      }
      .fail(),
    }
  }

  /// Views this value as a list, the way Sass list functions do: lists
  /// are themselves, every other value is a single-element list.
  pub fn as_list(&self) -> &[Value] {
    match self {
      Self::List(l) => l.contents(),
      Self::ArgumentList(a) => a.contents(),
      _ => std::slice::from_ref(self),
    }
  }

  /// The separator this value uses when viewed as a list.
  pub fn separator(&self) -> ListSeparator {
    match self {
      Self::List(l) => l.separator(),
      Self::ArgumentList(a) => a.separator(),
      _ => ListSeparator::Undecided,
    }
  }

  /// Converts a one-based, possibly negative Sass index into an index
  /// into [`Value::as_list`].
  ///
  /// Sass indexes lists from one; negative indexes count from the end.
  /// Zero is never a valid index.
  pub fn sass_index_to_list_index(&self, index: i64) -> Result<usize, ValueError> {
    let length = self.as_list().len();
    if index == 0 {
      return Err(ValueError::IndexZero);
    }
    let resolved = if index < 0 {
      length as i64 + index
    } else {
      index - 1
    };
    if resolved < 0 || resolved >= length as i64 {
      return IndexOutOfRangeSnafu { index, length }.fail();
    }
    Ok(resolved as usize)
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

impl From<SassString> for Value {
  fn from(value: SassString) -> Self {
    Self::String(value)
  }
}

impl From<SassNumber> for Value {
  fn from(value: SassNumber) -> Self {
    Self::Number(value)
  }
}

impl From<SassColor> for Value {
  fn from(value: SassColor) -> Self {
    Self::Color(value)
  }
}

impl From<SassList> for Value {
  fn from(value: SassList) -> Self {
    Self::List(value)
  }
}

impl From<SassMap> for Value {
  fn from(value: SassMap) -> Self {
    Self::Map(value)
  }
}

impl From<Calculation> for Value {
  fn from(value: Calculation) -> Self {
    Self::Calculation(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /* ---------------- truthiness ---------------- */

  #[test]
  fn only_false_and_null_are_falsey() {
    assert!(!Value::Bool(false).is_truthy());
    assert!(!Value::Null.is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(SassNumber::new(0.0)).is_truthy());
    assert!(Value::String(SassString::new("")).is_truthy());
  }

  /* ---------------- assertions ---------------- */

  #[test]
  fn assert_string_reports_actual_type() {
    let err = Value::Number(SassNumber::new(1.0))
      .assert_string()
      .unwrap_err();
    assert_eq!(err.to_string(), "Expected a string, got a number");
  }

  #[test]
  fn empty_list_asserts_as_map() {
    let empty = Value::List(SassList::new(vec![], ListSeparator::Comma, false).unwrap());
    assert!(empty.assert_map().unwrap().is_empty());
  }

  /* ---------------- list views ---------------- */

  #[test]
  fn scalar_values_are_single_element_lists() {
    let v = Value::Bool(true);
    assert_eq!(v.as_list().len(), 1);
    assert_eq!(v.separator(), ListSeparator::Undecided);
  }

  #[test]
  fn sass_index_is_one_based() {
    let list = Value::List(
      SassList::new(
        vec![Value::Null, Value::Bool(true), Value::Bool(false)],
        ListSeparator::Space,
        false,
      )
      .unwrap(),
    );
    assert_eq!(list.sass_index_to_list_index(1).unwrap(), 0);
    assert_eq!(list.sass_index_to_list_index(3).unwrap(), 2);
    assert_eq!(list.sass_index_to_list_index(-1).unwrap(), 2);
    assert_eq!(list.sass_index_to_list_index(-3).unwrap(), 0);
  }

  #[test]
  fn sass_index_zero_is_rejected() {
    let err = Value::Null.sass_index_to_list_index(0).unwrap_err();
    assert_eq!(err.to_string(), "List index may not be 0");
  }

  #[test]
  fn sass_index_out_of_range_is_rejected() {
    let err = Value::Null.sass_index_to_list_index(2).unwrap_err();
    assert_eq!(err.to_string(), "Invalid index 2 for a list with 1 elements");
  }
}
