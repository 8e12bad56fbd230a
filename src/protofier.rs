use sasshost_value::{
  ArgumentList, Calculation, CalculationName, CalculationOperation, CalculationOperator,
  CalculationValue, ColorSpace, ListSeparator, SassColor, SassFunction, SassList, SassMap,
  SassMixin, SassNumber, SassString, Value,
};

use crate::{error::Error, proto, registry::FunctionRegistry};

/// Converts host values to and from their wire representation for one
/// function call.
///
/// The converter is stateful in exactly two ways: it remembers every
/// argument list it decodes so keyword access can be reported back on the
/// response, and it registers first-class host functions it encodes so the
/// compiler can call them back by id.
pub(crate) struct Protofier<'a> {
  functions: &'a mut FunctionRegistry,
  argument_lists: Vec<ArgumentList>,
}

impl<'a> Protofier<'a> {
  pub fn new(functions: &'a mut FunctionRegistry) -> Self {
    Self {
      functions,
      argument_lists: Vec::new(),
    }
  }

  /// Ids of decoded argument lists whose keywords the host function read.
  /// Id zero marks a list the compiler does not track and is never
  /// reported.
  pub fn accessed_argument_lists(&self) -> Vec<u32> {
    self
      .argument_lists
      .iter()
      .filter(|list| list.id() != 0 && list.keywords_accessed())
      .map(ArgumentList::id)
      .collect()
  }

  /* ---------------- host -> wire ---------------- */

  pub fn to_proto(&mut self, value: Value) -> proto::Value {
    use proto::value::Value as Wire;

    let value = match value {
      Value::String(string) => Wire::String(proto::value::String {
        text: string.text().to_owned(),
        quoted: string.is_quoted(),
      }),
      Value::Number(number) => Wire::Number(number_to_proto(&number)),
      Value::Color(color) => {
        let [channel1, channel2, channel3] = color.channels();
        Wire::Color(proto::value::Color {
          space: color.space().to_string(),
          channel1,
          channel2,
          channel3,
          alpha: color.alpha(),
        })
      }
      Value::List(list) => Wire::List(proto::value::List {
        separator: separator_to_proto(list.separator()) as i32,
        has_brackets: list.has_brackets(),
        contents: list
          .contents()
          .iter()
          .map(|item| self.to_proto(item.clone()))
          .collect(),
      }),
      Value::ArgumentList(list) => Wire::ArgumentList(proto::value::ArgumentList {
        id: list.id(),
        separator: separator_to_proto(list.separator()) as i32,
        contents: list
          .contents()
          .iter()
          .map(|item| self.to_proto(item.clone()))
          .collect(),
        keywords: list
          .keywords_untracked()
          .iter()
          .map(|(name, value)| (name.clone(), self.to_proto(value.clone())))
          .collect(),
      }),
      Value::Map(map) => Wire::Map(proto::value::Map {
        entries: map
          .entries()
          .iter()
          .map(|(key, value)| proto::value::map::Entry {
            key: Some(self.to_proto(key.clone())),
            value: Some(self.to_proto(value.clone())),
          })
          .collect(),
      }),
      Value::Function(SassFunction::Compiler { id }) => {
        Wire::CompilerFunction(proto::value::CompilerFunction { id })
      }
      Value::Function(SassFunction::Host(function)) => {
        let id = self.functions.register_value_function(&function);
        Wire::HostFunction(proto::value::HostFunction {
          id,
          signature: function.signature().to_owned(),
        })
      }
      Value::Mixin(mixin) => Wire::CompilerMixin(proto::value::CompilerMixin { id: mixin.id() }),
      Value::Calculation(calculation) => Wire::Calculation(calculation_to_proto(&calculation)),
      Value::Bool(true) => Wire::Singleton(proto::SingletonValue::True as i32),
      Value::Bool(false) => Wire::Singleton(proto::SingletonValue::False as i32),
      Value::Null => Wire::Singleton(proto::SingletonValue::Null as i32),
    };
    proto::Value { value: Some(value) }
  }

  /* ---------------- wire -> host ---------------- */

  pub fn from_proto(&mut self, value: proto::Value) -> Result<Value, Error> {
    use proto::value::Value as Wire;

    let value = value
      .value
      .ok_or_else(|| Error::compiler("Value.value is not set"))?;
    Ok(match value {
      Wire::String(string) => {
        if string.quoted {
          Value::String(SassString::new(string.text))
        } else {
          Value::String(SassString::unquoted(string.text))
        }
      }
      Wire::Number(number) => Value::Number(number_from_proto(number)?),
      Wire::Color(color) => {
        let space = color
          .space
          .parse::<ColorSpace>()
          .map_err(|_| Error::compiler(format!("Unknown color space \"{}\"", color.space)))?;
        Value::Color(
          SassColor::new(space, color.channel1, color.channel2, color.channel3, color.alpha)
            .map_err(value_error)?,
        )
      }
      Wire::List(list) => {
        let separator = separator_from_proto(list.separator)?;
        let contents = self.values_from_proto(list.contents)?;
        Value::List(SassList::new(contents, separator, list.has_brackets).map_err(value_error)?)
      }
      Wire::ArgumentList(list) => {
        let separator = separator_from_proto(list.separator)?;
        let contents = self.values_from_proto(list.contents)?;
        let mut keywords = Vec::with_capacity(list.keywords.len());
        for (name, value) in list.keywords {
          keywords.push((name, self.from_proto(value)?));
        }
        // Wire keyword maps are unordered; sort for a stable view.
        keywords.sort_by(|(a, _), (b, _)| a.cmp(b));
        let arguments =
          ArgumentList::new(list.id, contents, keywords, separator).map_err(value_error)?;
        self.argument_lists.push(arguments.clone());
        Value::ArgumentList(arguments)
      }
      Wire::Map(map) => {
        let mut entries = SassMap::new();
        for entry in map.entries {
          let key = entry
            .key
            .ok_or_else(|| Error::compiler("Value.Map.Entry.key is not set"))?;
          let value = entry
            .value
            .ok_or_else(|| Error::compiler("Value.Map.Entry.value is not set"))?;
          entries.insert(self.from_proto(key)?, self.from_proto(value)?);
        }
        Value::Map(entries)
      }
      Wire::Singleton(singleton) => match proto::SingletonValue::try_from(singleton) {
        Ok(proto::SingletonValue::True) => Value::Bool(true),
        Ok(proto::SingletonValue::False) => Value::Bool(false),
        Ok(proto::SingletonValue::Null) => Value::Null,
        Err(_) => {
          return Err(Error::compiler(format!("Unknown SingletonValue {singleton}")));
        }
      },
      Wire::CompilerFunction(function) => {
        Value::Function(SassFunction::Compiler { id: function.id })
      }
      Wire::HostFunction(_) => {
        return Err(Error::compiler(
          "The compiler may not send Value.host_function",
        ));
      }
      Wire::CompilerMixin(mixin) => Value::Mixin(SassMixin::new(mixin.id)),
      Wire::Calculation(calculation) => Value::Calculation(calculation_from_proto(calculation)?),
    })
  }

  fn values_from_proto(&mut self, values: Vec<proto::Value>) -> Result<Vec<Value>, Error> {
    values.into_iter().map(|v| self.from_proto(v)).collect()
  }
}

fn value_error(error: sasshost_value::ValueError) -> Error {
  Error::compiler(error.to_string())
}

fn number_to_proto(number: &SassNumber) -> proto::value::Number {
  proto::value::Number {
    value: number.value(),
    numerators: number.numerator_units().to_vec(),
    denominators: number.denominator_units().to_vec(),
  }
}

fn number_from_proto(number: proto::value::Number) -> Result<SassNumber, Error> {
  SassNumber::with_units(number.value, number.numerators, number.denominators)
    .map_err(value_error)
}

fn separator_to_proto(separator: ListSeparator) -> proto::ListSeparator {
  match separator {
    ListSeparator::Comma => proto::ListSeparator::Comma,
    ListSeparator::Space => proto::ListSeparator::Space,
    ListSeparator::Slash => proto::ListSeparator::Slash,
    ListSeparator::Undecided => proto::ListSeparator::Undecided,
  }
}

fn separator_from_proto(separator: i32) -> Result<ListSeparator, Error> {
  match proto::ListSeparator::try_from(separator) {
    Ok(proto::ListSeparator::Comma) => Ok(ListSeparator::Comma),
    Ok(proto::ListSeparator::Space) => Ok(ListSeparator::Space),
    Ok(proto::ListSeparator::Slash) => Ok(ListSeparator::Slash),
    Ok(proto::ListSeparator::Undecided) => Ok(ListSeparator::Undecided),
    Err(_) => Err(Error::compiler(format!("Unknown ListSeparator {separator}"))),
  }
}

fn calculation_to_proto(calculation: &Calculation) -> proto::value::Calculation {
  proto::value::Calculation {
    name: calculation.name().to_string(),
    arguments: calculation
      .arguments()
      .iter()
      .map(calculation_value_to_proto)
      .collect(),
  }
}

fn calculation_value_to_proto(
  value: &CalculationValue,
) -> proto::value::calculation::CalculationValue {
  use proto::value::calculation::calculation_value::Value as Wire;

  let value = match value {
    CalculationValue::Number(number) => Wire::Number(number_to_proto(number)),
    CalculationValue::String(string) => Wire::String(string.clone()),
    CalculationValue::Interpolation(text) => Wire::Interpolation(text.clone()),
    CalculationValue::Operation(operation) => {
      Wire::Operation(Box::new(proto::value::calculation::CalculationOperation {
        operator: operator_to_proto(operation.operator) as i32,
        left: Some(Box::new(calculation_value_to_proto(&operation.left))),
        right: Some(Box::new(calculation_value_to_proto(&operation.right))),
      }))
    }
    CalculationValue::Calculation(calculation) => {
      Wire::Calculation(calculation_to_proto(calculation))
    }
  };
  proto::value::calculation::CalculationValue { value: Some(value) }
}

fn calculation_from_proto(
  calculation: proto::value::Calculation,
) -> Result<Calculation, Error> {
  let name = calculation
    .name
    .parse::<CalculationName>()
    .map_err(|_| Error::compiler(format!("Unknown Calculation.name \"{}\"", calculation.name)))?;
  let arguments = calculation
    .arguments
    .into_iter()
    .map(calculation_value_from_proto)
    .collect::<Result<Vec<_>, _>>()?;
  Calculation::new(name, arguments).map_err(value_error)
}

fn calculation_value_from_proto(
  value: proto::value::calculation::CalculationValue,
) -> Result<CalculationValue, Error> {
  use proto::value::calculation::calculation_value::Value as Wire;

  let value = value
    .value
    .ok_or_else(|| Error::compiler("Value.Calculation.CalculationValue.value is not set"))?;
  Ok(match value {
    Wire::Number(number) => CalculationValue::Number(number_from_proto(number)?),
    Wire::String(string) => CalculationValue::String(string),
    Wire::Interpolation(text) => CalculationValue::Interpolation(text),
    Wire::Operation(operation) => {
      let operator = operator_from_proto(operation.operator)?;
      let left = operation
        .left
        .ok_or_else(|| Error::compiler("CalculationOperation.left is not set"))?;
      let right = operation
        .right
        .ok_or_else(|| Error::compiler("CalculationOperation.right is not set"))?;
      CalculationValue::Operation(Box::new(CalculationOperation {
        operator,
        left: calculation_value_from_proto(*left)?,
        right: calculation_value_from_proto(*right)?,
      }))
    }
    Wire::Calculation(calculation) => {
      CalculationValue::Calculation(calculation_from_proto(calculation)?)
    }
  })
}

fn operator_to_proto(operator: CalculationOperator) -> proto::CalculationOperator {
  match operator {
    CalculationOperator::Plus => proto::CalculationOperator::Plus,
    CalculationOperator::Minus => proto::CalculationOperator::Minus,
    CalculationOperator::Times => proto::CalculationOperator::Times,
    CalculationOperator::Divide => proto::CalculationOperator::Divide,
  }
}

fn operator_from_proto(operator: i32) -> Result<CalculationOperator, Error> {
  match proto::CalculationOperator::try_from(operator) {
    Ok(proto::CalculationOperator::Plus) => Ok(CalculationOperator::Plus),
    Ok(proto::CalculationOperator::Minus) => Ok(CalculationOperator::Minus),
    Ok(proto::CalculationOperator::Times) => Ok(CalculationOperator::Times),
    Ok(proto::CalculationOperator::Divide) => Ok(CalculationOperator::Divide),
    Err(_) => Err(Error::compiler(format!(
      "Unknown CalculationOperator {operator}"
    ))),
  }
}

#[cfg(test)]
mod tests {
  use std::rc::Rc;

  use rstest::rstest;
  use sasshost_value::CustomFunction;

  use super::*;

  fn noop() -> Rc<dyn CustomFunction> {
    Rc::new(|_: Vec<Value>| -> Result<Value, Box<dyn std::error::Error>> { Ok(Value::Null) })
  }

  fn round_trip(value: Value) -> Value {
    let mut functions = FunctionRegistry::new();
    let mut protofier = Protofier::new(&mut functions);
    let wire = protofier.to_proto(value);
    let mut functions = FunctionRegistry::new();
    let mut protofier = Protofier::new(&mut functions);
    protofier.from_proto(wire).unwrap()
  }

  fn decode(value: proto::value::Value) -> Result<Value, Error> {
    let mut functions = FunctionRegistry::new();
    let mut protofier = Protofier::new(&mut functions);
    protofier.from_proto(proto::Value { value: Some(value) })
  }

  /* ---------------- round trips ---------------- */

  #[rstest]
  #[case(Value::Null)]
  #[case(Value::Bool(true))]
  #[case(Value::Bool(false))]
  #[case(Value::String(SassString::new("quoted")))]
  #[case(Value::String(SassString::unquoted("")))]
  #[case(Value::Number(SassNumber::new(42.5)))]
  #[case(Value::Number(SassNumber::with_units(3.0, vec!["px".into()], vec!["s".into()]).unwrap()))]
  #[case(Value::Color(SassColor::rgb(12.0, 34.0, 56.0)))]
  #[case(Value::Color(SassColor::new(ColorSpace::Oklch, 0.7, 0.1, f64::NAN, 0.5).unwrap()))]
  #[case(Value::Function(SassFunction::Compiler { id: 9 }))]
  #[case(Value::Mixin(SassMixin::new(4)))]
  fn scalars_round_trip(#[case] value: Value) {
    assert_eq!(round_trip(value.clone()), value);
  }

  #[test]
  fn lists_round_trip() {
    let list = Value::List(
      SassList::new(
        vec![
          Value::Bool(true),
          Value::String(SassString::unquoted("a")),
        ],
        ListSeparator::Slash,
        true,
      )
      .unwrap(),
    );
    assert_eq!(round_trip(list.clone()), list);
  }

  #[test]
  fn maps_round_trip() {
    let map: SassMap = [
      (
        Value::String(SassString::new("a")),
        Value::Number(SassNumber::new(1.0)),
      ),
      (Value::Bool(false), Value::Null),
    ]
    .into_iter()
    .collect();
    let map = Value::Map(map);
    assert_eq!(round_trip(map.clone()), map);
  }

  #[test]
  fn argument_lists_round_trip() {
    let args = Value::ArgumentList(
      ArgumentList::new(
        3,
        vec![Value::Bool(true)],
        vec![("width".into(), Value::Number(SassNumber::new(1.0)))],
        ListSeparator::Comma,
      )
      .unwrap(),
    );
    assert_eq!(round_trip(args.clone()), args);
  }

  #[test]
  fn calculations_round_trip() {
    let calc = Value::Calculation(
      Calculation::new(
        CalculationName::Clamp,
        vec![
          CalculationValue::Number(SassNumber::with_unit(1.0, "px").unwrap()),
          CalculationValue::Operation(Box::new(CalculationOperation {
            operator: CalculationOperator::Plus,
            left: CalculationValue::String("var(--x)".into()),
            right: CalculationValue::Number(SassNumber::new(2.0)),
          })),
          CalculationValue::Calculation(Calculation::calc(CalculationValue::Interpolation(
            "3vw".into(),
          ))),
        ],
      )
      .unwrap(),
    );
    assert_eq!(round_trip(calc.clone()), calc);
  }

  /* ---------------- decode validation ---------------- */

  #[test]
  fn host_function_from_the_compiler_is_rejected() {
    let err = decode(proto::value::Value::HostFunction(
      proto::value::HostFunction {
        id: 1,
        signature: "f()".into(),
      },
    ))
    .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Compiler caused error: The compiler may not send Value.host_function"
    );
  }

  #[test]
  fn unknown_color_space_is_rejected() {
    let err = decode(proto::value::Value::Color(proto::value::Color {
      space: "cmyk".into(),
      channel1: 0.0,
      channel2: 0.0,
      channel3: 0.0,
      alpha: 1.0,
    }))
    .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Compiler caused error: Unknown color space \"cmyk\""
    );
  }

  #[test]
  fn undecided_separator_with_two_elements_is_rejected() {
    let err = decode(proto::value::Value::List(proto::value::List {
      separator: proto::ListSeparator::Undecided as i32,
      has_brackets: false,
      contents: vec![
        proto::Value {
          value: Some(proto::value::Value::Singleton(
            proto::SingletonValue::Null as i32,
          )),
        };
        2
      ],
    }))
    .unwrap_err();
    assert!(err.to_string().contains("explicit separator"));
  }

  #[test]
  fn map_entries_require_key_and_value() {
    let err = decode(proto::value::Value::Map(proto::value::Map {
      entries: vec![proto::value::map::Entry {
        key: None,
        value: Some(proto::Value {
          value: Some(proto::value::Value::Singleton(
            proto::SingletonValue::Null as i32,
          )),
        }),
      }],
    }))
    .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Compiler caused error: Value.Map.Entry.key is not set"
    );
  }

  #[test]
  fn unknown_singleton_is_rejected() {
    let err = decode(proto::value::Value::Singleton(7)).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Compiler caused error: Unknown SingletonValue 7"
    );
  }

  #[rstest]
  #[case("calc", 2)]
  #[case("calc", 0)]
  #[case("clamp", 0)]
  #[case("clamp", 4)]
  #[case("min", 0)]
  #[case("max", 0)]
  fn calculation_arity_is_validated(#[case] name: &str, #[case] arguments: usize) {
    let arg = proto::value::calculation::CalculationValue {
      value: Some(proto::value::calculation::calculation_value::Value::Number(
        proto::value::Number {
          value: 1.0,
          numerators: vec![],
          denominators: vec![],
        },
      )),
    };
    let err = decode(proto::value::Value::Calculation(proto::value::Calculation {
      name: name.into(),
      arguments: vec![arg; arguments],
    }))
    .unwrap_err();
    assert!(err.to_string().starts_with("Compiler caused error:"));
  }

  #[test]
  fn unknown_calculation_name_is_rejected() {
    let err = decode(proto::value::Value::Calculation(proto::value::Calculation {
      name: "hypot".into(),
      arguments: vec![],
    }))
    .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Compiler caused error: Unknown Calculation.name \"hypot\""
    );
  }

  /* ---------------- statefulness ---------------- */

  fn wire_argument_list(id: u32) -> proto::Value {
    proto::Value {
      value: Some(proto::value::Value::ArgumentList(
        proto::value::ArgumentList {
          id,
          separator: proto::ListSeparator::Comma as i32,
          contents: vec![],
          keywords: [(
            "width".to_owned(),
            proto::Value {
              value: Some(proto::value::Value::Singleton(
                proto::SingletonValue::Null as i32,
              )),
            },
          )]
          .into_iter()
          .collect(),
        },
      )),
    }
  }

  #[test]
  fn keyword_access_is_reported_per_argument_list() {
    let mut functions = FunctionRegistry::new();
    let mut protofier = Protofier::new(&mut functions);
    let accessed = protofier.from_proto(wire_argument_list(1)).unwrap();
    let untouched = protofier.from_proto(wire_argument_list(2)).unwrap();
    let Value::ArgumentList(accessed) = accessed else {
      unreachable!()
    };
    accessed.keywords();
    let _ = untouched;
    assert_eq!(protofier.accessed_argument_lists(), vec![1]);
  }

  /// Id zero marks an argument list the compiler does not track; reading
  /// its keywords is never reported back.
  #[test]
  fn id_zero_argument_lists_are_not_reported() {
    let mut functions = FunctionRegistry::new();
    let mut protofier = Protofier::new(&mut functions);
    let untracked = protofier.from_proto(wire_argument_list(0)).unwrap();
    let tracked = protofier.from_proto(wire_argument_list(4)).unwrap();
    let Value::ArgumentList(untracked) = untracked else {
      unreachable!()
    };
    let Value::ArgumentList(tracked) = tracked else {
      unreachable!()
    };
    untracked.keywords();
    tracked.keywords();
    assert!(untracked.keywords_accessed());
    assert_eq!(protofier.accessed_argument_lists(), vec![4]);
  }

  #[test]
  fn host_functions_register_on_encode() {
    let mut functions = FunctionRegistry::new();
    let mut protofier = Protofier::new(&mut functions);
    let function = Value::Function(SassFunction::host("greet($name)", noop()));
    let wire = protofier.to_proto(function);
    let Some(proto::value::Value::HostFunction(host)) = wire.value else {
      panic!("expected a host function");
    };
    assert_eq!(host.signature, "greet($name)");
  }
}
