use crate::Value;

/// A Sass map: key-value pairs with distinct keys, in insertion order.
///
/// Keys are full Sass values and are compared with Sass equality, which
/// rules out hashing; lookups scan. Stylesheet-visible maps are small.
#[derive(Debug, Clone, Default)]
pub struct SassMap {
  entries: Vec<(Value, Value)>,
}

impl SassMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts a pair, replacing the value of an equal existing key in
  /// place.
  pub fn insert(&mut self, key: Value, value: Value) {
    match self.entries.iter_mut().find(|(k, _)| *k == key) {
      Some((_, v)) => *v = value,
      None => self.entries.push((key, value)),
    }
  }

  pub fn get(&self, key: &Value) -> Option<&Value> {
    self
      .entries
      .iter()
      .find_map(|(k, v)| (k == key).then_some(v))
  }

  pub fn entries(&self) -> &[(Value, Value)] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl FromIterator<(Value, Value)> for SassMap {
  fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
    let mut map = Self::new();
    for (k, v) in iter {
      map.insert(k, v);
    }
    map
  }
}

impl PartialEq for SassMap {
  /// Sass map equality ignores entry order.
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len()
      && self
        .entries
        .iter()
        .all(|(k, v)| other.get(k) == Some(v))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::SassNumber;

  fn num(v: f64) -> Value {
    Value::Number(SassNumber::new(v))
  }

  #[test]
  fn insert_replaces_equal_keys_in_place() {
    let mut map = SassMap::new();
    map.insert(num(1.0), Value::Bool(true));
    map.insert(num(2.0), Value::Bool(true));
    map.insert(num(1.0), Value::Bool(false));
    assert_eq!(map.len(), 2);
    assert_eq!(map.entries()[0], (num(1.0), Value::Bool(false)));
  }

  #[test]
  fn lookup_uses_sass_equality() {
    let mut map = SassMap::new();
    map.insert(num(1.0), Value::Null);
    assert!(map.get(&num(1.0 + 1e-13)).is_some());
    assert!(map.get(&num(2.0)).is_none());
  }

  #[test]
  fn equality_ignores_insertion_order() {
    let a: SassMap = [(num(1.0), Value::Null), (num(2.0), Value::Bool(true))]
      .into_iter()
      .collect();
    let b: SassMap = [(num(2.0), Value::Bool(true)), (num(1.0), Value::Null)]
      .into_iter()
      .collect();
    assert_eq!(a, b);
  }
}
