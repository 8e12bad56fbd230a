use std::{cell::Cell, rc::Rc};

use strum::Display;

use crate::{Value, ValueError};

/// How a Sass list separates its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Default)]
#[strum(serialize_all = "lowercase")]
pub enum ListSeparator {
  #[default]
  Comma,
  Space,
  Slash,
  /// A list that has not committed to a separator. Only representable
  /// while the list has at most one element.
  Undecided,
}

/// A Sass list.
#[derive(Debug, Clone, PartialEq)]
pub struct SassList {
  contents: Vec<Value>,
  separator: ListSeparator,
  brackets: bool,
}

impl SassList {
  /// Creates a list.
  ///
  /// A list with more than one element must have a decided separator.
  pub fn new(
    contents: Vec<Value>,
    separator: ListSeparator,
    brackets: bool,
  ) -> Result<Self, ValueError> {
    if separator == ListSeparator::Undecided && contents.len() > 1 {
      return Err(ValueError::UndecidedSeparator);
    }
    Ok(Self {
      contents,
      separator,
      brackets,
    })
  }

  pub fn contents(&self) -> &[Value] {
    &self.contents
  }

  pub fn separator(&self) -> ListSeparator {
    self.separator
  }

  pub fn has_brackets(&self) -> bool {
    self.brackets
  }

  pub fn len(&self) -> usize {
    self.contents.len()
  }

  pub fn is_empty(&self) -> bool {
    self.contents.is_empty()
  }
}

/// The value of `$args` in a function or mixin taking variable arguments.
///
/// Behaves as a list of the positional arguments, with an attached ordered
/// keyword table. Reading the keywords is observable: the compiler is told
/// which argument lists had their keywords inspected so it can flag unused
/// keyword arguments in the stylesheet.
#[derive(Debug, Clone)]
pub struct ArgumentList {
  id: u32,
  contents: Vec<Value>,
  keywords: Vec<(String, Value)>,
  separator: ListSeparator,
  keywords_accessed: Rc<Cell<bool>>,
}

impl ArgumentList {
  /// Creates an argument list.
  ///
  /// `id` correlates keyword-access reporting with a compiler-sent list;
  /// host-constructed lists use id zero, which carries no tracking.
  pub fn new(
    id: u32,
    contents: Vec<Value>,
    keywords: Vec<(String, Value)>,
    separator: ListSeparator,
  ) -> Result<Self, ValueError> {
    if separator == ListSeparator::Undecided && contents.len() > 1 {
      return Err(ValueError::UndecidedSeparator);
    }
    Ok(Self {
      id,
      contents,
      keywords,
      separator,
      keywords_accessed: Rc::new(Cell::new(false)),
    })
  }

  pub fn id(&self) -> u32 {
    self.id
  }

  pub fn contents(&self) -> &[Value] {
    &self.contents
  }

  pub fn separator(&self) -> ListSeparator {
    self.separator
  }

  /// The keyword arguments, in the order they were given.
  ///
  /// Calling this marks the keywords as accessed, on this list and every
  /// clone sharing its tracking state.
  pub fn keywords(&self) -> &[(String, Value)] {
    self.keywords_accessed.set(true);
    &self.keywords
  }

  /// The keyword arguments without marking them accessed.
  ///
  /// For protocol bridges that serialize the list; stylesheet-observable
  /// reads must go through [`ArgumentList::keywords`].
  pub fn keywords_untracked(&self) -> &[(String, Value)] {
    &self.keywords
  }

  /// Looks up one keyword argument. Counts as accessing the keywords.
  pub fn keyword(&self, name: &str) -> Option<&Value> {
    self
      .keywords()
      .iter()
      .find_map(|(k, v)| (k == name).then_some(v))
  }

  /// Whether [`ArgumentList::keywords`] has been called on this list or a
  /// clone of it.
  pub fn keywords_accessed(&self) -> bool {
    self.keywords_accessed.get()
  }

  pub fn len(&self) -> usize {
    self.contents.len()
  }

  pub fn is_empty(&self) -> bool {
    self.contents.is_empty()
  }
}

impl PartialEq for ArgumentList {
  /// Argument lists compare as lists: contents and separator. The id and
  /// the keyword-access flag are protocol bookkeeping, not value.
  fn eq(&self, other: &Self) -> bool {
    self.contents == other.contents
      && self.separator == other.separator
      && {
        // Keyword tables compare like maps: order-independent.
        self.keywords.len() == other.keywords.len()
          && self.keywords.iter().all(|(k, v)| {
            other
              .keywords
              .iter()
              .any(|(ok, ov)| k == ok && v == ov)
          })
      }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /* ---------------- SassList ---------------- */

  #[test]
  fn undecided_separator_needs_at_most_one_element() {
    assert!(SassList::new(vec![], ListSeparator::Undecided, false).is_ok());
    assert!(SassList::new(vec![Value::Null], ListSeparator::Undecided, false).is_ok());
    assert_eq!(
      SassList::new(
        vec![Value::Null, Value::Null],
        ListSeparator::Undecided,
        false
      )
      .unwrap_err(),
      ValueError::UndecidedSeparator
    );
  }

  /* ---------------- ArgumentList ---------------- */

  fn args_with_keyword() -> ArgumentList {
    ArgumentList::new(
      7,
      vec![Value::Bool(true)],
      vec![("color".into(), Value::Null)],
      ListSeparator::Comma,
    )
    .unwrap()
  }

  #[test]
  fn keyword_access_is_observable() {
    let args = args_with_keyword();
    assert!(!args.keywords_accessed());
    assert_eq!(args.keywords().len(), 1);
    assert!(args.keywords_accessed());
  }

  #[test]
  fn clones_share_the_access_flag() {
    let args = args_with_keyword();
    let clone = args.clone();
    assert!(clone.keyword("color").is_some());
    assert!(args.keywords_accessed());
  }

  #[test]
  fn missing_keyword_lookup_still_counts_as_access() {
    let args = args_with_keyword();
    assert!(args.keyword("nope").is_none());
    assert!(args.keywords_accessed());
  }

  #[test]
  fn equality_ignores_id_and_access_state() {
    let a = args_with_keyword();
    let b = ArgumentList::new(
      99,
      vec![Value::Bool(true)],
      vec![("color".into(), Value::Null)],
      ListSeparator::Comma,
    )
    .unwrap();
    a.keywords();
    assert_eq!(a, b);
  }
}
