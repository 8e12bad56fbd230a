/// A Sass string, quoted or unquoted.
///
/// The empty quoted string and the empty unquoted string are distinct
/// values and stay distinct across the protocol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SassString {
  text: String,
  quoted: bool,
}

impl SassString {
  /// Creates a quoted string.
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      quoted: true,
    }
  }

  /// Creates an unquoted string, such as an identifier.
  pub fn unquoted(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      quoted: false,
    }
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn is_quoted(&self) -> bool {
    self.quoted
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn quoting_is_part_of_the_value() {
    assert_ne!(SassString::new(""), SassString::unquoted(""));
    assert_eq!(SassString::new("a"), SassString::new("a"));
  }
}
