use std::{
  fmt::{self, Debug, Formatter},
  rc::Rc,
};

use crate::Value;

/// A callback the compiler can invoke during a compilation.
///
/// Implemented for any matching closure. An `Err` is reported back to the
/// compiler as the function's failure message and surfaces as a Sass error
/// at the call site in the stylesheet; it does not abort the compilation
/// machinery itself.
pub trait CustomFunction {
  fn invoke(&self, arguments: Vec<Value>) -> Result<Value, Box<dyn std::error::Error>>;
}

impl<F> CustomFunction for F
where
  F: Fn(Vec<Value>) -> Result<Value, Box<dyn std::error::Error>>,
{
  fn invoke(&self, arguments: Vec<Value>) -> Result<Value, Box<dyn std::error::Error>> {
    self(arguments)
  }
}

/// A first-class Sass function value.
#[derive(Clone)]
pub enum SassFunction {
  /// A function living in the compiler, opaque to the host. It can only
  /// be passed back within the compilation that produced it.
  Compiler { id: u32 },
  /// A function living in the host.
  Host(HostFunction),
}

impl SassFunction {
  /// Creates a host function from its Sass signature (e.g.
  /// `"invert($color, $weight: 100%)"`) and callback.
  pub fn host(signature: impl Into<String>, callback: Rc<dyn CustomFunction>) -> Self {
    Self::Host(HostFunction {
      signature: signature.into(),
      callback,
    })
  }
}

impl Debug for SassFunction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::Compiler { id } => f.debug_struct("CompilerFunction").field("id", id).finish(),
      Self::Host(host) => f
        .debug_struct("HostFunction")
        .field("signature", &host.signature)
        .finish_non_exhaustive(),
    }
  }
}

impl PartialEq for SassFunction {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::Compiler { id: a }, Self::Compiler { id: b }) => a == b,
      // Host functions are equal only when they are the same function.
      (Self::Host(a), Self::Host(b)) => Rc::ptr_eq(&a.callback, &b.callback),
      _ => false,
    }
  }
}

/// A function defined in the host, carried inside [`SassFunction::Host`].
#[derive(Clone)]
pub struct HostFunction {
  signature: String,
  callback: Rc<dyn CustomFunction>,
}

impl HostFunction {
  pub fn signature(&self) -> &str {
    &self.signature
  }

  pub fn callback(&self) -> &Rc<dyn CustomFunction> {
    &self.callback
  }
}

/// A first-class Sass mixin value. Mixins only ever live in the compiler;
/// the host can hold and return them but not create or invoke them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SassMixin {
  id: u32,
}

impl SassMixin {
  pub fn new(id: u32) -> Self {
    Self { id }
  }

  pub fn id(&self) -> u32 {
    self.id
  }
}
