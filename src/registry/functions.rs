use std::{
  rc::Rc,
  sync::atomic::{AtomicU32, Ordering},
};

use hashbrown::HashMap;
use sasshost_value::{CustomFunction, HostFunction};
use tracing::debug;

use crate::{
  error::Error,
  proto::{
    inbound_message::{FunctionCallResponse, function_call_response},
    outbound_message::{FunctionCallRequest, function_call_request},
  },
  protofier::Protofier,
};

/// Function ids are allocated process-wide and never recycled, so a
/// function registered for several sequential compiles keeps a stable id
/// and ids can never collide between sessions.
static NEXT_FUNCTION_ID: AtomicU32 = AtomicU32::new(0);

/// The custom functions reachable from one compilation.
///
/// Global functions (from compile options) are looked up by the simple
/// name in their signature; first-class host function values are looked up
/// by the id they were protofied with.
#[derive(Default)]
pub(crate) struct FunctionRegistry {
  by_name: HashMap<String, u32>,
  by_id: HashMap<u32, Rc<dyn CustomFunction>>,
}

impl FunctionRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a global function under the simple name of `signature`
  /// (the text before the first `(`). Returns the function's id.
  pub fn register(&mut self, signature: &str, callback: Rc<dyn CustomFunction>) -> u32 {
    let name = signature
      .split_once('(')
      .map_or(signature, |(name, _)| name)
      .trim()
      .to_owned();
    let id = NEXT_FUNCTION_ID.fetch_add(1, Ordering::SeqCst);
    self.by_name.insert(name, id);
    self.by_id.insert(id, callback);
    id
  }

  /// Registers a first-class host function encountered while protofying a
  /// return value, deduplicating by function identity.
  pub fn register_value_function(&mut self, function: &HostFunction) -> u32 {
    let existing = self
      .by_id
      .iter()
      .find_map(|(id, callback)| Rc::ptr_eq(callback, function.callback()).then_some(*id));
    if let Some(id) = existing {
      return id;
    }
    let id = NEXT_FUNCTION_ID.fetch_add(1, Ordering::SeqCst);
    self.by_id.insert(id, function.callback().clone());
    id
  }

  fn lookup(&self, identifier: &function_call_request::Identifier) -> Option<Rc<dyn CustomFunction>> {
    match identifier {
      function_call_request::Identifier::Name(name) => self
        .by_name
        .get(name)
        .and_then(|id| self.by_id.get(id))
        .cloned(),
      function_call_request::Identifier::FunctionId(id) => self.by_id.get(id).cloned(),
    }
  }

  /// Invokes the function a [`FunctionCallRequest`] refers to.
  ///
  /// Unknown references and callback failures become the response's
  /// `error` field; the compilation continues. Malformed argument values
  /// are the compiler's fault and propagate as [`Error::Compiler`],
  /// tearing the session down.
  pub fn attempt_call(&mut self, request: &FunctionCallRequest) -> Result<FunctionCallResponse, Error> {
    // The codec already rejected requests without an identifier.
    let identifier = request
      .identifier
      .as_ref()
      .ok_or_else(|| Error::compiler("OutboundMessage.FunctionCallRequest.identifier is not set"))?;
    let Some(callback) = self.lookup(identifier) else {
      let message = match identifier {
        function_call_request::Identifier::Name(name) => {
          format!("No function registered with name \"{name}\".")
        }
        function_call_request::Identifier::FunctionId(id) => {
          format!("No function registered with ID {id}.")
        }
      };
      return Ok(FunctionCallResponse {
        id: request.id,
        accessed_argument_lists: Vec::new(),
        result: Some(function_call_response::Result::Error(message)),
      });
    };

    let mut protofier = Protofier::new(self);
    let mut arguments = Vec::with_capacity(request.arguments.len());
    for argument in &request.arguments {
      arguments.push(protofier.from_proto(argument.clone())?);
    }
    debug!(arguments = arguments.len(), "invoking host function");
    let result = match callback.invoke(arguments) {
      Ok(value) => function_call_response::Result::Success(protofier.to_proto(value)),
      Err(error) => function_call_response::Result::Error(error.to_string()),
    };
    Ok(FunctionCallResponse {
      id: request.id,
      accessed_argument_lists: protofier.accessed_argument_lists(),
      result: Some(result),
    })
  }
}
