use strum::Display;

use crate::error::Error;

/// The response message kind a pending request expects.
///
/// The display forms appear verbatim in protocol error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum ResponseKind {
  CompileResponse,
  CanonicalizeResponse,
  ImportResponse,
  FileImportResponse,
  FunctionCallResponse,
}

/// Tracks in-flight requests for one direction of the protocol.
///
/// Each direction has its own id space. Ids are allocated as the smallest
/// non-negative integer not currently in flight, so the table stays dense
/// and slots are reused as soon as their response arrives.
#[derive(Debug, Default)]
pub(crate) struct RequestTracker {
  pending: Vec<Option<ResponseKind>>,
}

impl RequestTracker {
  pub fn new() -> Self {
    Self::default()
  }

  /// The smallest id not currently in use. Does not reserve it; pair with
  /// [`RequestTracker::add`].
  pub fn next_id(&self) -> u32 {
    self
      .pending
      .iter()
      .position(Option::is_none)
      .unwrap_or(self.pending.len()) as u32
  }

  /// Marks `id` as in flight, expecting a response of `kind`.
  pub fn add(&mut self, id: u32, kind: ResponseKind) -> Result<(), Error> {
    let index = id as usize;
    if index >= self.pending.len() {
      self.pending.resize(index + 1, None);
    }
    if self.pending[index].is_some() {
      return Err(Error::protocol(format!(
        "Request ID {id} is already in use by an in-flight request."
      )));
    }
    self.pending[index] = Some(kind);
    Ok(())
  }

  /// Releases `id` on receipt of a response of `kind`.
  pub fn resolve(&mut self, id: u32, kind: ResponseKind) -> Result<(), Error> {
    match self.pending.get(id as usize) {
      None | Some(None) => Err(Error::protocol(format!(
        "Response ID {id} does not match any pending requests."
      ))),
      Some(Some(expected)) if *expected != kind => Err(Error::protocol(format!(
        "Response with ID {id} does not match pending request's type. Expected {expected} but received {kind}."
      ))),
      Some(Some(_)) => {
        self.pending[id as usize] = None;
        Ok(())
      }
    }
  }
}
