use std::rc::Rc;

use bytes::Bytes;
use tracing::{debug, trace};

use crate::{
  error::Error,
  logger::{LogEvent, LogEventKind, Logger},
  message::{decode_outbound, encode_inbound},
  proto::{
    self,
    inbound_message::{CompileRequest, Message as Inbound},
    outbound_message::{CompileResponse, Message as Outbound},
  },
  registry::{FunctionRegistry, ImporterRegistry},
  span::SourceSpan,
  tracker::{RequestTracker, ResponseKind},
};

/// What a decoded packet amounted to, from the driver's point of view.
#[derive(Debug)]
pub(crate) enum Incoming {
  /// A compiler-initiated request was handled. Write the reply to the
  /// child's stdin (framed), then hand it back via
  /// [`Dispatcher::complete_reply`].
  Reply(PendingReply),
  /// The compile response arrived; the session is complete.
  Done(CompileResponse),
  /// Bookkeeping only (a log event was delivered to the logger).
  Nothing,
}

/// An encoded response whose request id is still marked in flight. The id
/// is released only once the driver reports the reply written.
#[derive(Debug)]
pub(crate) struct PendingReply {
  id: u32,
  kind: ResponseKind,
  pub payload: Bytes,
}

/// Routes decoded messages between the caller, the registries and the
/// child compiler. One dispatcher serves exactly one compilation.
///
/// The first error of any kind (codec, tracker, handler) is terminal: it
/// is returned to the driver, and every later interaction answers
/// [`Error::Closed`]. The driver is responsible for failing the pending
/// compile with the original error and dropping the log stream silently.
pub(crate) struct Dispatcher {
  pending_inbound: RequestTracker,
  pending_outbound: RequestTracker,
  importers: ImporterRegistry,
  functions: FunctionRegistry,
  logger: Rc<dyn Logger>,
  closed: bool,
}

impl Dispatcher {
  pub fn new(
    importers: ImporterRegistry,
    functions: FunctionRegistry,
    logger: Rc<dyn Logger>,
  ) -> Self {
    Self {
      pending_inbound: RequestTracker::new(),
      pending_outbound: RequestTracker::new(),
      importers,
      functions,
      logger,
      closed: false,
    }
  }

  /// Assigns an id to `request` and encodes it for sending. The returned
  /// payload still needs packet framing.
  pub fn send_compile_request(
    &mut self,
    mut request: CompileRequest,
  ) -> Result<(u32, Bytes), Error> {
    if self.closed {
      return Err(Error::Closed);
    }
    let id = self.pending_inbound.next_id();
    self.pending_inbound.add(id, ResponseKind::CompileResponse)?;
    request.id = id;
    debug!(id, "sending compile request");
    Ok((id, encode_inbound(Inbound::CompileRequest(request))))
  }

  /// Decodes and routes one packet payload from the compiler.
  pub fn receive_payload(&mut self, payload: &[u8]) -> Result<Incoming, Error> {
    if self.closed {
      return Err(Error::Closed);
    }
    self.guard(|this| this.route(payload))
  }

  /// Releases a reply's request id after the driver wrote it inbound.
  pub fn complete_reply(&mut self, reply: PendingReply) -> Result<(), Error> {
    if self.closed {
      return Err(Error::Closed);
    }
    self.guard(|this| this.pending_outbound.resolve(reply.id, reply.kind))
  }

  fn guard<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
    match f(self) {
      Ok(value) => Ok(value),
      Err(error) => {
        self.closed = true;
        Err(error)
      }
    }
  }

  fn route(&mut self, payload: &[u8]) -> Result<Incoming, Error> {
    let message = decode_outbound(payload)?;
    trace!(?message, "received");
    match message {
      Outbound::LogEvent(event) => {
        self.log(event)?;
        Ok(Incoming::Nothing)
      }
      Outbound::CompileResponse(response) => {
        self
          .pending_inbound
          .resolve(response.id, ResponseKind::CompileResponse)?;
        debug!(id = response.id, "compile response received");
        Ok(Incoming::Done(response))
      }
      Outbound::CanonicalizeRequest(request) => {
        self
          .pending_outbound
          .add(request.id, ResponseKind::CanonicalizeResponse)?;
        let response = self.importers.canonicalize(&request);
        Ok(Self::reply(
          request.id,
          ResponseKind::CanonicalizeResponse,
          Inbound::CanonicalizeResponse(response),
        ))
      }
      Outbound::ImportRequest(request) => {
        self
          .pending_outbound
          .add(request.id, ResponseKind::ImportResponse)?;
        let response = self.importers.import(&request);
        Ok(Self::reply(
          request.id,
          ResponseKind::ImportResponse,
          Inbound::ImportResponse(response),
        ))
      }
      Outbound::FileImportRequest(request) => {
        self
          .pending_outbound
          .add(request.id, ResponseKind::FileImportResponse)?;
        let response = self.importers.file_import(&request);
        Ok(Self::reply(
          request.id,
          ResponseKind::FileImportResponse,
          Inbound::FileImportResponse(response),
        ))
      }
      Outbound::FunctionCallRequest(request) => {
        self
          .pending_outbound
          .add(request.id, ResponseKind::FunctionCallResponse)?;
        let response = self.functions.attempt_call(&request)?;
        Ok(Self::reply(
          request.id,
          ResponseKind::FunctionCallResponse,
          Inbound::FunctionCallResponse(response),
        ))
      }
      // The codec never lets an Error message through.
      Outbound::Error(error) => Err(Error::host(error.message)),
    }
  }

  fn reply(id: u32, kind: ResponseKind, message: Inbound) -> Incoming {
    Incoming::Reply(PendingReply {
      id,
      kind,
      payload: encode_inbound(message),
    })
  }

  fn log(&mut self, event: proto::outbound_message::LogEvent) -> Result<(), Error> {
    let kind = match proto::LogEventType::try_from(event.r#type) {
      Ok(proto::LogEventType::Warning) => LogEventKind::Warning,
      Ok(proto::LogEventType::DeprecationWarning) => LogEventKind::DeprecationWarning,
      Ok(proto::LogEventType::Debug) => LogEventKind::Debug,
      Err(_) => {
        return Err(Error::compiler(format!(
          "Unknown LogEvent.type {}",
          event.r#type
        )));
      }
    };
    let span = event.span.map(SourceSpan::from_proto).transpose()?;
    let event = LogEvent {
      kind,
      message: event.message,
      formatted: event.formatted,
      span,
      stack_trace: (!event.stack_trace.is_empty()).then_some(event.stack_trace),
    };
    match kind {
      LogEventKind::Warning | LogEventKind::DeprecationWarning => self.logger.warn(&event),
      LogEventKind::Debug => self.logger.debug(&event),
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use prost::Message as _;

  use super::*;
  use crate::proto::{
    inbound_message,
    outbound_message::{self, compile_response},
  };

  fn encode_outbound(message: Outbound) -> Vec<u8> {
    proto::OutboundMessage {
      message: Some(message),
    }
    .encode_to_vec()
  }

  fn decode_inbound(payload: &[u8]) -> Inbound {
    proto::InboundMessage::decode(payload)
      .unwrap()
      .message
      .unwrap()
  }

  struct NullLogger;
  impl Logger for NullLogger {
    fn warn(&self, _: &LogEvent) {}
    fn debug(&self, _: &LogEvent) {}
  }

  fn dispatcher() -> Dispatcher {
    Dispatcher::new(
      ImporterRegistry::new(),
      FunctionRegistry::new(),
      Rc::new(NullLogger),
    )
  }

  fn compile_response_message(id: u32) -> Outbound {
    Outbound::CompileResponse(CompileResponse {
      id,
      result: Some(compile_response::Result::Success(
        compile_response::CompileSuccess {
          css: "a {}".into(),
          source_map: String::new(),
          loaded_urls: vec![],
        },
      )),
    })
  }

  fn canonicalize_request(id: u32) -> Vec<u8> {
    encode_outbound(Outbound::CanonicalizeRequest(
      outbound_message::CanonicalizeRequest {
        id,
        importer_id: 0,
        url: "u".into(),
        from_import: false,
      },
    ))
  }

  /* ---------------- request/response correlation ---------------- */

  #[test]
  fn compile_request_gets_id_zero_and_resolves() {
    let mut dispatcher = dispatcher();
    let (id, payload) = dispatcher
      .send_compile_request(CompileRequest::default())
      .unwrap();
    assert_eq!(id, 0);
    let Inbound::CompileRequest(sent) = decode_inbound(&payload) else {
      panic!("expected a compile request");
    };
    assert_eq!(sent.id, 0);

    let incoming = dispatcher
      .receive_payload(&encode_outbound(compile_response_message(0)))
      .unwrap();
    assert!(matches!(incoming, Incoming::Done(response) if response.id == 0));
  }

  #[test]
  fn unexpected_compile_response_id_fails() {
    let mut dispatcher = dispatcher();
    let err = dispatcher
      .receive_payload(&encode_outbound(compile_response_message(1)))
      .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Response ID 1 does not match any pending requests."
    );
  }

  /* ---------------- compiler-initiated requests ---------------- */

  #[test]
  fn function_call_request_is_answered_with_the_same_id() {
    let mut dispatcher = dispatcher();
    let request = Outbound::FunctionCallRequest(outbound_message::FunctionCallRequest {
      id: 17,
      arguments: vec![],
      identifier: Some(outbound_message::function_call_request::Identifier::Name(
        "missing".into(),
      )),
    });
    let incoming = dispatcher
      .receive_payload(&encode_outbound(request))
      .unwrap();
    let Incoming::Reply(reply) = incoming else {
      panic!("expected a reply");
    };
    let Inbound::FunctionCallResponse(response) = decode_inbound(&reply.payload) else {
      panic!("expected a function call response");
    };
    assert_eq!(response.id, 17);
    assert!(matches!(
      response.result,
      Some(inbound_message::function_call_response::Result::Error(_))
    ));
    dispatcher.complete_reply(reply).unwrap();
  }

  #[test]
  fn request_id_reuse_before_the_reply_is_written_is_terminal() {
    let mut dispatcher = dispatcher();
    let Incoming::Reply(first) = dispatcher.receive_payload(&canonicalize_request(0)).unwrap()
    else {
      panic!("expected a reply");
    };
    // The same id arrives again while the first reply has not been
    // written yet.
    let err = dispatcher
      .receive_payload(&canonicalize_request(0))
      .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Request ID 0 is already in use by an in-flight request."
    );
    // The dispatcher is closed for everything, including the stale reply.
    assert!(matches!(
      dispatcher.complete_reply(first).unwrap_err(),
      Error::Closed
    ));
    assert!(matches!(
      dispatcher
        .send_compile_request(CompileRequest::default())
        .unwrap_err(),
      Error::Closed
    ));
  }

  #[test]
  fn replying_frees_the_request_id() {
    let mut dispatcher = dispatcher();
    let Incoming::Reply(first) = dispatcher.receive_payload(&canonicalize_request(0)).unwrap()
    else {
      panic!("expected a reply");
    };
    dispatcher.complete_reply(first).unwrap();
    // Now the compiler may legally reuse the id.
    let Incoming::Reply(second) = dispatcher.receive_payload(&canonicalize_request(0)).unwrap()
    else {
      panic!("expected a reply");
    };
    dispatcher.complete_reply(second).unwrap();
  }

  /* ---------------- log events ---------------- */

  #[test]
  fn log_events_reach_the_logger_in_order() {
    struct Recorder(Rc<RefCell<Vec<(LogEventKind, String)>>>);
    impl Logger for Recorder {
      fn warn(&self, event: &LogEvent) {
        self.0.borrow_mut().push((event.kind, event.message.clone()));
      }
      fn debug(&self, event: &LogEvent) {
        self.0.borrow_mut().push((event.kind, event.message.clone()));
      }
    }

    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut dispatcher = Dispatcher::new(
      ImporterRegistry::new(),
      FunctionRegistry::new(),
      Rc::new(Recorder(seen.clone())),
    );
    for (kind, message) in [
      (proto::LogEventType::Warning, "one"),
      (proto::LogEventType::Debug, "two"),
      (proto::LogEventType::DeprecationWarning, "three"),
    ] {
      let payload = encode_outbound(Outbound::LogEvent(outbound_message::LogEvent {
        r#type: kind as i32,
        message: message.into(),
        span: None,
        stack_trace: String::new(),
        formatted: String::new(),
      }));
      assert!(matches!(
        dispatcher.receive_payload(&payload).unwrap(),
        Incoming::Nothing
      ));
    }
    assert_eq!(
      seen.borrow().as_slice(),
      [
        (LogEventKind::Warning, "one".to_owned()),
        (LogEventKind::Debug, "two".to_owned()),
        (LogEventKind::DeprecationWarning, "three".to_owned()),
      ]
    );
  }

  /// Two framed messages split at every possible byte boundary route the
  /// same way as the unsplit stream.
  #[test]
  fn framed_stream_split_anywhere_routes_identically() {
    use crate::packet::PacketFramer;

    struct Recorder(Rc<RefCell<Vec<String>>>);
    impl Logger for Recorder {
      fn warn(&self, event: &LogEvent) {
        self.0.borrow_mut().push(event.message.clone());
      }
      fn debug(&self, _: &LogEvent) {}
    }

    let mut stream = Vec::new();
    for message in ["first", "second"] {
      let payload = encode_outbound(Outbound::LogEvent(outbound_message::LogEvent {
        r#type: proto::LogEventType::Warning as i32,
        message: message.into(),
        span: None,
        stack_trace: String::new(),
        formatted: String::new(),
      }));
      stream.extend_from_slice(&PacketFramer::encode(&payload));
    }

    for split in 0..=stream.len() {
      let seen = Rc::new(RefCell::new(Vec::new()));
      let mut dispatcher = Dispatcher::new(
        ImporterRegistry::new(),
        FunctionRegistry::new(),
        Rc::new(Recorder(seen.clone())),
      );
      let mut framer = PacketFramer::new();
      for chunk in [&stream[..split], &stream[split..]] {
        for payload in framer.feed(chunk) {
          dispatcher.receive_payload(&payload).unwrap();
        }
      }
      assert_eq!(seen.borrow().as_slice(), ["first", "second"], "split at {split}");
    }
  }

  /* ---------------- terminal state ---------------- */

  #[test]
  fn in_band_protocol_error_closes_the_dispatcher() {
    let mut dispatcher = dispatcher();
    let payload = encode_outbound(Outbound::Error(outbound_message::ProtocolError {
      r#type: proto::ProtocolErrorType::Parse as i32,
      id: 0,
      message: "bad packet".into(),
    }));
    let err = dispatcher.receive_payload(&payload).unwrap_err();
    assert_eq!(err.to_string(), "Compiler reported error: bad packet");
    assert!(matches!(
      dispatcher
        .send_compile_request(CompileRequest::default())
        .unwrap_err(),
      Error::Closed
    ));
  }
}
