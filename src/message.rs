use bytes::Bytes;
use prost::Message;

use crate::{error::Error, proto};

/// Decodes one packet payload from the compiler, validating the fields the
/// protocol makes mandatory.
///
/// An in-band `Error` message is surfaced here as [`Error::Host`]: the
/// compiler is telling us we broke the protocol, and no further messages
/// may be exchanged.
pub(crate) fn decode_outbound(payload: &[u8]) -> Result<proto::outbound_message::Message, Error> {
  use proto::outbound_message::Message as Outbound;

  let message = proto::OutboundMessage::decode(payload)
    .map_err(|_| Error::compiler("Invalid buffer"))?
    .message
    .ok_or_else(|| Error::compiler("OutboundMessage.message is not set"))?;
  match &message {
    Outbound::Error(error) => return Err(Error::host(&error.message)),
    Outbound::CompileResponse(response) if response.result.is_none() => {
      return Err(Error::compiler(
        "OutboundMessage.CompileResponse.result is not set",
      ));
    }
    Outbound::FunctionCallRequest(request) if request.identifier.is_none() => {
      return Err(Error::compiler(
        "OutboundMessage.FunctionCallRequest.identifier is not set",
      ));
    }
    _ => {}
  }
  Ok(message)
}

/// Wraps a message in the inbound envelope and serializes it. Encoding a
/// well-formed message cannot fail.
pub(crate) fn encode_inbound(message: proto::inbound_message::Message) -> Bytes {
  proto::InboundMessage {
    message: Some(message),
  }
  .encode_to_vec()
  .into()
}

#[cfg(test)]
mod tests {
  use super::*;
  use proto::outbound_message::{self, Message as Outbound};

  fn encode_outbound(message: Outbound) -> Vec<u8> {
    proto::OutboundMessage {
      message: Some(message),
    }
    .encode_to_vec()
  }

  #[test]
  fn garbage_is_an_invalid_buffer() {
    let err = decode_outbound(&[0xff, 0xff, 0xff, 0xff]).unwrap_err();
    assert_eq!(err.to_string(), "Compiler caused error: Invalid buffer");
  }

  #[test]
  fn empty_payload_has_no_message_case() {
    let err = decode_outbound(&[]).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Compiler caused error: OutboundMessage.message is not set"
    );
  }

  #[test]
  fn compile_response_requires_a_result() {
    let payload = encode_outbound(Outbound::CompileResponse(
      outbound_message::CompileResponse {
        id: 0,
        result: None,
      },
    ));
    let err = decode_outbound(&payload).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Compiler caused error: OutboundMessage.CompileResponse.result is not set"
    );
  }

  #[test]
  fn function_call_request_requires_an_identifier() {
    let payload = encode_outbound(Outbound::FunctionCallRequest(
      outbound_message::FunctionCallRequest {
        id: 1,
        arguments: vec![],
        identifier: None,
      },
    ));
    let err = decode_outbound(&payload).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Compiler caused error: OutboundMessage.FunctionCallRequest.identifier is not set"
    );
  }

  #[test]
  fn in_band_error_becomes_a_host_error() {
    let payload = encode_outbound(Outbound::Error(outbound_message::ProtocolError {
      r#type: proto::ProtocolErrorType::Params as i32,
      id: 0,
      message: "invalid request id".into(),
    }));
    let err = decode_outbound(&payload).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Compiler reported error: invalid request id"
    );
  }

  #[test]
  fn log_events_decode() {
    let payload = encode_outbound(Outbound::LogEvent(outbound_message::LogEvent {
      r#type: proto::LogEventType::Warning as i32,
      message: "careful".into(),
      span: None,
      stack_trace: String::new(),
      formatted: "Warning: careful".into(),
    }));
    assert!(matches!(
      decode_outbound(&payload).unwrap(),
      Outbound::LogEvent(event) if event.message == "careful"
    ));
  }

  #[test]
  fn inbound_round_trips_through_the_envelope() {
    let bytes = encode_inbound(proto::inbound_message::Message::CompileRequest(
      proto::inbound_message::CompileRequest::default(),
    ));
    let decoded = proto::InboundMessage::decode(bytes.as_ref()).unwrap();
    assert!(matches!(
      decoded.message,
      Some(proto::inbound_message::Message::CompileRequest(_))
    ));
  }
}
