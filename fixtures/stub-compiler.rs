//! A canned stand-in for the Dart Sass compiler, used by the integration
//! tests. Speaks the real wire protocol over stdio; the compile request's
//! source text selects which scripted behavior to play back.

use std::io::{Read, Write};
use std::process::exit;

use prost::Message;
use sasshost::proto::{
  self, InboundMessage, OutboundMessage,
  inbound_message::{self, Message as Inbound, compile_request},
  outbound_message::{
    self, CanonicalizeRequest, CompileResponse, FileImportRequest, FunctionCallRequest, ImportRequest,
    LogEvent, Message as Outbound, compile_response,
  },
  source_span::SourceLocation,
};

fn main() {
  let Some(Inbound::CompileRequest(request)) = read_message() else {
    exit(2);
  };
  let source = match &request.input {
    Some(compile_request::Input::String(input)) => input.source.clone(),
    Some(compile_request::Input::Path(path)) => format!("path:{path}"),
    None => exit(2),
  };
  let id = request.id;

  if source.contains("exit-mid-compile") {
    exit(1);
  }
  if source.contains("protocol-error") {
    send(Outbound::Error(outbound_message::ProtocolError {
      r#type: proto::ProtocolErrorType::Parse as i32,
      id,
      message: "scripted protocol failure".into(),
    }));
    exit(0);
  }
  if source.contains("bad-response-id") {
    respond_success(id + 1, "a {}", None, &[]);
    exit(0);
  }
  if source.contains("@warn") {
    send(Outbound::LogEvent(LogEvent {
      r#type: proto::LogEventType::Warning as i32,
      message: "scripted warning".into(),
      span: None,
      stack_trace: String::new(),
      formatted: "WARNING: scripted warning\n".into(),
    }));
  }
  if source.contains("@debug") {
    send(Outbound::LogEvent(LogEvent {
      r#type: proto::LogEventType::Debug as i32,
      message: "scripted debug".into(),
      span: None,
      stack_trace: String::new(),
      formatted: "in.scss:1 DEBUG: scripted debug\n".into(),
    }));
  }

  if let Some(url) = source
    .split("@use \"")
    .nth(1)
    .and_then(|rest| rest.split('"').next())
  {
    run_import_flow(id, &request, url);
    exit(0);
  }
  if let Some(name) = source.strip_prefix("call:") {
    run_function_flow(id, name.trim());
    exit(0);
  }

  match source.as_str() {
    "a {b: c}" => {
      let source_map = request.source_map.then(|| {
        r#"{"version":3,"sourceRoot":"","sources":["data:;charset=utf-8,a%20%7Bb:%20c%7D"],"names":[],"mappings":"AAAA;EAAG"}"#.to_owned()
      });
      respond_success(id, "a {\n  b: c;\n}", source_map, &[]);
    }
    "a {" => {
      respond_failure(
        id,
        "expected \"}\".",
        Some(span("", (3, 0, 3), Some((3, 0, 3)))),
        "- 1:4  root stylesheet\n",
        "Error: expected \"}\".\n  ╷\n1 │ a {\n  │    ^\n  ╵\n  - 1:4  root stylesheet\n",
      );
    }
    "a {b: 1px + 1em}" => {
      respond_failure(
        id,
        "1px and 1em have incompatible units.",
        Some(span("1px + 1em", (6, 0, 6), Some((15, 0, 15)))),
        "- 1:7  root stylesheet\n",
        "Error: 1px and 1em have incompatible units.\n  ╷\n1 │ a {b: 1px + 1em}\n  │       ^^^^^^^^^\n  ╵\n  - 1:7  root stylesheet\n",
      );
    }
    source if source.contains("@function fail") => {
      respond_failure(
        id,
        "1px and 1em have incompatible units.",
        Some(span("1px + 1em", (31, 1, 10), Some((40, 1, 19)))),
        "- 2:11  fail()\n- 6:6   root stylesheet\n",
        "Error: 1px and 1em have incompatible units.\n  - 2:11  fail()\n  - 6:6   root stylesheet\n",
      );
    }
    other => {
      // Default: echo the source back as a comment.
      respond_success(id, &format!("/* {other} */"), None, &[]);
    }
  }
}

/// Exercises canonicalize/import (or file import) against the host's first
/// registered importer, then reports what was loaded.
fn run_import_flow(id: u32, request: &inbound_message::CompileRequest, url: &str) {
  let importer = request
    .importers
    .first()
    .and_then(|i| i.importer.as_ref());
  match importer {
    Some(compile_request::importer::Importer::ImporterId(importer_id)) => {
      send(Outbound::CanonicalizeRequest(CanonicalizeRequest {
        id: 0,
        importer_id: *importer_id,
        url: url.into(),
        from_import: false,
      }));
      let Some(Inbound::CanonicalizeResponse(response)) = read_message() else {
        exit(2);
      };
      let canonical = match response.result {
        Some(inbound_message::canonicalize_response::Result::Url(url)) => url,
        Some(inbound_message::canonicalize_response::Result::Error(message)) => {
          respond_failure(id, &message, None, "", &format!("Error: {message}"));
          return;
        }
        None => {
          respond_failure(id, "Can't find stylesheet to import.", None, "", "Error: not found");
          return;
        }
      };
      send(Outbound::ImportRequest(ImportRequest {
        id: 1,
        importer_id: *importer_id,
        url: canonical.clone(),
      }));
      let Some(Inbound::ImportResponse(response)) = read_message() else {
        exit(2);
      };
      match response.result {
        Some(inbound_message::import_response::Result::Success(success)) => {
          respond_success(
            id,
            &format!("/* loaded {} */\n{}", canonical, success.contents),
            None,
            &[canonical.as_str()],
          );
        }
        Some(inbound_message::import_response::Result::Error(message)) => {
          respond_failure(id, &message, None, "", &format!("Error: {message}"));
        }
        None => exit(2),
      }
    }
    Some(compile_request::importer::Importer::FileImporterId(importer_id)) => {
      send(Outbound::FileImportRequest(FileImportRequest {
        id: 0,
        importer_id: *importer_id,
        url: url.into(),
        from_import: false,
      }));
      let Some(Inbound::FileImportResponse(response)) = read_message() else {
        exit(2);
      };
      match response.result {
        Some(inbound_message::file_import_response::Result::FileUrl(file_url)) => {
          respond_success(id, &format!("/* found {file_url} */"), None, &[&file_url]);
        }
        Some(inbound_message::file_import_response::Result::Error(message)) => {
          respond_failure(id, &message, None, "", &format!("Error: {message}"));
        }
        None => {
          respond_failure(id, "Can't find stylesheet to import.", None, "", "Error: not found");
        }
      }
    }
    _ => {
      respond_failure(id, "no importer registered", None, "", "Error: no importer");
    }
  }
}

/// Calls the named host function with a number and a keyword-carrying
/// argument list, then reports the outcome in the emitted CSS.
fn run_function_flow(id: u32, name: &str) {
  let number = proto::Value {
    value: Some(proto::value::Value::Number(proto::value::Number {
      value: 2.0,
      numerators: vec!["px".into()],
      denominators: vec![],
    })),
  };
  let arglist = proto::Value {
    value: Some(proto::value::Value::ArgumentList(
      proto::value::ArgumentList {
        id: 1,
        separator: proto::ListSeparator::Comma as i32,
        contents: vec![],
        keywords: [(
          "width".to_owned(),
          proto::Value {
            value: Some(proto::value::Value::Number(proto::value::Number {
              value: 10.0,
              numerators: vec![],
              denominators: vec![],
            })),
          },
        )]
        .into_iter()
        .collect(),
      },
    )),
  };
  send(Outbound::FunctionCallRequest(FunctionCallRequest {
    id: 0,
    arguments: vec![number, arglist],
    identifier: Some(outbound_message::function_call_request::Identifier::Name(
      name.into(),
    )),
  }));
  let Some(Inbound::FunctionCallResponse(response)) = read_message() else {
    exit(2);
  };
  let mut accessed = response.accessed_argument_lists.clone();
  accessed.sort_unstable();
  match response.result {
    Some(inbound_message::function_call_response::Result::Success(value)) => {
      respond_success(
        id,
        &format!("/* ok={} accessed={accessed:?} */", describe(&value)),
        None,
        &[],
      );
    }
    Some(inbound_message::function_call_response::Result::Error(message)) => {
      respond_success(id, &format!("/* error={message} accessed={accessed:?} */"), None, &[]);
    }
    None => exit(2),
  }
}

fn describe(value: &proto::Value) -> String {
  match &value.value {
    Some(proto::value::Value::Number(number)) => {
      format!("{}{}", number.value, number.numerators.join("*"))
    }
    Some(proto::value::Value::String(string)) => string.text.clone(),
    Some(proto::value::Value::Singleton(_)) => "singleton".into(),
    Some(_) => "value".into(),
    None => "unset".into(),
  }
}

fn span(
  text: &str,
  start: (u32, u32, u32),
  end: Option<(u32, u32, u32)>,
) -> proto::SourceSpan {
  let location = |(offset, line, column)| SourceLocation {
    offset,
    line,
    column,
  };
  proto::SourceSpan {
    text: text.into(),
    start: Some(location(start)),
    end: end.map(location),
    url: String::new(),
    context: String::new(),
  }
}

fn respond_success(id: u32, css: &str, source_map: Option<String>, loaded_urls: &[&str]) {
  send(Outbound::CompileResponse(CompileResponse {
    id,
    result: Some(compile_response::Result::Success(
      compile_response::CompileSuccess {
        css: css.into(),
        source_map: source_map.unwrap_or_default(),
        loaded_urls: loaded_urls.iter().map(|u| (*u).to_owned()).collect(),
      },
    )),
  }));
}

fn respond_failure(
  id: u32,
  message: &str,
  span: Option<proto::SourceSpan>,
  stack_trace: &str,
  formatted: &str,
) {
  send(Outbound::CompileResponse(CompileResponse {
    id,
    result: Some(compile_response::Result::Failure(
      compile_response::CompileFailure {
        message: message.into(),
        span,
        stack_trace: stack_trace.into(),
        formatted: formatted.into(),
      },
    )),
  }));
}

fn send(message: Outbound) {
  let payload = OutboundMessage {
    message: Some(message),
  }
  .encode_to_vec();
  let stdout = std::io::stdout();
  let mut stdout = stdout.lock();
  stdout
    .write_all(&(payload.len() as u32).to_le_bytes())
    .and_then(|()| stdout.write_all(&payload))
    .and_then(|()| stdout.flush())
    .unwrap_or_else(|_| exit(3));
}

fn read_message() -> Option<Inbound> {
  let stdin = std::io::stdin();
  let mut stdin = stdin.lock();
  let mut header = [0u8; 4];
  stdin.read_exact(&mut header).ok()?;
  let mut payload = vec![0u8; u32::from_le_bytes(header) as usize];
  stdin.read_exact(&mut payload).ok()?;
  InboundMessage::decode(payload.as_slice()).ok()?.message
}
