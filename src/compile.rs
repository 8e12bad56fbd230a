use std::{
  io::Write,
  path::{Path, PathBuf},
  process::Stdio,
  rc::Rc,
};

use tokio::{
  io::{AsyncReadExt, AsyncWriteExt},
  process::{ChildStdin, Command},
};
use tracing::debug;
use url::Url;

use crate::{
  dispatcher::{Dispatcher, Incoming},
  error::{Error, Exception},
  exec,
  logger::StderrLogger,
  options::{Options, StringOptions},
  packet::PacketFramer,
  proto::{
    inbound_message::{CompileRequest, compile_request},
    outbound_message::{CompileResponse, compile_response},
  },
  registry::{FunctionRegistry, ImporterRegistry},
  span::SourceSpan,
};

/// The result of a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileResult {
  /// The compiled CSS.
  pub css: String,
  /// The source map as JSON text, if one was requested.
  pub source_map: Option<String>,
  /// Canonical URLs of everything loaded during the compilation.
  pub loaded_urls: Vec<Url>,
}

/// Everything a driver needs to run one compilation: the resolved
/// compiler executable, the dispatcher with its registries, and the
/// not-yet-sent compile request.
pub(crate) struct Session {
  pub compiler: PathBuf,
  pub dispatcher: Dispatcher,
  pub request: CompileRequest,
}

impl Session {
  pub fn for_path(path: &Path, options: &Options) -> Result<Self, Error> {
    Self::new(
      options,
      |_| compile_request::Input::Path(path.to_string_lossy().into_owned()),
    )
  }

  pub fn for_string(
    source: String,
    string_options: &StringOptions,
  ) -> Result<Self, Error> {
    Self::new(&string_options.options, |importers| {
      string_options.build_input(source, importers)
    })
  }

  fn new(
    options: &Options,
    input: impl FnOnce(&mut ImporterRegistry) -> compile_request::Input,
  ) -> Result<Self, Error> {
    let compiler = exec::compiler_path(options.compiler_path.as_deref())?;
    let mut importers = ImporterRegistry::new();
    let mut functions = FunctionRegistry::new();
    let input = input(&mut importers);
    let request = options.build_request(input, &mut importers, &mut functions);
    let logger = options
      .logger
      .clone()
      .unwrap_or_else(|| Rc::new(StderrLogger));
    Ok(Self {
      compiler,
      dispatcher: Dispatcher::new(importers, functions, logger),
      request,
    })
  }
}

/// Turns the wire response into the caller-facing result, surfacing a
/// compile failure as [`Error::CompileFailed`]. `loaded_urls` on a failure
/// response is ignored.
pub(crate) fn finish(response: CompileResponse) -> Result<CompileResult, Error> {
  match response.result {
    Some(compile_response::Result::Success(success)) => {
      let mut loaded_urls = Vec::with_capacity(success.loaded_urls.len());
      for url in success.loaded_urls {
        loaded_urls.push(
          Url::parse(&url).map_err(|_| Error::compiler(format!("Invalid loaded URL \"{url}\"")))?,
        );
      }
      Ok(CompileResult {
        css: success.css,
        source_map: (!success.source_map.is_empty()).then_some(success.source_map),
        loaded_urls,
      })
    }
    Some(compile_response::Result::Failure(failure)) => {
      let span = failure.span.map(SourceSpan::from_proto).transpose()?;
      Err(Error::CompileFailed {
        exception: Box::new(Exception::new(
          failure.message,
          span,
          (!failure.stack_trace.is_empty()).then_some(failure.stack_trace),
          failure.formatted,
        )),
      })
    }
    // The codec rejects result-less responses before they get here.
    None => Err(Error::compiler(
      "OutboundMessage.CompileResponse.result is not set",
    )),
  }
}

pub(crate) fn missing_stdio(which: &str) -> Error {
  Error::Io {
    source: std::io::Error::other(format!("child {which} pipe unavailable")),
  }
}

/// Compiles the Sass file at `path`.
///
/// The returned future is not `Send`: the session, including the child
/// process, belongs to the task driving it.
pub async fn compile(path: impl AsRef<Path>, options: Options) -> Result<CompileResult, Error> {
  run(Session::for_path(path.as_ref(), &options)?).await
}

/// Compiles a string of Sass source.
pub async fn compile_string(
  source: impl Into<String>,
  options: StringOptions,
) -> Result<CompileResult, Error> {
  run(Session::for_string(source.into(), &options)?).await
}

async fn run(session: Session) -> Result<CompileResult, Error> {
  let Session {
    compiler,
    mut dispatcher,
    request,
  } = session;
  debug!(compiler = %compiler.display(), "spawning embedded compiler");
  let mut child = Command::new(&compiler)
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .kill_on_drop(true)
    .spawn()
    .map_err(|source| Error::Spawn {
      path: compiler,
      source,
    })?;
  let mut stdin = child.stdin.take().ok_or_else(|| missing_stdio("stdin"))?;
  let mut stdout = child.stdout.take().ok_or_else(|| missing_stdio("stdout"))?;
  let mut stderr = child.stderr.take().ok_or_else(|| missing_stdio("stderr"))?;

  let mut framer = PacketFramer::new();
  let (_id, payload) = dispatcher.send_compile_request(request)?;
  write_packet(&mut stdin, &payload).await?;

  let mut stdout_buf = vec![0u8; 8192];
  let mut stderr_buf = vec![0u8; 8192];
  let mut stderr_open = true;
  loop {
    tokio::select! {
      read = stdout.read(&mut stdout_buf) => {
        let read = read?;
        if read == 0 {
          // The child closed its stdout before answering.
          return Err(Error::CompilerExit);
        }
        for payload in framer.feed(&stdout_buf[..read]) {
          match dispatcher.receive_payload(&payload)? {
            Incoming::Reply(reply) => {
              write_packet(&mut stdin, &reply.payload).await?;
              dispatcher.complete_reply(reply)?;
            }
            Incoming::Done(response) => {
              // Graceful close: end the child's stdin and reap it.
              drop(stdin);
              let _ = child.wait().await;
              return finish(response);
            }
            Incoming::Nothing => {}
          }
        }
      }
      read = stderr.read(&mut stderr_buf), if stderr_open => {
        match read {
          // The compiler only writes protocol-panic output to stderr;
          // forward it verbatim.
          Ok(read) if read > 0 => {
            let _ = std::io::stderr().write_all(&stderr_buf[..read]);
          }
          _ => stderr_open = false,
        }
      }
    }
  }
}

async fn write_packet(stdin: &mut ChildStdin, payload: &[u8]) -> Result<(), Error> {
  let packet = PacketFramer::encode(payload);
  let result = async {
    stdin.write_all(&packet).await?;
    stdin.flush().await
  }
  .await;
  match result {
    Ok(()) => Ok(()),
    Err(error) if error.kind() == std::io::ErrorKind::BrokenPipe => Err(Error::CompilerExit),
    Err(error) => Err(error.into()),
  }
}
