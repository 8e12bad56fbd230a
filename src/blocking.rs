//! A blocking front-end over the same dispatch core as the async API.
//!
//! No runtime is involved: two plain threads pump the child's stdout and
//! stderr into one channel, and the compile loop blocks on that channel,
//! handling one event at a time. Importer and function callbacks run on
//! the calling thread, between events.

use std::{
  io::{Read, Write},
  path::Path,
  process::{Child, ChildStdin, ChildStderr, ChildStdout, Command, Stdio},
  sync::mpsc::{Receiver, Sender, channel},
  thread,
};

use tracing::debug;

use crate::{
  compile::{CompileResult, Session, finish, missing_stdio},
  dispatcher::{Dispatcher, Incoming},
  error::Error,
  options::{Options, StringOptions},
  packet::PacketFramer,
  proto::outbound_message::CompileResponse,
};

/// Compiles the Sass file at `path`, blocking until the compiler answers.
pub fn compile(path: impl AsRef<Path>, options: Options) -> Result<CompileResult, Error> {
  run(Session::for_path(path.as_ref(), &options)?)
}

/// Compiles a string of Sass source, blocking until the compiler answers.
pub fn compile_string(
  source: impl Into<String>,
  options: StringOptions,
) -> Result<CompileResult, Error> {
  run(Session::for_string(source.into(), &options)?)
}

fn run(session: Session) -> Result<CompileResult, Error> {
  let mut driver = BlockingDriver::start(session)?;
  loop {
    if !driver.yield_one()? {
      return Err(Error::CompilerExit);
    }
    if let Some(response) = driver.response.take() {
      driver.shutdown();
      return finish(response);
    }
  }
}

enum ChildEvent {
  Stdout(Vec<u8>),
  Stderr(Vec<u8>),
  Exit,
}

struct BlockingDriver {
  child: Child,
  stdin: Option<ChildStdin>,
  events: Receiver<ChildEvent>,
  framer: PacketFramer,
  dispatcher: Dispatcher,
  response: Option<CompileResponse>,
  reaped: bool,
}

impl BlockingDriver {
  fn start(session: Session) -> Result<Self, Error> {
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
      .spawn()
      .map_err(|source| Error::Spawn {
        path: compiler,
        source,
      })?;
    let mut stdin = child.stdin.take().ok_or_else(|| missing_stdio("stdin"))?;
    let stdout = child.stdout.take().ok_or_else(|| missing_stdio("stdout"))?;
    let stderr = child.stderr.take().ok_or_else(|| missing_stdio("stderr"))?;

    let (events_tx, events) = channel();
    spawn_stdout_reader(stdout, events_tx.clone());
    spawn_stderr_reader(stderr, events_tx);

    let (_id, payload) = dispatcher.send_compile_request(request)?;
    write_packet(&mut stdin, &payload)?;

    Ok(Self {
      child,
      stdin: Some(stdin),
      events,
      framer: PacketFramer::new(),
      dispatcher,
      response: None,
      reaped: false,
    })
  }

  /// Blocks until the child produces one event and delivers it.
  ///
  /// Returns false once the child has exited. Protocol failures and
  /// dispatcher errors surface as `Err`.
  fn yield_one(&mut self) -> Result<bool, Error> {
    match self.events.recv() {
      Err(_) | Ok(ChildEvent::Exit) => Ok(false),
      Ok(ChildEvent::Stderr(chunk)) => {
        // Forwarded verbatim; the compiler only writes protocol-panic
        // output here.
        let _ = std::io::stderr().write_all(&chunk);
        Ok(true)
      }
      Ok(ChildEvent::Stdout(chunk)) => {
        for payload in self.framer.feed(&chunk) {
          match self.dispatcher.receive_payload(&payload)? {
            Incoming::Reply(reply) => {
              let stdin = self.stdin.as_mut().ok_or_else(|| missing_stdio("stdin"))?;
              write_packet(stdin, &reply.payload)?;
              self.dispatcher.complete_reply(reply)?;
            }
            Incoming::Done(response) => self.response = Some(response),
            Incoming::Nothing => {}
          }
        }
        Ok(true)
      }
    }
  }

  /// Graceful close: end the child's stdin and reap it.
  fn shutdown(&mut self) {
    self.stdin.take();
    let _ = self.child.wait();
    self.reaped = true;
  }
}

impl Drop for BlockingDriver {
  fn drop(&mut self) {
    if self.reaped {
      return;
    }
    self.stdin.take();
    let _ = self.child.kill();
    let _ = self.child.wait();
  }
}

fn spawn_stdout_reader(mut stdout: ChildStdout, events: Sender<ChildEvent>) {
  thread::spawn(move || {
    let mut buf = [0u8; 8192];
    loop {
      match stdout.read(&mut buf) {
        Ok(0) | Err(_) => {
          let _ = events.send(ChildEvent::Exit);
          break;
        }
        Ok(read) => {
          if events.send(ChildEvent::Stdout(buf[..read].to_vec())).is_err() {
            break;
          }
        }
      }
    }
  });
}

fn spawn_stderr_reader(mut stderr: ChildStderr, events: Sender<ChildEvent>) {
  thread::spawn(move || {
    let mut buf = [0u8; 8192];
    loop {
      match stderr.read(&mut buf) {
        Ok(0) | Err(_) => break,
        Ok(read) => {
          if events.send(ChildEvent::Stderr(buf[..read].to_vec())).is_err() {
            break;
          }
        }
      }
    }
  });
}

fn write_packet(stdin: &mut ChildStdin, payload: &[u8]) -> Result<(), Error> {
  let packet = PacketFramer::encode(payload);
  let result = stdin.write_all(&packet).and_then(|()| stdin.flush());
  match result {
    Ok(()) => Ok(()),
    Err(error) if error.kind() == std::io::ErrorKind::BrokenPipe => Err(Error::CompilerExit),
    Err(error) => Err(error.into()),
  }
}
