use bytes::{BufMut, Bytes, BytesMut};

/// Reassembles the length-prefixed packet stream arriving from the
/// compiler's stdout.
///
/// Each packet is a 4-byte little-endian payload length followed by that
/// many payload bytes. The framer holds at most one partially received
/// packet and never inspects payload contents; a nonsense length is only
/// discovered when the decoder downstream rejects the payload.
#[derive(Debug)]
pub(crate) struct PacketFramer {
  state: State,
}

#[derive(Debug)]
enum State {
  /// Collecting the four length bytes.
  Header { buf: [u8; 4], filled: usize },
  /// Collecting `remaining` more payload bytes.
  Payload { buf: BytesMut, remaining: usize },
}

impl PacketFramer {
  pub fn new() -> Self {
    Self {
      state: State::Header {
        buf: [0; 4],
        filled: 0,
      },
    }
  }

  /// Prefixes `payload` with its little-endian length.
  pub fn encode(payload: &[u8]) -> Bytes {
    let mut packet = BytesMut::with_capacity(4 + payload.len());
    packet.put_u32_le(payload.len() as u32);
    packet.put_slice(payload);
    packet.freeze()
  }

  /// Consumes a chunk of the byte stream, producing every payload it
  /// completes, in arrival order.
  ///
  /// Chunk boundaries are arbitrary: a chunk may end mid-header or
  /// mid-payload, and may contain any number of complete packets. A
  /// zero-length packet completes the moment its header does.
  pub fn feed(&mut self, mut chunk: &[u8]) -> Vec<Bytes> {
    let mut complete = Vec::new();
    loop {
      match &mut self.state {
        State::Header { buf, filled } => {
          let take = chunk.len().min(4 - *filled);
          buf[*filled..*filled + take].copy_from_slice(&chunk[..take]);
          *filled += take;
          chunk = &chunk[take..];
          if *filled < 4 {
            break;
          }
          let length = u32::from_le_bytes(*buf) as usize;
          if length == 0 {
            complete.push(Bytes::new());
            self.state = State::Header {
              buf: [0; 4],
              filled: 0,
            };
          } else {
            self.state = State::Payload {
              buf: BytesMut::with_capacity(length),
              remaining: length,
            };
          }
        }
        State::Payload { buf, remaining } => {
          let take = chunk.len().min(*remaining);
          buf.put_slice(&chunk[..take]);
          *remaining -= take;
          chunk = &chunk[take..];
          if *remaining > 0 {
            break;
          }
          let payload = std::mem::take(buf).freeze();
          complete.push(payload);
          self.state = State::Header {
            buf: [0; 4],
            filled: 0,
          };
        }
      }
      if chunk.is_empty() {
        break;
      }
    }
    complete
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;

  fn concat(packets: &[&[u8]]) -> Vec<u8> {
    packets
      .iter()
      .flat_map(|p| PacketFramer::encode(p).to_vec())
      .collect()
  }

  /* ---------------- encode ---------------- */

  #[test]
  fn encode_prefixes_little_endian_length() {
    assert_eq!(
      PacketFramer::encode(b"hello").as_ref(),
      b"\x05\x00\x00\x00hello"
    );
    assert_eq!(PacketFramer::encode(b"").as_ref(), b"\x00\x00\x00\x00");
  }

  /* ---------------- feed ---------------- */

  #[test]
  fn single_packet_round_trips() {
    let mut framer = PacketFramer::new();
    let out = framer.feed(&PacketFramer::encode(b"payload"));
    assert_eq!(out, vec![Bytes::from_static(b"payload")]);
  }

  #[test]
  fn empty_payload_completes_at_the_header() {
    let mut framer = PacketFramer::new();
    let out = framer.feed(b"\x00\x00\x00\x00");
    assert_eq!(out, vec![Bytes::new()]);
  }

  #[test]
  fn bytes_split_mid_header() {
    let mut framer = PacketFramer::new();
    assert!(framer.feed(b"\x05\x00").is_empty());
    assert!(framer.feed(b"\x00").is_empty());
    let out = framer.feed(b"\x00abcde");
    assert_eq!(out, vec![Bytes::from_static(b"abcde")]);
  }

  #[test]
  fn bytes_split_mid_payload() {
    let mut framer = PacketFramer::new();
    assert!(framer.feed(b"\x05\x00\x00\x00ab").is_empty());
    let out = framer.feed(b"cde");
    assert_eq!(out, vec![Bytes::from_static(b"abcde")]);
  }

  #[test]
  fn one_chunk_may_hold_many_packets() {
    let mut framer = PacketFramer::new();
    let stream = concat(&[b"one", b"", b"three"]);
    let out = framer.feed(&stream);
    assert_eq!(
      out,
      vec![
        Bytes::from_static(b"one"),
        Bytes::new(),
        Bytes::from_static(b"three"),
      ]
    );
  }

  #[test]
  fn trailing_bytes_start_the_next_packet() {
    let mut framer = PacketFramer::new();
    let mut stream = concat(&[b"first"]);
    stream.extend_from_slice(b"\x02\x00\x00\x00x");
    let out = framer.feed(&stream);
    assert_eq!(out, vec![Bytes::from_static(b"first")]);
    assert_eq!(framer.feed(b"y"), vec![Bytes::from_static(b"xy")]);
  }

  /// Feeding a two-packet stream split at every possible position yields
  /// the same payload sequence as the unsplit stream.
  #[rstest]
  fn every_split_point_yields_the_same_payloads(
    #[values(b"" as &[u8], b"a" as &[u8], b"hello world" as &[u8])] first: &[u8],
  ) {
    let second: &[u8] = b"\x01\x02\x03";
    let stream = concat(&[first, second]);
    let expected = vec![Bytes::copy_from_slice(first), Bytes::copy_from_slice(second)];
    for split in 0..=stream.len() {
      let mut framer = PacketFramer::new();
      let mut out = framer.feed(&stream[..split]);
      out.extend(framer.feed(&stream[split..]));
      assert_eq!(out, expected, "split at {split}");
    }
  }

  /// Byte-at-a-time delivery is the worst case of chunking.
  #[test]
  fn byte_at_a_time_delivery() {
    let stream = concat(&[b"abc", b"", b"defg"]);
    let mut framer = PacketFramer::new();
    let mut out = Vec::new();
    for byte in stream {
      out.extend(framer.feed(&[byte]));
    }
    assert_eq!(
      out,
      vec![
        Bytes::from_static(b"abc"),
        Bytes::new(),
        Bytes::from_static(b"defg"),
      ]
    );
  }
}
