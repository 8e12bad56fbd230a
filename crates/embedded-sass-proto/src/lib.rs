include!(concat!(env!("OUT_DIR"), "/sass.embedded_protocol.rs"));
