fn main() {
  // Generate protobuf bindings
  prost_build::compile_protos(&["sass/embedded_sass.proto"], &["sass/"])
    .expect("Failed to build protobuf bindings");
  println!("cargo:rerun-if-changed=sass");
}
