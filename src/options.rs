use std::{io::IsTerminal, path::PathBuf, rc::Rc};

use sasshost_value::CustomFunction;
use strum::Display;
use url::Url;

use crate::{
  importer::SassImporter,
  logger::Logger,
  proto::{
    self,
    inbound_message::{CompileRequest, compile_request},
  },
  registry::{FunctionRegistry, ImporterRegistry},
};

/// How the compiler formats the emitted CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputStyle {
  #[default]
  Expanded,
  Compressed,
}

/// The syntax a stylesheet is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Syntax {
  #[default]
  Scss,
  Indented,
  Css,
}

impl OutputStyle {
  pub(crate) fn to_proto(self) -> proto::OutputStyle {
    match self {
      Self::Expanded => proto::OutputStyle::Expanded,
      Self::Compressed => proto::OutputStyle::Compressed,
    }
  }
}

impl Syntax {
  pub(crate) fn to_proto(self) -> proto::Syntax {
    match self {
      Self::Scss => proto::Syntax::Scss,
      Self::Indented => proto::Syntax::Indented,
      Self::Css => proto::Syntax::Css,
    }
  }
}

/// Options for a compilation.
///
/// Plain data with chained setters; pass to [`crate::compile`] /
/// [`crate::blocking::compile`] or wrap in [`StringOptions`] for string
/// input.
#[non_exhaustive]
pub struct Options {
  pub style: OutputStyle,
  pub source_map: bool,
  pub source_map_include_sources: bool,
  pub load_paths: Vec<PathBuf>,
  pub importers: Vec<SassImporter>,
  pub functions: Vec<(String, Rc<dyn CustomFunction>)>,
  /// Defaults to whether stdout is a terminal.
  pub alert_color: Option<bool>,
  pub alert_ascii: bool,
  pub quiet_deps: bool,
  pub verbose: bool,
  /// Defaults to true.
  pub charset: bool,
  pub logger: Option<Rc<dyn Logger>>,
  /// Overrides the compiler executable lookup.
  pub compiler_path: Option<PathBuf>,
}

impl Default for Options {
  fn default() -> Self {
    Self::new()
  }
}

impl Options {
  pub fn new() -> Self {
    Self {
      style: OutputStyle::default(),
      source_map: false,
      source_map_include_sources: false,
      load_paths: Vec::new(),
      importers: Vec::new(),
      functions: Vec::new(),
      alert_color: None,
      alert_ascii: false,
      quiet_deps: false,
      verbose: false,
      charset: true,
      logger: None,
      compiler_path: None,
    }
  }

  pub fn style(mut self, style: OutputStyle) -> Self {
    self.style = style;
    self
  }

  /// Requests a source map alongside the CSS.
  pub fn source_map(mut self, enabled: bool) -> Self {
    self.source_map = enabled;
    self
  }

  /// Embeds the source texts in the source map.
  pub fn source_map_include_sources(mut self, enabled: bool) -> Self {
    self.source_map_include_sources = enabled;
    self
  }

  /// Adds a filesystem load path, consulted after any importers.
  pub fn load_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.load_paths.push(path.into());
    self
  }

  /// Adds an importer, consulted in registration order.
  pub fn importer(mut self, importer: SassImporter) -> Self {
    self.importers.push(importer);
    self
  }

  /// Registers a custom global function under its Sass signature, e.g.
  /// `"invert($color, $weight: 100%)"`.
  pub fn function(mut self, signature: impl Into<String>, callback: Rc<dyn CustomFunction>) -> Self {
    self.functions.push((signature.into(), callback));
    self
  }

  /// Whether diagnostics may use terminal colors. Defaults to whether
  /// stdout is a terminal.
  pub fn alert_color(mut self, enabled: bool) -> Self {
    self.alert_color = Some(enabled);
    self
  }

  /// Restricts diagnostics to ASCII drawing characters.
  pub fn alert_ascii(mut self, enabled: bool) -> Self {
    self.alert_ascii = enabled;
    self
  }

  /// Silences warnings from stylesheets loaded through load paths or
  /// importers.
  pub fn quiet_deps(mut self, enabled: bool) -> Self {
    self.quiet_deps = enabled;
    self
  }

  /// Emits full deprecation warnings even when repetitive.
  pub fn verbose(mut self, enabled: bool) -> Self {
    self.verbose = enabled;
    self
  }

  /// Whether the emitted CSS may open with `@charset`/a BOM when it
  /// contains non-ASCII. Defaults to true.
  pub fn charset(mut self, enabled: bool) -> Self {
    self.charset = enabled;
    self
  }

  /// Routes warnings and `@debug` messages to `logger` instead of stderr.
  pub fn logger(mut self, logger: Rc<dyn Logger>) -> Self {
    self.logger = Some(logger);
    self
  }

  /// Uses the compiler executable at `path` instead of searching for one.
  pub fn compiler_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.compiler_path = Some(path.into());
    self
  }

  /// Builds the wire request, registering importers and functions in the
  /// session registries as it goes. The request id is assigned later by
  /// the dispatcher.
  pub(crate) fn build_request(
    &self,
    input: compile_request::Input,
    importers: &mut ImporterRegistry,
    functions: &mut FunctionRegistry,
  ) -> CompileRequest {
    let mut importer_list = Vec::with_capacity(self.importers.len() + self.load_paths.len());
    for importer in &self.importers {
      importer_list.push(importers.register(importer.clone()));
    }
    for path in &self.load_paths {
      importer_list.push(compile_request::Importer {
        importer: Some(compile_request::importer::Importer::Path(
          path.to_string_lossy().into_owned(),
        )),
      });
    }
    let mut global_functions = Vec::with_capacity(self.functions.len());
    for (signature, callback) in &self.functions {
      functions.register(signature, callback.clone());
      global_functions.push(signature.clone());
    }
    CompileRequest {
      id: 0,
      style: self.style.to_proto() as i32,
      source_map: self.source_map,
      importers: importer_list,
      global_functions,
      alert_color: self
        .alert_color
        .unwrap_or_else(|| std::io::stdout().is_terminal()),
      alert_ascii: self.alert_ascii,
      verbose: self.verbose,
      quiet_deps: self.quiet_deps,
      source_map_include_sources: self.source_map_include_sources,
      charset: self.charset,
      input: Some(input),
    }
  }
}

/// Options for compiling a string of Sass source.
#[non_exhaustive]
pub struct StringOptions {
  pub options: Options,
  pub syntax: Syntax,
  /// The location the source text was loaded from, used for error
  /// reporting and as the base of relative loads.
  pub url: Option<Url>,
  /// The importer that resolves relative loads from the source text
  /// itself.
  pub importer: Option<SassImporter>,
}

impl Default for StringOptions {
  fn default() -> Self {
    Self::new()
  }
}

impl StringOptions {
  pub fn new() -> Self {
    Self::from(Options::new())
  }

  pub fn syntax(mut self, syntax: Syntax) -> Self {
    self.syntax = syntax;
    self
  }

  pub fn url(mut self, url: Url) -> Self {
    self.url = Some(url);
    self
  }

  pub fn importer(mut self, importer: SassImporter) -> Self {
    self.importer = Some(importer);
    self
  }

  pub(crate) fn build_input(
    &self,
    source: String,
    importers: &mut ImporterRegistry,
  ) -> compile_request::Input {
    compile_request::Input::String(compile_request::StringInput {
      source,
      url: self.url.as_ref().map(Url::to_string).unwrap_or_default(),
      syntax: self.syntax.to_proto() as i32,
      importer: self
        .importer
        .as_ref()
        .map(|importer| importers.register(importer.clone())),
    })
  }
}

impl From<Options> for StringOptions {
  fn from(options: Options) -> Self {
    Self {
      options,
      syntax: Syntax::default(),
      url: None,
      importer: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_the_protocol_expectations() {
    let options = Options::new();
    assert_eq!(options.style, OutputStyle::Expanded);
    assert!(options.charset);
    assert!(!options.source_map);
    assert!(options.alert_color.is_none());
  }

  #[test]
  fn importers_precede_load_paths_in_the_request() {
    struct Pass;
    impl crate::importer::FileImporter for Pass {
      fn find_file_url(
        &self,
        _: &str,
        _: bool,
      ) -> Result<Option<Url>, Box<dyn std::error::Error>> {
        Ok(None)
      }
    }

    let options = Options::new()
      .load_path("styles")
      .importer(SassImporter::FileImporter(Rc::new(Pass)));
    let mut importers = ImporterRegistry::new();
    let mut functions = FunctionRegistry::new();
    let request = options.build_request(
      compile_request::Input::Path("in.scss".into()),
      &mut importers,
      &mut functions,
    );
    assert_eq!(request.importers.len(), 2);
    assert!(matches!(
      request.importers[0].importer,
      Some(compile_request::importer::Importer::FileImporterId(0))
    ));
    assert_eq!(
      request.importers[1].importer,
      Some(compile_request::importer::Importer::Path("styles".into()))
    );
  }

  #[test]
  fn global_functions_carry_full_signatures() {
    let options = Options::new().function(
      "darken($color, $amount)",
      Rc::new(|_: Vec<sasshost_value::Value>| -> Result<sasshost_value::Value, Box<dyn std::error::Error>> {
        Ok(sasshost_value::Value::Null)
      }),
    );
    let mut importers = ImporterRegistry::new();
    let mut functions = FunctionRegistry::new();
    let request = options.build_request(
      compile_request::Input::Path("in.scss".into()),
      &mut importers,
      &mut functions,
    );
    assert_eq!(request.global_functions, ["darken($color, $amount)"]);
  }

  #[test]
  fn string_options_register_their_own_importer() {
    struct Pass;
    impl crate::importer::FileImporter for Pass {
      fn find_file_url(
        &self,
        _: &str,
        _: bool,
      ) -> Result<Option<Url>, Box<dyn std::error::Error>> {
        Ok(None)
      }
    }

    let options = StringOptions::new().importer(SassImporter::FileImporter(Rc::new(Pass)));
    let mut importers = ImporterRegistry::new();
    let input = options.build_input("a {}".into(), &mut importers);
    let compile_request::Input::String(input) = input else {
      panic!("expected string input");
    };
    assert_eq!(input.source, "a {}");
    assert!(input.importer.is_some());
  }
}
