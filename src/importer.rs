use std::rc::Rc;

use url::Url;

use crate::options::Syntax;

/// A stylesheet loaded by an [`Importer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImporterResult {
  /// The text of the stylesheet.
  pub contents: String,
  /// The syntax `contents` is written in.
  pub syntax: Syntax,
  /// A browser-accessible URL to record in the source map for this
  /// stylesheet, if any.
  pub source_map_url: Option<Url>,
}

/// Resolves `@use`/`@import` URLs to canonical URLs and loads them.
///
/// The compiler consults importers in two phases: `canonicalize` turns the
/// URL as written into a unique canonical URL (or passes by returning
/// `Ok(None)`), then `load` produces the stylesheet text for a canonical
/// URL this importer previously claimed.
///
/// Returning `Err` from either method fails the surrounding `@use` with
/// the error's message; it does not abort the host machinery.
pub trait Importer {
  /// Canonicalizes `url` as written in a stylesheet.
  ///
  /// `from_import` is true when the load comes from an `@import` rule,
  /// letting importers implement the import-only naming conventions.
  fn canonicalize(
    &self,
    url: &str,
    from_import: bool,
  ) -> Result<Option<Url>, Box<dyn std::error::Error>>;

  /// Loads the stylesheet for a canonical URL produced by this importer.
  ///
  /// Returning `Ok(None)` here is a contract violation reported to the
  /// compiler: a canonical URL must stay loadable.
  fn load(&self, canonical_url: &Url) -> Result<Option<ImporterResult>, Box<dyn std::error::Error>>;
}

/// Redirects loads to files on disk that the compiler then reads itself.
///
/// Simpler than [`Importer`] when the stylesheets already live on the
/// filesystem: the host only maps URLs, the compiler handles caching,
/// relative loads and partials.
pub trait FileImporter {
  /// Returns the `file:` URL to load for `url`, or `Ok(None)` to pass.
  fn find_file_url(
    &self,
    url: &str,
    from_import: bool,
  ) -> Result<Option<Url>, Box<dyn std::error::Error>>;
}

/// An importer as supplied in compile options.
#[derive(Clone)]
pub enum SassImporter {
  Importer(Rc<dyn Importer>),
  FileImporter(Rc<dyn FileImporter>),
}

impl std::fmt::Debug for SassImporter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Importer(_) => f.write_str("SassImporter::Importer"),
      Self::FileImporter(_) => f.write_str("SassImporter::FileImporter"),
    }
  }
}
