use std::rc::Rc;

use hashbrown::HashMap;
use tracing::debug;

use crate::{
  importer::{FileImporter, Importer, SassImporter},
  proto::{
    inbound_message::{
      CanonicalizeResponse, FileImportResponse, ImportResponse, canonicalize_response,
      compile_request, file_import_response, import_response,
    },
    outbound_message::{CanonicalizeRequest, FileImportRequest, ImportRequest},
  },
};

/// The importers registered for one compilation, keyed by the ids sent in
/// the compile request.
///
/// Errors returned by importer callbacks are not protocol errors: they are
/// folded into the response's `error` field and fail the `@use` in the
/// stylesheet while the compilation carries on.
#[derive(Default)]
pub(crate) struct ImporterRegistry {
  importers: HashMap<u32, Rc<dyn Importer>>,
  file_importers: HashMap<u32, Rc<dyn FileImporter>>,
  next_id: u32,
}

impl ImporterRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers an importer and returns its wire representation for the
  /// compile request.
  pub fn register(&mut self, importer: SassImporter) -> compile_request::Importer {
    let id = self.next_id;
    self.next_id += 1;
    let importer = match importer {
      SassImporter::Importer(callback) => {
        self.importers.insert(id, callback);
        compile_request::importer::Importer::ImporterId(id)
      }
      SassImporter::FileImporter(callback) => {
        self.file_importers.insert(id, callback);
        compile_request::importer::Importer::FileImporterId(id)
      }
    };
    compile_request::Importer {
      importer: Some(importer),
    }
  }

  pub fn canonicalize(&self, request: &CanonicalizeRequest) -> CanonicalizeResponse {
    debug!(importer_id = request.importer_id, url = %request.url, "canonicalize");
    let result = match self.importers.get(&request.importer_id) {
      None => Some(canonicalize_response::Result::Error(format!(
        "Unknown importer ID {}.",
        request.importer_id
      ))),
      Some(importer) => match importer.canonicalize(&request.url, request.from_import) {
        Ok(Some(url)) => Some(canonicalize_response::Result::Url(url.into())),
        // This importer doesn't recognize the URL; the compiler moves on.
        Ok(None) => None,
        Err(error) => Some(canonicalize_response::Result::Error(error.to_string())),
      },
    };
    CanonicalizeResponse {
      id: request.id,
      result,
    }
  }

  pub fn import(&self, request: &ImportRequest) -> ImportResponse {
    debug!(importer_id = request.importer_id, url = %request.url, "import");
    let result = match self.importers.get(&request.importer_id) {
      None => import_response::Result::Error(format!(
        "Unknown importer ID {}.",
        request.importer_id
      )),
      Some(importer) => match url::Url::parse(&request.url) {
        Err(_) => import_response::Result::Error(format!(
          "Invalid canonical URL \"{}\".",
          request.url
        )),
        Ok(url) => match importer.load(&url) {
          Ok(Some(result)) => import_response::Result::Success(import_response::ImportSuccess {
            contents: result.contents,
            syntax: result.syntax.to_proto() as i32,
            source_map_url: result.source_map_url.map(Into::into),
          }),
          Ok(None) => import_response::Result::Error(format!(
            "Importer returned nothing for the canonical URL \"{url}\"."
          )),
          Err(error) => import_response::Result::Error(error.to_string()),
        },
      },
    };
    ImportResponse {
      id: request.id,
      result: Some(result),
    }
  }

  pub fn file_import(&self, request: &FileImportRequest) -> FileImportResponse {
    debug!(importer_id = request.importer_id, url = %request.url, "file import");
    let result = match self.file_importers.get(&request.importer_id) {
      None => Some(file_import_response::Result::Error(format!(
        "Unknown importer ID {}.",
        request.importer_id
      ))),
      Some(importer) => match importer.find_file_url(&request.url, request.from_import) {
        Ok(Some(url)) if url.scheme() != "file" => {
          Some(file_import_response::Result::Error(format!(
            "FileImporter returned non-file: URL \"{url}\" for URL \"{}\".",
            request.url
          )))
        }
        Ok(Some(url)) => Some(file_import_response::Result::FileUrl(url.into())),
        Ok(None) => None,
        Err(error) => Some(file_import_response::Result::Error(error.to_string())),
      },
    };
    FileImportResponse {
      id: request.id,
      result,
    }
  }
}
