use std::{
  env,
  path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::Error;

/// Environment variable overriding the compiler executable lookup.
pub(crate) const COMPILER_PATH_VAR: &str = "SASS_EMBEDDED_COMPILER_PATH";

#[cfg(windows)]
const COMPILER_NAMES: [&str; 2] = ["vendor/dart-sass/sass.bat", "vendor/sass.bat"];
#[cfg(not(windows))]
const COMPILER_NAMES: [&str; 2] = ["vendor/dart-sass/sass", "vendor/sass"];

/// Locates the embedded Sass compiler executable.
///
/// Resolution order: an explicit path from the compile options, the
/// `SASS_EMBEDDED_COMPILER_PATH` environment variable, then the vendor
/// locations relative to the running executable and to this crate's
/// source checkout. The first existing file wins.
pub(crate) fn compiler_path(explicit: Option<&Path>) -> Result<PathBuf, Error> {
  if let Some(path) = explicit {
    return Ok(path.to_path_buf());
  }
  if let Some(path) = env::var_os(COMPILER_PATH_VAR) {
    return Ok(PathBuf::from(path));
  }

  let mut roots = Vec::with_capacity(2);
  if let Some(exe_dir) = env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
    roots.push(exe_dir);
  }
  roots.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

  let mut searched = Vec::with_capacity(roots.len() * COMPILER_NAMES.len());
  for root in &roots {
    for name in COMPILER_NAMES {
      let candidate = root.join(name);
      if candidate.is_file() {
        debug!(path = %candidate.display(), "found embedded compiler");
        return Ok(candidate);
      }
      searched.push(candidate);
    }
  }
  Err(Error::ExecutableNotFound { searched })
}
