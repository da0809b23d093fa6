use crate::sources::BaseContext;
use std::{
    fmt::{self, Display, Formatter},
    path::{Path, PathBuf},
};
use url::Url;

/// The reference word that stands for the process's standard input.
pub const STANDARD_INPUT: &str = "-";

/// The target of an include directive, as written in the configuration text or after resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceReference {
    /// The standard input pseudo stream.
    StandardInput,

    /// A path on the local filesystem.
    Path(PathBuf),

    /// Anything with a URL scheme, including `file:` URLs.
    Url(Url),
}

impl Display for SourceReference {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SourceReference::StandardInput => write!(f, "{}", STANDARD_INPUT),
            SourceReference::Path(path) => write!(f, "{}", path.display()),
            SourceReference::Url(url) => write!(f, "{}", url),
        }
    }
}

impl SourceReference {
    /// Interpret a reference word.  Words that parse as a URL are URLs, the sentinel `-` is the
    /// standard input, everything else is a path.
    ///
    /// Single letter schemes are not accepted so that Windows drive letters stay paths.
    pub fn parse(text: &str) -> SourceReference {
        if text == STANDARD_INPUT {
            return SourceReference::StandardInput;
        }

        match Url::parse(text) {
            Ok(url) if url.scheme().len() > 1 => SourceReference::Url(url),
            _ => SourceReference::Path(PathBuf::from(text)),
        }
    }

    /// Turn a relative reference into an absolute one.
    ///
    /// Relative paths are resolved against the base directory if there is one, otherwise joined
    /// onto the base URL, otherwise taken relative to the working directory.  When the resulting
    /// path doesn't exist the search paths are tried in order.  If nothing is found the first
    /// candidate is returned so that opening it reports a meaningful error.
    pub fn resolve(
        self,
        base: &BaseContext,
        search_paths: &[PathBuf],
    ) -> Result<SourceReference, url::ParseError> {
        let path = match self {
            SourceReference::Path(path) if path.is_relative() => path,
            other => return Ok(other),
        };

        let candidate = match base {
            BaseContext::Dir(directory) => directory.join(&path),
            BaseContext::Url(url) => {
                return Ok(SourceReference::Url(url.join(&path.to_string_lossy())?));
            }
            BaseContext::None => path.clone(),
        };

        if candidate.exists() {
            return Ok(SourceReference::Path(candidate));
        }

        Ok(SourceReference::Path(
            find_in_search_paths(&path, search_paths).unwrap_or(candidate),
        ))
    }
}

/// Look for a relative path in each of the search directories.
fn find_in_search_paths(path: &Path, search_paths: &[PathBuf]) -> Option<PathBuf> {
    search_paths
        .iter()
        .map(|directory| directory.join(path))
        .find(|full_path| full_path.exists())
}
