use std::{
    io,
    path::{Path, PathBuf},
};
use url::Url;

/// Source over a pre-split list of arguments.
pub mod argument;

/// Source over any line oriented text stream.
pub mod line;

/// Source over a file, a URL or the standard input, owning the opened stream.
pub mod file;

/// The context a source offers for resolving relative include references.  A source resolves
/// through a directory, through a URL, or not at all.  Never through both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BaseContext {
    /// No resolution context, relative references are taken relative to the working directory.
    #[default]
    None,

    /// Relative references are paths under this directory.
    Dir(PathBuf),

    /// Relative references are joined onto this URL.
    Url(Url),
}

impl BaseContext {
    /// Build a context from an optional directory.
    pub fn from_dir(directory: Option<PathBuf>) -> BaseContext {
        match directory {
            Some(directory) => BaseContext::Dir(directory),
            None => BaseContext::None,
        }
    }

    /// The base directory, if this context is one.
    pub fn dir(&self) -> Option<&Path> {
        match self {
            BaseContext::Dir(directory) => Some(directory),
            _ => None,
        }
    }

    /// The base URL, if this context is one.
    pub fn url(&self) -> Option<&Url> {
        match self {
            BaseContext::Url(url) => Some(url),
            _ => None,
        }
    }
}

/// One origin of configuration text.  The word reader keeps a stack of these, pulling raw lines
/// from the top one until it runs dry.
pub trait WordSource {
    /// Read the next raw line.  Returns `Ok(None)` once the source is exhausted, and keeps doing so
    /// on every later call.
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Describe the current position for diagnostics.  The reported number is the count of lines
    /// or arguments returned so far, which is the 1 based number of the most recent one.
    fn line_location_description(&self) -> String;

    /// The context used to resolve relative includes found in this source.
    fn base(&self) -> &BaseContext;

    /// Has `next_line` reported the end of the source?
    fn is_exhausted(&self) -> bool;

    /// The directory relative include paths are resolved against.
    fn base_dir(&self) -> Option<&Path> {
        self.base().dir()
    }

    /// The URL relative include references are joined onto.
    fn base_url(&self) -> Option<&Url> {
        self.base().url()
    }

    /// Whether the reader should split the lines of this source into words.  Sources whose lines
    /// are already single words return false.
    fn splits_lines(&self) -> bool {
        true
    }

    /// A resolved identity used to detect circular includes.  In memory and pseudo stream sources
    /// have none.
    fn identity(&self) -> Option<String> {
        None
    }
}
