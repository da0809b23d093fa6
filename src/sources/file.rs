use crate::{
    lang::reference::{STANDARD_INPUT, SourceReference},
    sources::{BaseContext, WordSource, line::LineWordSource},
};
use std::{
    fs::{File, canonicalize},
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};
use tracing::debug;
use url::Url;

/// The owned stream behind a file source.
type Stream = Box<dyn BufRead>;

/// Word source that opens its own stream, from a local path, a URL, or the standard input.  The
/// stream is opened when the source is created, so a missing file is reported right away, and it
/// is closed when the source runs dry, fails to read, or is dropped.
pub struct FileWordSource {
    lines: LineWordSource<Stream>,
    identity: Option<String>,
}

impl FileWordSource {
    /// Open a local file.  Relative includes inside it are resolved against the file's directory.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<FileWordSource> {
        let path = path.as_ref();
        let file = open_file(path)?;

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        debug!(path = %path.display(), "Opened configuration file.");

        Ok(FileWordSource {
            lines: LineWordSource::new(
                Box::new(BufReader::new(file)) as Stream,
                format!("file '{}'", path.display()),
                BaseContext::Dir(directory),
            ),
            identity: Some(path_identity(path)),
        })
    }

    /// Open a URL.  Relative includes inside it are joined onto the URL itself, even when it is a
    /// `file:` URL.
    pub fn from_url(url: Url) -> io::Result<FileWordSource> {
        let stream = open_url(&url)?;
        let identity = url_identity(&url);

        debug!(%url, "Opened configuration URL.");

        Ok(FileWordSource {
            lines: LineWordSource::new(
                stream,
                format!("URL '{}'", url),
                BaseContext::Url(url),
            ),
            identity: Some(identity),
        })
    }

    /// The pseudo source for the process's standard input.  It offers no base for resolving
    /// relative includes, they fall back to the working directory.  There is only one standard
    /// input, so its identity is the `-` sentinel.
    pub fn standard_input() -> FileWordSource {
        FileWordSource {
            lines: LineWordSource::new(
                Box::new(io::stdin().lock()) as Stream,
                "standard input",
                BaseContext::None,
            ),
            identity: Some(STANDARD_INPUT.to_string()),
        }
    }

    /// The identity a source opened from the reference would have.  Lets a caller reject a
    /// reference before opening it, which matters for the standard input where opening blocks.
    pub fn identity_of(reference: &SourceReference) -> String {
        match reference {
            SourceReference::StandardInput => STANDARD_INPUT.to_string(),
            SourceReference::Path(path) => path_identity(path),
            SourceReference::Url(url) => url_identity(url),
        }
    }

    /// Open whatever the reference points at.
    pub fn open(reference: &SourceReference) -> io::Result<FileWordSource> {
        match reference {
            SourceReference::StandardInput => Ok(FileWordSource::standard_input()),
            SourceReference::Path(path) => FileWordSource::from_path(path),
            SourceReference::Url(url) => FileWordSource::from_url(url.clone()),
        }
    }
}

impl WordSource for FileWordSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line()
    }

    fn line_location_description(&self) -> String {
        self.lines.line_location_description()
    }

    fn base(&self) -> &BaseContext {
        self.lines.base()
    }

    fn is_exhausted(&self) -> bool {
        self.lines.is_exhausted()
    }

    fn identity(&self) -> Option<String> {
        self.identity.clone()
    }
}

/// Canonical form of a path, so that the same file reached two ways compares equal.
fn path_identity(path: &Path) -> String {
    canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

fn url_identity(url: &Url) -> String {
    match url.to_file_path() {
        Ok(path) if url.scheme() == "file" => path_identity(&path),
        _ => url.to_string(),
    }
}

/// Open a local file for reading.  Directories open fine on some platforms and only fail on the
/// first read, so they are turned away here.
fn open_file(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;

    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("{} is a directory", path.display()),
        ));
    }

    Ok(file)
}

/// Open the stream behind a URL.
fn open_url(url: &Url) -> io::Result<Stream> {
    match url.scheme() {
        "file" => {
            let path = url.to_file_path().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} does not name a local file", url),
                )
            })?;

            Ok(Box::new(BufReader::new(open_file(&path)?)))
        }

        #[cfg(feature = "remote")]
        "http" | "https" => {
            let response = ureq::get(url.as_str()).call().map_err(io::Error::other)?;
            Ok(Box::new(BufReader::new(response.into_reader())))
        }

        scheme => Err(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("URL scheme '{}' is not supported", scheme),
        )),
    }
}
