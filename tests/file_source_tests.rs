mod common;

use common::write_file;
use std::io;
use tempfile::TempDir;
use url::Url;
use wordreader::{FileWordSource, SourceReference, WordSource};

#[test]
fn path_source_resolves_through_its_directory() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "conf/main.cfg", "-keep class Foo\n");

    let mut source = FileWordSource::from_path(&path).unwrap();

    assert_eq!(source.base_dir(), Some(temp.path().join("conf").as_path()));
    assert_eq!(source.base_url(), None);
    assert_eq!(
        source.line_location_description(),
        format!("line 0 of file '{}'", path.display())
    );

    assert_eq!(source.next_line().unwrap().as_deref(), Some("-keep class Foo"));
    assert_eq!(source.next_line().unwrap(), None);
    assert!(source.is_exhausted());
}

#[test]
fn url_source_resolves_through_the_url() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "main.cfg", "alpha\nbeta\n");
    let url = Url::from_file_path(&path).unwrap();

    let mut source = FileWordSource::from_url(url.clone()).unwrap();

    assert_eq!(source.base_dir(), None);
    assert_eq!(source.base_url(), Some(&url));

    assert_eq!(source.next_line().unwrap().as_deref(), Some("alpha"));
    assert_eq!(source.next_line().unwrap().as_deref(), Some("beta"));
    assert_eq!(
        source.line_location_description(),
        format!("line 2 of URL '{}'", url)
    );
    assert_eq!(source.next_line().unwrap(), None);
}

#[test]
fn path_and_file_url_share_an_identity() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "main.cfg", "");

    let by_path = FileWordSource::from_path(&path).unwrap();
    let by_url = FileWordSource::from_url(Url::from_file_path(&path).unwrap()).unwrap();

    assert!(by_path.identity().is_some());
    assert_eq!(by_path.identity(), by_url.identity());
}

#[test]
fn missing_file_fails_at_construction() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.cfg");

    let error = FileWordSource::from_path(&path).err().unwrap();
    assert_eq!(error.kind(), io::ErrorKind::NotFound);

    let url = Url::from_file_path(&path).unwrap();
    let error = FileWordSource::from_url(url).err().unwrap();
    assert_eq!(error.kind(), io::ErrorKind::NotFound);
}

#[test]
fn directory_fails_at_construction() {
    let temp = TempDir::new().unwrap();

    let error = FileWordSource::from_path(temp.path()).err().unwrap();
    assert_eq!(error.kind(), io::ErrorKind::IsADirectory);

    let url = Url::from_directory_path(temp.path()).unwrap();
    let error = FileWordSource::from_url(url).err().unwrap();
    assert_eq!(error.kind(), io::ErrorKind::IsADirectory);
}

#[test]
fn identity_is_known_before_opening() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "main.cfg", "");
    let source = FileWordSource::from_path(&path).unwrap();

    assert_eq!(
        Some(FileWordSource::identity_of(&SourceReference::Path(path.clone()))),
        source.identity()
    );
    assert_eq!(FileWordSource::identity_of(&SourceReference::StandardInput), "-");
}

#[test]
fn unsupported_scheme_fails_at_construction() {
    let url = Url::parse("ftp://example.com/main.cfg").unwrap();
    let error = FileWordSource::from_url(url).err().unwrap();

    assert_eq!(error.kind(), io::ErrorKind::Unsupported);
}

#[test]
fn standard_input_has_no_base() {
    let source = FileWordSource::open(&SourceReference::StandardInput).unwrap();

    assert_eq!(source.base_dir(), None);
    assert_eq!(source.base_url(), None);
    assert_eq!(source.identity().as_deref(), Some("-"));
    assert_eq!(source.line_location_description(), "line 0 of standard input");
}

#[test]
fn open_dispatches_on_the_reference() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "main.cfg", "x\n");

    let mut source = FileWordSource::open(&SourceReference::Path(path.clone())).unwrap();
    assert_eq!(source.base_dir(), Some(temp.path()));
    assert_eq!(source.next_line().unwrap().as_deref(), Some("x"));

    let url = Url::from_file_path(&path).unwrap();
    let source = FileWordSource::open(&SourceReference::Url(url.clone())).unwrap();
    assert_eq!(source.base_url(), Some(&url));
}
