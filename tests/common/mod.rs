// Shared helpers for the integration tests.
#![allow(dead_code)]

use std::{
    cell::Cell,
    fs,
    io::{self, Cursor, Read},
    path::{Path, PathBuf},
    rc::Rc,
};
use wordreader::{ReadError, WordReader};

/// A stream that counts how many times it has been dropped.  Optionally fails every read.
pub struct TrackedStream {
    inner: Cursor<Vec<u8>>,
    fail: bool,
    drops: Rc<Cell<usize>>,
}

impl TrackedStream {
    pub fn new(text: &str, drops: Rc<Cell<usize>>) -> TrackedStream {
        TrackedStream { inner: Cursor::new(text.as_bytes().to_vec()), fail: false, drops }
    }

    pub fn failing(drops: Rc<Cell<usize>>) -> TrackedStream {
        TrackedStream { inner: Cursor::new(Vec::new()), fail: true, drops }
    }
}

impl Read for TrackedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail {
            return Err(io::Error::other("device unplugged"));
        }

        self.inner.read(buf)
    }
}

impl Drop for TrackedStream {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Write a file below the directory, creating parent directories as needed.
pub fn write_file(directory: &Path, name: &str, text: &str) -> PathBuf {
    let path = directory.join(name);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    fs::write(&path, text).unwrap();
    path
}

/// Read every word, stopping at the first error.
pub fn read_all(reader: &mut WordReader) -> Result<Vec<String>, ReadError> {
    let mut words = Vec::new();

    while let Some(word) = reader.next_word()? {
        words.push(word);
    }

    Ok(words)
}

/// Read words until the first error and return both.
pub fn read_until_error(reader: &mut WordReader) -> (Vec<String>, ReadError) {
    let mut words = Vec::new();

    loop {
        match reader.next_word() {
            Ok(Some(word)) => words.push(word),
            Ok(None) => panic!("expected an error after {:?}", words),
            Err(error) => return (words, error),
        }
    }
}
