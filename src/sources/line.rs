use crate::sources::{BaseContext, WordSource};
use std::io::{self, BufRead};

/// Word source over any line oriented text stream.
///
/// The stream is owned by the source and dropped as soon as it reports end of stream or a read
/// error, whichever comes first.  A dropped stream is never touched again.
pub struct LineWordSource<R: BufRead> {
    reader: Option<R>,
    description: String,
    base: BaseContext,
    line_number: usize,
}

impl<R: BufRead> LineWordSource<R> {
    /// Create a source over an open stream.  The description names the stream in diagnostics, for
    /// example `file 'proguard.cfg'`.
    pub fn new(reader: R, description: impl Into<String>, base: BaseContext) -> LineWordSource<R> {
        LineWordSource {
            reader: Some(reader),
            description: description.into(),
            base,
            line_number: 0,
        }
    }

    /// The label used in location descriptions.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Release the stream.
    fn release(&mut self) {
        self.reader = None;
    }
}

/// Remove the line terminator that `read_line` leaves in place, either `\n` or `\r\n`.
fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();

        if line.ends_with('\r') {
            line.pop();
        }
    }
}

impl<R: BufRead> WordSource for LineWordSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let reader = match self.reader.as_mut() {
            Some(reader) => reader,
            None => return Ok(None),
        };

        let mut line = String::new();

        match reader.read_line(&mut line) {
            Ok(0) => {
                self.release();
                Ok(None)
            }

            Ok(_) => {
                self.line_number += 1;
                strip_line_terminator(&mut line);
                Ok(Some(line))
            }

            Err(error) => {
                self.release();
                Err(error)
            }
        }
    }

    fn line_location_description(&self) -> String {
        format!("line {} of {}", self.line_number, self.description)
    }

    fn base(&self) -> &BaseContext {
        &self.base
    }

    fn is_exhausted(&self) -> bool {
        self.reader.is_none()
    }
}
