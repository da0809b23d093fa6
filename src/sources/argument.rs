use crate::sources::{BaseContext, WordSource};
use std::{io, path::PathBuf};

/// Word source over an already tokenized list of strings, usually the command line.  Every
/// argument is handed out verbatim as one line, and that line is one word.
pub struct ArgumentWordSource {
    arguments: Vec<String>,
    index: usize,
    base: BaseContext,
    exhausted: bool,
}

impl ArgumentWordSource {
    /// Create a source over the arguments.  The base directory, if given, is used to resolve
    /// relative includes named on the command line.
    pub fn new<I, S>(arguments: I, base_dir: Option<PathBuf>) -> ArgumentWordSource
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgumentWordSource {
            arguments: arguments.into_iter().map(Into::into).collect(),
            index: 0,
            base: BaseContext::from_dir(base_dir),
            exhausted: false,
        }
    }
}

impl WordSource for ArgumentWordSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.arguments.get(self.index) {
            Some(argument) => {
                self.index += 1;
                Ok(Some(argument.clone()))
            }

            None => {
                self.exhausted = true;
                Ok(None)
            }
        }
    }

    fn line_location_description(&self) -> String {
        format!("argument number {}", self.index)
    }

    fn base(&self) -> &BaseContext {
        &self.base
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn splits_lines(&self) -> bool {
        false
    }
}
