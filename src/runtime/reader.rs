use crate::{
    lang::{
        reference::SourceReference,
        splitting::{SplitWord, split_line},
    },
    runtime::{
        config::ReaderConfig,
        error::{self, ParseFailure, ReadError},
    },
    sources::{WordSource, file::FileWordSource},
};
use std::mem::take;
use tracing::{debug, trace, warn};



/// One entry of the reader's source stack.  The words of the most recently fetched line are kept
/// with the source they came from.  That way an include found in the middle of a line is read to
/// the end before the rest of the line is resumed.
struct SourceFrame
{
    /// The source lines are pulled from.
    source: Box<dyn WordSource>,

    /// Words of the last line that was fetched from the source.
    words: Vec<SplitWord>,

    /// Index of the next unconsumed entry of words.
    cursor: usize
}


impl SourceFrame
{
    fn new(source: Box<dyn WordSource>) -> SourceFrame
    {
        SourceFrame { source, words: Vec::new(), cursor: 0 }
    }

    /// Hand out the next buffered word, if there is one.
    fn next_pending(&mut self) -> Option<SplitWord>
    {
        let word = self.words.get_mut(self.cursor)?;

        self.cursor += 1;

        Some(SplitWord { text: take(&mut word.text), ..*word })
    }

    /// Replace the buffered words with those of a freshly fetched line.
    fn refill(&mut self, words: Vec<SplitWord>)
    {
        self.words = words;
        self.cursor = 0;
    }
}



/// Reads configuration text word by word from a stack of sources.
///
/// The reader starts with a single source.  When it meets an include directive it opens the
/// referenced file or URL and pushes it on top of the stack.  Words are always taken from the top
/// source, and a source is popped and released as soon as it runs dry.  The words come out exactly
/// as if the included text had been pasted in place of the directive.
///
/// Any error aborts reading.  All sources still on the stack are released and the reader is
/// exhausted from then on.
pub struct WordReader
{
    /// Settings for splitting and include handling.
    config: ReaderConfig,

    /// The active sources.  The last entry is the innermost include currently being read.
    frames: Vec<SourceFrame>,

    /// Location of the last source to leave the stack, reported once the stack is empty.
    last_location: String,

    /// The location trace at the moment reading was aborted by an error.
    failure_trace: Vec<String>
}


impl WordReader
{
    /// Create a reader over a source with the default settings.
    pub fn new(source: impl WordSource + 'static) -> WordReader
    {
        WordReader::with_config(source, ReaderConfig::default())
    }

    /// Create a reader over a source with custom settings.
    pub fn with_config(source: impl WordSource + 'static, config: ReaderConfig) -> WordReader
    {
        let last_location = source.line_location_description();

        WordReader
            {
                config,
                frames: vec![ SourceFrame::new(Box::new(source)) ],
                last_location,
                failure_trace: Vec::new()
            }
    }

    /// The settings this reader was created with.
    pub fn config(&self) -> &ReaderConfig
    {
        &self.config
    }

    /// Get the next word, or `None` once every source has been read.
    pub fn next_word(&mut self) -> error::Result<Option<String>>
    {
        let result = self.advance();

        if let Err(error) = &result
        {
            warn!(%error, "Aborting word reader.");
            self.abort();
        }

        result
    }

    /// Push a source as if it had been named by an include directive at the current position.
    pub fn include_source(&mut self, source: impl WordSource + 'static)
    {
        debug!(from = %self.line_location_description(), "Including source.");
        self.frames.push(SourceFrame::new(Box::new(source)));
    }

    /// Describe the current position in the innermost source.
    pub fn line_location_description(&self) -> String
    {
        match self.frames.last()
        {
            Some(frame) => frame.source.line_location_description(),
            None => self.last_location.clone()
        }
    }

    /// The location of every active source from the innermost include outwards.  Useful for
    /// showing the include chain that led to an error.
    pub fn location_trace(&self) -> Vec<String>
    {
        self.frames
            .iter()
            .rev()
            .map(|frame| frame.source.line_location_description())
            .collect()
    }

    /// The location trace captured when the last error aborted reading, innermost source first.
    /// Empty if reading was never aborted.
    pub fn failure_trace(&self) -> &[String]
    {
        &self.failure_trace
    }

    /// The number of includes currently in effect.
    pub fn include_depth(&self) -> usize
    {
        self.frames.len().saturating_sub(1)
    }

    /// Has the reader run out of words for good?
    pub fn is_exhausted(&self) -> bool
    {
        self.frames.is_empty()
    }

    /// Pull words until one is found that isn't an include directive.
    fn advance(&mut self) -> error::Result<Option<String>>
    {
        loop
        {
            let word = match self.next_source_word()?
                {
                    Some(word) => word,
                    None => return Ok(None)
                };

            let directive = self.config
                .include_reference(&word)
                .map(|reference| reference.map(str::to_string));

            let reference = match directive
                {
                    None => return Ok(Some(word.text)),
                    Some(Some(reference)) => reference,
                    Some(None) => self.next_reference_word(&word.text)?
                };

            self.include(&reference)?;
        }
    }

    /// Get the next raw word from the top of the stack, popping sources as they run dry.
    fn next_source_word(&mut self) -> error::Result<Option<SplitWord>>
    {
        loop
        {
            let frame = match self.frames.last_mut()
                {
                    Some(frame) => frame,
                    None => return Ok(None)
                };

            if let Some(word) = frame.next_pending()
            {
                return Ok(Some(word));
            }

            if !self.fill_top()?
            {
                self.pop();
            }
        }
    }

    /// The reference following an include word.  It has to come from the same source as the include
    /// word itself.
    fn next_reference_word(&mut self, trigger: &str) -> error::Result<String>
    {
        loop
        {
            let frame = match self.frames.last_mut()
                {
                    Some(frame) => frame,
                    None => break
                };

            if let Some(word) = frame.next_pending()
            {
                return Ok(word.text);
            }

            if !self.fill_top()?
            {
                break;
            }
        }

        ReadError::syntax_as_result(self.line_location_description(),
                                    format!("Expecting a file name or URL after '{}'.", trigger))
    }

    /// Fetch and split the next line of the top source.  Returns false if that source is exhausted.
    fn fill_top(&mut self) -> error::Result<bool>
    {
        let frame = match self.frames.last_mut()
            {
                Some(frame) => frame,
                None => return Ok(false)
            };

        let line = match frame.source.next_line()
            {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(false),
                Err(source) =>
                    {
                        return Err(ReadError::Io
                            {
                                location: frame.source.line_location_description(),
                                source
                            });
                    }
            };

        trace!(location = %frame.source.line_location_description(), line = %line, "Read line.");

        let words = if frame.source.splits_lines()
            {
                split_line(&line, &self.config.rules).map_err(|failure| ReadError::Syntax
                    {
                        location: frame.source.line_location_description(),
                        failure
                    })?
            }
            else
            {
                vec![ SplitWord { text: line, quoted: false, quoted_start: false } ]
            };

        frame.refill(words);
        Ok(true)
    }

    /// Resolve, open, and push the source named by an include reference.
    fn include(&mut self, text: &str) -> error::Result<()>
    {
        let location = self.line_location_description();

        let include_failure = |reference: String, failure: ParseFailure|
            {
                ReadError::Include { location: location.clone(), reference, failure }
            };

        if self.include_depth() >= self.config.max_include_depth
        {
            let message = format!("Includes are nested deeper than {} levels.",
                                  self.config.max_include_depth);

            return Err(include_failure(text.to_string(), ParseFailure::with_message(message)));
        }

        let base = match self.frames.last()
            {
                Some(frame) => frame.source.base().clone(),
                None => Default::default()
            };

        let reference = SourceReference::parse(text)
            .resolve(&base, &self.config.search_paths)
            .map_err(|error|
                {
                    include_failure(text.to_string(),
                                    ParseFailure::with_message("Malformed URL.").with_cause(error))
                })?;

        // Checked before opening, reading the standard input a second time would block forever.
        let identity = FileWordSource::identity_of(&reference);

        if self.frames.iter().any(|frame| frame.source.identity().as_deref() == Some(identity.as_str()))
        {
            return Err(include_failure(reference.to_string(),
                                       ParseFailure::with_message("Circular include.")));
        }

        let source = FileWordSource::open(&reference)
            .map_err(|error| include_failure(reference.to_string(),
                                             ParseFailure::new().with_cause(error)))?;

        debug!(%reference, from = %location, "Including source.");
        self.frames.push(SourceFrame::new(Box::new(source)));

        Ok(())
    }

    /// Drop the top source, releasing whatever it holds.
    fn pop(&mut self)
    {
        if let Some(frame) = self.frames.pop()
        {
            self.last_location = frame.source.line_location_description();
            debug!(location = %self.last_location, "Finished reading source.");
        }
    }

    /// Release every source on the stack.  The reader is exhausted afterwards and keeps reporting
    /// the location where reading stopped.
    fn abort(&mut self)
    {
        self.failure_trace = self.location_trace();

        if let Some(location) = self.failure_trace.first()
        {
            self.last_location = location.clone();
        }

        self.frames.clear();
    }
}


/// Iterate over the words.  Iteration stops after the last word or after the first error.
impl Iterator for WordReader
{
    type Item = error::Result<String>;

    fn next(&mut self) -> Option<Self::Item>
    {
        self.next_word().transpose()
    }
}
