use crate::{
    lang::line_buffer::LineBuffer,
    runtime::error::ParseFailure,
};

/// The characters that control how a raw line is split into words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitRules {
    /// Characters that open and close a quoted span.  A span is closed by the same character that
    /// opened it, so the other quote characters can appear inside it unescaped.
    pub quotes: Vec<char>,

    /// Character that makes the following character literal, inside or outside of quotes.
    pub escape: Option<char>,

    /// Character that, outside of quotes, discards the rest of the line.
    pub comment: Option<char>,
}

impl Default for SplitRules {
    fn default() -> Self {
        SplitRules {
            quotes: vec!['"', '\''],
            escape: Some('\\'),
            comment: Some('#'),
        }
    }
}

impl SplitRules {
    fn is_quote(&self, next: char) -> bool {
        self.quotes.contains(&next)
    }

    fn is_escape(&self, next: char) -> bool {
        self.escape == Some(next)
    }

    fn is_comment(&self, next: char) -> bool {
        self.comment == Some(next)
    }
}

/// A word found while splitting a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitWord {
    /// The word's text with quotes and escapes already resolved.
    pub text: String,

    /// True if any part of the word was quoted.  Such a word never acts as an include word.
    pub quoted: bool,

    /// True if the first character of the word was quoted or escaped.  Such a word never acts as
    /// a prefixed include, while `@"my file.cfg"` still does.
    pub quoted_start: bool,
}

/// Check if the given character is considered whitespace.
fn is_whitespace(next: &char) -> bool {
    next.is_whitespace()
}

/// Skip over whitespace in the line.  Stopping only at either the end of the buffer or the next
/// non-whitespace character.
fn skip_whitespace(buffer: &mut LineBuffer) {
    while let Some(next) = buffer.peek_next() {
        if !is_whitespace(&next) {
            break;
        }

        let _ = buffer.next_char();
    }
}

/// Consume an escape character and return the character it protects.
fn process_escape(buffer: &mut LineBuffer) -> Result<char, ParseFailure> {
    let column = buffer.column();
    let _ = buffer.next_char();

    match buffer.next_char() {
        Some(next) => Ok(next),
        None => Err(ParseFailure::with_message(format!(
            "Dangling escape character at column {}.",
            column
        ))),
    }
}

/// Process a quoted span, appending its contents to the word being built.  Whitespace and comment
/// markers lose their meaning until the matching closing quote is found.
fn process_quoted(
    buffer: &mut LineBuffer,
    rules: &SplitRules,
    text: &mut String,
) -> Result<(), ParseFailure> {
    let column = buffer.column();
    let quote = match buffer.next_char() {
        Some(quote) => quote,
        None => return Ok(()),
    };

    loop {
        match buffer.peek_next() {
            Some(next) if next == quote => {
                let _ = buffer.next_char();
                return Ok(());
            }

            Some(next) if rules.is_escape(next) => text.push(process_escape(buffer)?),

            Some(next) => {
                let _ = buffer.next_char();
                text.push(next);
            }

            // Hit the end of the line before the closing quote.
            None => {
                return Err(ParseFailure::with_message(format!(
                    "Unterminated quote {} starting at column {}.",
                    quote, column
                )));
            }
        }
    }
}

/// Pull one word out of the buffer.  A word runs until whitespace or a comment marker, quoted spans
/// and escaped characters included.
fn process_word(buffer: &mut LineBuffer, rules: &SplitRules) -> Result<SplitWord, ParseFailure> {
    let mut text = String::new();
    let mut quoted = false;
    let mut quoted_start = false;
    let start_column = buffer.column();

    while let Some(next) = buffer.peek_next() {
        if is_whitespace(&next) || rules.is_comment(next) {
            break;
        }

        let at_start = buffer.column() == start_column;

        if rules.is_escape(next) {
            quoted_start |= at_start;
            text.push(process_escape(buffer)?);
        } else if rules.is_quote(next) {
            quoted = true;
            quoted_start |= at_start;
            process_quoted(buffer, rules, &mut text)?;
        } else {
            let _ = buffer.next_char();
            text.push(next);
        }
    }

    Ok(SplitWord { text, quoted, quoted_start })
}

/// Split one raw line of configuration text into its words.
pub fn split_line(line: &str, rules: &SplitRules) -> Result<Vec<SplitWord>, ParseFailure> {
    let mut buffer = LineBuffer::new(line);
    let mut words = Vec::new();

    loop {
        skip_whitespace(&mut buffer);

        let next = match buffer.peek_next() {
            Some(next) => next,
            None => break,
        };

        // Everything after the marker is commentary.
        if rules.is_comment(next) {
            buffer.discard_rest();
            break;
        }

        words.push(process_word(&mut buffer, rules)?);
    }

    Ok(words)
}
