use core::str::Chars;



/// A buffer for splitting a single raw line of configuration text.  This buffer acts as a forward
/// only iterator over the line.  As characters are consumed the column of the cursor is maintained,
/// allowing the splitter to report where a malformed quote or escape started.
///
/// The LineBuffer only holds a reference to the line, the text is not copied.
pub struct LineBuffer<'a>
{
    /// An iterator over the line being processed.
    chars: Chars<'a>,

    /// The 1 based column of the next character to be consumed.
    column: usize,

    /// The current character being processed.  This is used to peek at the next character without
    /// consuming it.
    current: Option<char>
}


impl<'a> LineBuffer<'a>
{
    /// Create a new LineBuffer over the given line of text.
    pub fn new(line: &'a str) -> Self
    {
        LineBuffer
            {
                chars: line.chars(),
                column: 1,
                current: None
            }
    }

    /// The 1 based column of the next character to be consumed.
    pub fn column(&self) -> usize
    {
        self.column
    }

    /// Take a peek at the next character in the line without consuming it.
    pub fn peek_next(&mut self) -> Option<char>
    {
        match self.current
        {
            Some(_) => self.current,
            None =>
                {
                    let next = self.chars.next();

                    self.current = next;
                    next
                }
        }
    }

    /// Get and consume the next character in the line.
    pub fn next_char(&mut self) -> Option<char>
    {
        let next = match self.current.take()
            {
                Some(current) => Some(current),
                None => self.chars.next()
            };

        if next.is_some()
        {
            self.column += 1;
        }

        next
    }

    /// Drop whatever is left of the line.  Used when a comment marker is found.
    pub fn discard_rest(&mut self)
    {
        while self.next_char().is_some() {}
    }
}
