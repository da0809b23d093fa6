use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
    io,
};
use thiserror::Error;



pub type Result<T> = std::result::Result<T, ReadError>;



/// The boxed form of whatever caused a parse failure.
pub type Cause = Box<dyn Error + Send + Sync + 'static>;



/// Signal for malformed configuration text or an unusable reference.  Carries an optional message,
/// an optional underlying cause and any further failures that were suppressed while reporting this
/// one.
#[derive(Default)]
pub struct ParseFailure
{
    /// The description of the failure, if any.
    message: Option<String>,

    /// The error that led to this failure, if any.
    cause: Option<Cause>,

    /// Failures that happened while handling this one and would otherwise be lost.
    suppressed: Vec<ParseFailure>
}


impl Error for ParseFailure
{
    fn source(&self) -> Option<&(dyn Error + 'static)>
    {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}


impl Display for ParseFailure
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match (&self.message, &self.cause)
        {
            (Some(message), _) => write!(f, "{}", message),
            (None, Some(cause)) => write!(f, "{}", cause),
            (None, None) => write!(f, "Parse failure.")
        }
    }
}


impl Debug for ParseFailure
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        f.debug_struct("ParseFailure")
            .field("message", &self.message)
            .field("cause", &self.cause)
            .field("suppressed", &self.suppressed)
            .finish()
    }
}


impl ParseFailure
{
    /// Create a bare failure with no message and no cause.
    pub fn new() -> ParseFailure
    {
        ParseFailure::default()
    }

    /// Create a failure with a message and no cause.
    pub fn with_message(message: impl Into<String>) -> ParseFailure
    {
        ParseFailure
            {
                message: Some(message.into()),
                cause: None,
                suppressed: Vec::new()
            }
    }

    /// Attach the error that caused this failure.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> ParseFailure
    {
        self.cause = Some(cause.into());
        self
    }

    /// Record a failure that happened while this one was being handled.
    pub fn add_suppressed(&mut self, failure: ParseFailure)
    {
        self.suppressed.push(failure);
    }

    /// The description of the failure, if any.
    pub fn message(&self) -> Option<&str>
    {
        self.message.as_deref()
    }

    /// The underlying cause, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)>
    {
        self.cause.as_deref()
    }

    /// Failures suppressed in favour of this one.
    pub fn suppressed(&self) -> &[ParseFailure]
    {
        &self.suppressed
    }
}



/// Any error that occurs while reading words.  Every variant carries the location description of
/// the innermost source at the point of failure.
#[derive(Debug, Error)]
pub enum ReadError
{
    /// A source couldn't be read.
    #[error("{location}: I/O error: {source}")]
    Io
    {
        location: String,
        #[source]
        source: io::Error
    },

    /// The text itself is malformed, for example an unterminated quote.
    #[error("{location}: {failure}")]
    Syntax
    {
        location: String,
        #[source]
        failure: ParseFailure
    },

    /// An include reference couldn't be turned into a readable source.
    #[error("{location}: Can't include {reference}: {failure}")]
    Include
    {
        location: String,
        reference: String,
        #[source]
        failure: ParseFailure
    }
}


impl ReadError
{
    /// The location description of the source that was active when the error occurred.
    pub fn location(&self) -> &str
    {
        match self
        {
            ReadError::Io { location, .. } => location,
            ReadError::Syntax { location, .. } => location,
            ReadError::Include { location, .. } => location
        }
    }

    /// Create a syntax error and wrap it in a Result::Err.
    pub fn syntax_as_result<T>(location: String, message: impl Into<String>) -> Result<T>
    {
        Err(ReadError::Syntax { location, failure: ParseFailure::with_message(message) })
    }
}
