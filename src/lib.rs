/// Module for the text level processing of configuration lines and include references.
pub mod lang;

/// Module for the different origins configuration text can be read from.
pub mod sources;

/// Module for the word reader, its settings and its error reporting.
pub mod runtime;

pub use lang::{
    reference::SourceReference,
    splitting::SplitRules,
};
pub use runtime::{
    config::ReaderConfig,
    error::{ParseFailure, ReadError, Result},
    reader::WordReader,
};
pub use sources::{
    BaseContext, WordSource,
    argument::ArgumentWordSource,
    file::FileWordSource,
    line::LineWordSource,
};
