/// Module for defining the errors reported while reading words.
pub mod error;

/// Module for the settings that control splitting and include handling.
pub mod config;

/// Module for the word reader itself.  It manages the stack of sources and the include mechanism.
pub mod reader;
