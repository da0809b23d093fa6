/// Module for walking a single line of text character by character.
pub mod line_buffer;

/// Module for turning a raw line of configuration text into its words.  Handles quoting, escapes
/// and comments.
pub mod splitting;

/// Module for parsing include references and resolving them against a source's base directory or
/// base URL.
pub mod reference;
