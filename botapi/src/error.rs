use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// An entry contained both a field table and a parameter table, so it can be neither a type
    /// nor a method.
    #[error("entry {entry:?} in section {section:?} has both a field and a parameter table")]
    AmbiguousEntry { section: String, entry: String },
    #[error("no element with id {0:?} found in the document")]
    ContentRootNotFound(String),
}
