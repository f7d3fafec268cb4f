use thiserror::Error;

/// Problems encountered while assembling or rendering a Document. The first
/// three are violations of the preamble rules; they abort construction and
/// are never recovered from internally.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Document class is specified more than once (rejected '{name}')")]
    DuplicateDeclaration { name: String },

    #[error("Package declaration can be only in preamble (rejected '{package}')")]
    OrderingViolation { package: String },

    #[error("Document class is not specified")]
    MissingDeclaration,

    #[error("Failed writing output: {0}")]
    Io(#[from] std::io::Error),
}
