// Types representing a LaTeX document tree

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
