pub mod errors;
pub mod types;

pub use errors::{GlasspaneError, MalformedSourceError, UnsupportedOperationError};
pub use types::{Capability, Style};

pub type Result<T> = std::result::Result<T, GlasspaneError>;
