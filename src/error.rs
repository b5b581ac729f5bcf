//! Error types for value conversion and output writing.
//!
//! Errors here come from the serde bridge (a type that cannot be expressed
//! as an [`AnnoValue`](crate::AnnoValue)) or from a failing writer. The
//! renderer itself never fails: malformed overlays and unknown value kinds
//! degrade to "no comment" and text rendering respectively, so
//! [`Renderer::stringify`](crate::Renderer::stringify) returns a plain
//! `String`.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Serialize;
//! use serde_anno::{to_string, Error};
//!
//! #[derive(Serialize)]
//! enum Payload {
//!     Blob(Vec<u8>),
//! }
//!
//! // Data-carrying enum variants have no value representation.
//! let result = to_string(&Payload::Blob(vec![1, 2]));
//! assert!(matches!(result, Err(Error::UnsupportedType(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors from value conversion and writing.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(String),

    /// Type that cannot be represented as a value tree
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unsupported type error for types that have no value representation.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_anno::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
