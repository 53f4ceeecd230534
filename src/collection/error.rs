//! Error code related to data collection.

use std::{borrow::Cow, num::ParseIntError};

use thiserror::Error;

/// A type alias for handling collection-related errors.
pub type CollectionResult<T> = std::result::Result<T, CollectionError>;

/// The errors that can happen while sampling CPU time or driving the device tools.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// An error when there is an IO exception.
    #[error(transparent)]
    InvalidIo(#[from] std::io::Error),
    /// An error to represent errors around parsing.
    #[error("Parsing error, {0}")]
    Parsing(Cow<'static, str>),
    /// A field of the statistics line that is not an integer.
    #[error("Parsing error, field '{field}' is not an integer")]
    InvalidField {
        field: String,
        #[source]
        source: ParseIntError,
    },
    /// An external tool that could not be started at all.
    #[error("source: {0}, reason: {1}")]
    Spawn(Cow<'static, str>, std::io::Error),
}

impl CollectionError {
    /// A parsing error.
    pub fn parsing<C: Into<Cow<'static, str>>>(reason: C) -> Self {
        Self::Parsing(reason.into())
    }
}
