// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;
use thiserror::Error;

/// The error type for oauthsign operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request cannot be signed because host, path or method is absent.
    ///
    /// The request must not be sent.
    MissingRequiredField,

    /// A parameter value has no canonical string form.
    UnsupportedParameterValue,

    /// The signing primitive rejected the key material.
    InvalidKeyMaterial,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error means the request could not be signed at all.
    pub fn is_missing_field(&self) -> bool {
        self.kind == ErrorKind::MissingRequiredField
    }
}

// Convenience constructors
impl Error {
    /// Create a missing required field error
    pub fn missing_required_field(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingRequiredField, message)
    }

    /// Create an unsupported parameter value error
    pub fn unsupported_parameter_value(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedParameterValue, message)
    }

    /// Create an invalid key material error
    pub fn invalid_key_material(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidKeyMaterial, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingRequiredField => write!(f, "missing required field"),
            ErrorKind::UnsupportedParameterValue => write!(f, "unsupported parameter value"),
            ErrorKind::InvalidKeyMaterial => write!(f, "invalid key material"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
