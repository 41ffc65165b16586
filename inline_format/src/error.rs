// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::borrow::Cow;
use std::fmt;

/// Error type for dynamic formatter dispatch.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the name that failed to resolve, or for
/// [`ErrorKind::MismatchedValue`] the accessor that rejected its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    name: Cow<'static, str>,
    expected: Option<&'static str>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The formatter or accessor name the error refers to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// For [`ErrorKind::MismatchedValue`], a description of the value the accessor takes.
    pub fn expected(&self) -> Option<&'static str> {
        self.expected
    }

    pub(crate) fn unknown_formatter(name: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownFormatter,
            name: Cow::Owned(name.to_owned()),
            expected: None,
        }
    }

    pub(crate) fn unknown_accessor(name: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownAccessor,
            name: Cow::Owned(name.to_owned()),
            expected: None,
        }
    }

    /// A setter was called with a value it cannot use.
    pub fn mismatched_value(accessor: &'static str, expected: &'static str) -> Self {
        Self {
            kind: ErrorKind::MismatchedValue,
            name: Cow::Borrowed(accessor),
            expected: Some(expected),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::UnknownFormatter => write!(f, "no formatter named {:?}", self.name),
            ErrorKind::UnknownAccessor => {
                write!(f, "formatter has no accessor named {:?}", self.name)
            }
            ErrorKind::MismatchedValue => write!(
                f,
                "{} expects {}",
                self.name,
                self.expected.unwrap_or("a different value")
            ),
        }
    }
}

impl std::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// No formatter is registered under the requested name.
    UnknownFormatter,

    /// The formatter has no getter or setter with the requested name.
    UnknownAccessor,

    /// A setter received a value of the wrong kind.
    MismatchedValue,
}
