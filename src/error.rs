// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// List of all errors.
#[derive(Debug)]
pub enum Error {
    /// Only UTF-8 content are supported.
    NotAnUtf8Str,

    /// The document has no `vector` element.
    NoVectorNode,

    /// A viewport dimension is not a non-negative integer.
    ///
    /// The VectorDrawable schema stores `viewportWidth`/`viewportHeight`
    /// as integers, therefore fractional and negative values are rejected.
    InvalidViewport(String),

    /// Failed to parse an XML data.
    ParsingFailed(roxmltree::Error),
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::ParsingFailed(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::NotAnUtf8Str => {
                write!(f, "provided data has not an UTF-8 encoding")
            }
            Error::NoVectorNode => {
                write!(f, "the document has no 'vector' element")
            }
            Error::InvalidViewport(ref value) => {
                write!(f, "invalid viewport dimension '{}'", value)
            }
            Error::ParsingFailed(ref e) => {
                write!(f, "XML data parsing failed cause {}", e)
            }
        }
    }
}

impl std::error::Error for Error {}
