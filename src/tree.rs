// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Implementation of the drawable tree.

use crate::Error;

/// A parsed vector drawable.
///
/// Constructed by the parser and immutable afterwards.
/// The drawable exclusively owns its groups and paths.
#[derive(Clone, Debug)]
pub struct Drawable {
    /// Viewport width.
    ///
    /// Zero when the source has no `android:viewportWidth`.
    pub width: u32,

    /// Viewport height.
    ///
    /// Zero when the source has no `android:viewportHeight`.
    pub height: u32,

    /// Top-level paths, in document order.
    pub paths: Vec<Path>,

    /// Path groups, in document order.
    pub groups: Vec<Group>,
}

impl Drawable {
    /// Parses a `Drawable` from XML data.
    pub fn from_data(data: &[u8]) -> Result<Self, Error> {
        let text = std::str::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)?;
        Self::from_str(text)
    }

    /// Parses a `Drawable` from an XML string.
    pub fn from_str(text: &str) -> Result<Self, Error> {
        let doc = roxmltree::Document::parse(text)?;
        Self::from_xmltree(&doc)
    }

    /// Parses a `Drawable` from a `roxmltree::Document`.
    pub fn from_xmltree(doc: &roxmltree::Document) -> Result<Self, Error> {
        crate::parser::parse(doc)
    }
}

/// A group of paths.
///
/// The parser never produces an empty group.
#[derive(Clone, Debug)]
pub struct Group {
    /// Group paths, in document order.
    pub paths: Vec<Path>,
}

/// A vector path.
#[derive(Clone, Debug)]
pub struct Path {
    /// A path data string.
    ///
    /// Carried through verbatim, without re-parsing.
    pub data: String,

    /// Fill color. A `#`-prefixed hex string.
    pub fill: Option<String>,

    /// Stroke color. A `#`-prefixed hex string.
    pub stroke: Option<String>,

    /// Stroke width. Carried through verbatim.
    pub stroke_width: Option<String>,
}
