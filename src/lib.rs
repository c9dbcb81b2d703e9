// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`vd2svg` converts an [Android VectorDrawable] XML resource into
a [Scalable Vector Graphics] document.

VectorDrawable assets describe resolution-independent vector art using
the same path grammar as SVG, but wrapped into the Android resource
schema. This crate extracts the drawable's viewport, groups and paths
into a small in-memory tree ([`Drawable`]) and writes that tree back
out as a standalone, human-readable SVG.

## Key features of the produced SVG

- The viewport is preserved as-is: `viewBox="0 0 W H"`
- Group/path nesting is preserved, with groups emitted before
  top-level paths
- Path data and hex colors pass through unchanged
- Pretty-printed with a configurable indent

## Limitations

- Resource references like `@color/accent` cannot be resolved without
  an Android resource table and are dropped
- Group transforms, fill/stroke alphas and gradients are not converted
- Nested groups are not flattened; only a group's direct `path`
  children are collected

[Android VectorDrawable]: https://developer.android.com/reference/android/graphics/drawable/VectorDrawable
[Scalable Vector Graphics]: https://en.wikipedia.org/wiki/Scalable_Vector_Graphics
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

mod error;
mod export;
mod parser;
mod tree;

pub use crate::error::Error;
pub use crate::export::XmlOptions;
pub use crate::tree::{Drawable, Group, Path};

pub use roxmltree;
pub use xmlwriter::Indent;
