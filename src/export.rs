// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use xmlwriter::{Indent, XmlWriter};

use crate::{Drawable, Path};

/// XML writing options.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct XmlOptions {
    /// Use single quote marks instead of double quote.
    ///
    /// # Examples
    ///
    /// `<path d="M 10 20"/>` vs `<path d='M 10 20'/>`
    ///
    /// Default: disabled
    pub use_single_quote: bool,

    /// Set XML nodes indention.
    ///
    /// Default: 2 spaces
    pub indent: Indent,

    /// Set XML attributes indention.
    ///
    /// Default: `None`
    pub attributes_indent: Indent,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            use_single_quote: false,
            indent: Indent::Spaces(2),
            attributes_indent: Indent::None,
        }
    }
}

impl Drawable {
    /// Writes the drawable as an SVG string.
    ///
    /// The drawable is not modified; repeated calls with the same
    /// options produce identical output.
    pub fn to_string(&self, opt: &XmlOptions) -> String {
        convert(self, opt)
    }
}

pub(crate) fn convert(drawable: &Drawable, opt: &XmlOptions) -> String {
    let mut xml = XmlWriter::new(xmlwriter::Options {
        use_single_quote: opt.use_single_quote,
        indent: opt.indent,
        attributes_indent: opt.attributes_indent,
    });

    xml.write_declaration();

    xml.start_element("svg");
    xml.write_attribute_fmt(
        "viewBox",
        format_args!("0 0 {} {}", drawable.width, drawable.height),
    );
    xml.write_attribute("xmlns", "http://www.w3.org/2000/svg");
    xml.write_attribute("xmlns:xlink", "http://www.w3.org/1999/xlink");

    // Groups first, then top-level paths, regardless of their
    // relative positions in the source document.
    for group in &drawable.groups {
        xml.start_element("g");
        for path in &group.paths {
            write_path(path, &mut xml);
        }
        xml.end_element();
    }

    for path in &drawable.paths {
        write_path(path, &mut xml);
    }

    xml.end_document()
}

fn write_path(path: &Path, xml: &mut XmlWriter) {
    xml.start_element("path");

    if let Some(ref fill) = path.fill {
        xml.write_attribute("fill", fill);
    }

    if let Some(ref stroke) = path.stroke {
        xml.write_attribute("stroke", stroke);
    }

    if let Some(ref stroke_width) = path.stroke_width {
        xml.write_attribute("stroke-width", stroke_width);
    }

    xml.write_attribute("d", &path.data);
    xml.end_element();
}
