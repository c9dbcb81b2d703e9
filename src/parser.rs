// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{Drawable, Error, Group, Path};

const ANDROID_NS: &str = "http://schemas.android.com/apk/res/android";

pub(crate) fn parse(doc: &roxmltree::Document) -> Result<Drawable, Error> {
    let vector = doc
        .descendants()
        .find(|n| n.has_tag_name("vector"))
        .ok_or(Error::NoVectorNode)?;

    let width = parse_viewport_dimension(vector, "viewportWidth")?;
    let height = parse_viewport_dimension(vector, "viewportHeight")?;

    let mut paths = Vec::new();
    let mut groups = Vec::new();

    for node in vector.children() {
        if node.has_tag_name("group") {
            // Only direct `path` children are collected.
            // Nested groups and transforms are not supported.
            let group_paths: Vec<Path> = node.children().filter_map(parse_path).collect();
            if !group_paths.is_empty() {
                groups.push(Group { paths: group_paths });
            }
        } else if let Some(path) = parse_path(node) {
            paths.push(path);
        }
    }

    Ok(Drawable {
        width,
        height,
        paths,
        groups,
    })
}

fn parse_viewport_dimension(node: roxmltree::Node, name: &str) -> Result<u32, Error> {
    match node.attribute((ANDROID_NS, name)) {
        Some(value) => value
            .parse()
            .map_err(|_| Error::InvalidViewport(value.to_string())),
        None => Ok(0),
    }
}

fn parse_path(node: roxmltree::Node) -> Option<Path> {
    if !node.has_tag_name("path") {
        return None;
    }

    let data = match node.attribute((ANDROID_NS, "pathData")) {
        Some(data) => data.to_string(),
        None => {
            log::warn!("Skipping a 'path' element without 'android:pathData'.");
            return None;
        }
    };

    Some(Path {
        data,
        fill: parse_color(node, "fillColor"),
        stroke: parse_color(node, "strokeColor"),
        stroke_width: node
            .attribute((ANDROID_NS, "strokeWidth"))
            .map(str::to_string),
    })
}

// Only literal hex colors can be converted.
// Resource references like `@color/accent` require a resource table.
fn parse_color(node: roxmltree::Node, name: &str) -> Option<String> {
    let value = node.attribute((ANDROID_NS, name))?;
    if !value.starts_with('#') {
        log::warn!("Unsupported 'android:{}' value: '{}'.", name, value);
        return None;
    }

    Some(value.to_string())
}
