// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use pico_args::Arguments;

const HELP: &str = "\
vd2svg converts an Android VectorDrawable XML resource into an SVG file.

USAGE:
  vd2svg [OPTIONS] <in-xml> <out-svg>

OPTIONS:
  -h, --help        Prints help information
  -V, --version     Prints version information
  --indent INDENT   Sets the XML nodes indent
                    [values: none, 0, 1, 2, 3, 4, tabs] [default: 2]
  --quiet           Disables warnings

ARGS:
  <in-xml>          Input file. Must end with .xml
  <out-svg>         Output file. Must end with .svg
";

#[derive(Debug)]
struct Args {
    indent: xmlwriter::Indent,
    quiet: bool,

    input: PathBuf,
    output: PathBuf,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    let args = Args {
        indent: input
            .opt_value_from_fn("--indent", parse_indent)?
            .unwrap_or(xmlwriter::Indent::Spaces(2)),
        quiet: input.contains("--quiet"),

        input: input.free_from_str()?,
        output: input.free_from_str()?,
    };

    if !input.finish().is_empty() {
        print!("{}", HELP);
        process::exit(0);
    }

    Ok(args)
}

fn parse_indent(s: &str) -> Result<xmlwriter::Indent, String> {
    let indent = match s {
        "none" => xmlwriter::Indent::None,
        "0" => xmlwriter::Indent::Spaces(0),
        "1" => xmlwriter::Indent::Spaces(1),
        "2" => xmlwriter::Indent::Spaces(2),
        "3" => xmlwriter::Indent::Spaces(3),
        "4" => xmlwriter::Indent::Spaces(4),
        "tabs" => xmlwriter::Indent::Tabs,
        _ => return Err("invalid INDENT value".to_string()),
    };

    Ok(indent)
}

fn main() {
    let args = match collect_args() {
        Ok(v) => v,
        Err(pico_args::Error::MissingArgument) => {
            print!("{}", HELP);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            log::set_max_level(log::LevelFilter::Warn);
        }
    }

    let input = absolute(&args.input);
    let output = absolute(&args.output);

    println!("output={}", output.display());

    if let Err(e) = validate_paths(&input, &output) {
        eprintln!("{}", e);
        process::exit(1);
    }

    if let Err(e) = process(&args, &input, &output) {
        eprintln!("Error: {}.", e);
        process::exit(2);
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

fn validate_paths(input: &Path, output: &Path) -> Result<(), String> {
    if !input.is_file() {
        return Err(format!("Input is not a file: {}", input.display()));
    }

    if !file_name_ends_with(input, ".xml") {
        return Err(format!("Input does not end with .xml: {}", input.display()));
    }

    if !output.parent().map_or(false, Path::is_dir) {
        return Err(format!(
            "Output directory does not exist: {}",
            output.display()
        ));
    }

    if !file_name_ends_with(output, ".svg") {
        return Err(format!(
            "Output file does not end with .svg: {}",
            output.display()
        ));
    }

    Ok(())
}

fn file_name_ends_with(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(std::ffi::OsStr::to_str)
        .map_or(false, |name| name.ends_with(suffix))
}

fn process(args: &Args, input: &Path, output: &Path) -> Result<(), String> {
    let xml = std::fs::read(input).map_err(|_| "failed to read the input file".to_string())?;
    let drawable = vd2svg::Drawable::from_data(&xml).map_err(|e| e.to_string())?;

    let opt = vd2svg::XmlOptions {
        indent: args.indent,
        ..vd2svg::XmlOptions::default()
    };

    let svg = drawable.to_string(&opt);

    let mut file =
        File::create(output).map_err(|_| "failed to create the output file".to_string())?;
    file.write_all(svg.as_bytes())
        .map_err(|_| "failed to write to the output file".to_string())?;

    Ok(())
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, record.args()),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, record.args()),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, record.args()),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, record.args()),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, record.args()),
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_values() {
        assert_eq!(parse_indent("none"), Ok(xmlwriter::Indent::None));
        assert_eq!(parse_indent("2"), Ok(xmlwriter::Indent::Spaces(2)));
        assert_eq!(parse_indent("tabs"), Ok(xmlwriter::Indent::Tabs));
        assert!(parse_indent("5").is_err());
        assert!(parse_indent("two").is_err());
    }

    #[test]
    fn file_name_suffixes() {
        assert!(file_name_ends_with(Path::new("icon.xml"), ".xml"));
        assert!(file_name_ends_with(Path::new("/tmp/.xml"), ".xml"));
        assert!(!file_name_ends_with(Path::new("icon.xml.bak"), ".xml"));
        assert!(!file_name_ends_with(Path::new("iconxml"), ".xml"));
        assert!(!file_name_ends_with(Path::new("icon.svg"), ".xml"));
    }
}
