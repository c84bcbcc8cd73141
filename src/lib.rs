mod config;
mod error;
mod event;
mod latex;
mod package;
mod parser;
mod style;

pub use config::{Config, OutputConfig, PackageConfig};
pub use error::{Error, Result};
pub use event::{Attributes, Event};
pub use latex::{
    Command, ConversionState, Environment, POSTAMBLE, PREAMBLE, process_event, write_latex,
};
pub use style::{ListKind, StyleTable};

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Parse the XML content of an ODT document into markup events.
pub fn parse(xml: &str) -> Result<Vec<Event>> {
    parser::parse(xml)
}

/// Convert ODT content XML to LaTeX, writing into `sink`.
///
/// Nothing is written when the XML is malformed.
pub fn convert_xml<W: Write>(xml: &str, sink: W) -> Result<W> {
    let events = parse(xml)?;
    write_latex(&events, sink)
}

/// Convert ODT content XML to a LaTeX document string.
pub fn xml_to_latex(xml: &str) -> Result<String> {
    let out = convert_xml(xml, Vec::new())?;
    String::from_utf8(out).map_err(|e| Error::Sink(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Convert the ODT file at `input` to a LaTeX document string.
pub fn convert_odt(input: &Path, config: &Config) -> Result<String> {
    let xml = package::read_part(input, &config.package.content_part)?;
    xml_to_latex(&xml)
}

/// Convert the ODT file at `input` into `<out_dir>/<output.file_name>`.
///
/// Returns the path of the written LaTeX file.
pub fn convert_to_dir(input: &Path, out_dir: &Path, config: &Config) -> Result<PathBuf> {
    let xml = package::read_part(input, &config.package.content_part)?;
    let events = parse(&xml)?;

    if !out_dir.is_dir() {
        if !config.output.create_dir {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("output directory {} does not exist", out_dir.display()),
            )));
        }
        log::info!("Output directory does not exist, creating {}", out_dir.display());
        fs::create_dir_all(out_dir)?;
    }

    let output = out_dir.join(&config.output.file_name);
    let file = File::create(&output)?;
    write_latex(&events, BufWriter::new(file))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CONTENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"><office:automatic-styles><text:list-style style:name="L1"><text:list-level-style-number text:level="1" style:num-format="1"/><text:list-level-style-bullet text:level="2" text:bullet-char="-"/></text:list-style><text:list-style style:name="L2"><text:list-level-style-bullet text:level="1" text:bullet-char="*"/></text:list-style></office:automatic-styles><office:body><office:text><text:h text:outline-level="1">Intro</text:h><text:p>Plain &amp; simple 50%</text:p><text:list text:style-name="L1"><text:list-item><text:p>first</text:p><text:list text:style-name="L2"><text:list-item><text:p>inner</text:p></text:list-item></text:list></text:list-item><text:list-item><text:p>second</text:p></text:list-item></text:list><text:soft-page-break/><text:h text:outline-level="2">Details</text:h><text:p>Done</text:p></office:text></office:body></office:document-content>"#;

    #[test]
    fn full_document() {
        let expected = concat!(
            "\\documentclass{article}\n",
            "\\begin{document}\n",
            "\\section{Intro}\n",
            "Plain & simple 50%\n\n",
            "\\begin{enumerate}\n",
            "\\item first\n",
            "\\begin{itemize}\n",
            "\\item inner\n",
            "\\end{itemize}\n\n",
            "\\item second\n",
            "\\end{enumerate}\n\n",
            "\\subsection{Details}\n",
            "Done\n\n",
            "\\end{document}\n",
        );
        assert_eq!(xml_to_latex(CONTENT).unwrap(), expected);
    }

    #[test]
    fn malformed_input_writes_nothing() {
        let mut sink = Vec::new();
        let err = convert_xml("<office:text><text:p>open", &mut sink).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
        assert!(sink.is_empty());
    }
}
