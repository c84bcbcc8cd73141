use std::str;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event as XmlEvent};

use crate::error::{Error, Result};
use crate::event::{Attributes, Event};

/// Parse a UTF-8 XML document into a list of markup events.
///
/// The whole document is read before anything is returned, so malformed input
/// is reported without a single event having been handed to the converter.
pub fn parse(xml: &str) -> Result<Vec<Event>> {
    let mut reader = Reader::from_str(xml);
    let config = reader.config_mut();
    config.expand_empty_elements = true;
    config.check_end_names = true;

    let mut state = ParseState::default();

    loop {
        let event = reader.read_event().map_err(|e| {
            Error::MalformedInput(format!("{e} (at byte {})", reader.buffer_position()))
        })?;

        match event {
            XmlEvent::Start(start) => {
                if state.root_closed {
                    return Err(Error::MalformedInput(
                        "junk after document element".to_string(),
                    ));
                }
                state.flush_text();
                let name = utf8(start.name().as_ref())?.to_string();
                let attributes = read_attributes(&start)?;
                state.open.push(name.clone());
                state.events.push(Event::Open { name, attributes });
            }
            XmlEvent::End(end) => {
                state.flush_text();
                let qname = end.name();
                let name = utf8(qname.as_ref())?;
                // Mismatched names are already rejected by the reader
                if state.open.pop().is_none() {
                    return Err(Error::MalformedInput(format!(
                        "unexpected </{name}> outside of any element"
                    )));
                }
                state.root_closed = state.open.is_empty();
                state.events.push(Event::close(name));
            }
            XmlEvent::Text(text) => {
                let text = utf8(&text)?;
                state.push_text(text)?;
            }
            XmlEvent::CData(data) => {
                let data = utf8(&data)?;
                state.push_text(data)?;
            }
            XmlEvent::GeneralRef(reference) => {
                let name = utf8(&reference)?;
                let raw = format!("&{name};");
                let resolved = unescape(&raw)
                    .map_err(|e| Error::MalformedInput(format!("entity {raw}: {e}")))?;
                state.push_text(&resolved)?;
            }
            XmlEvent::Eof => break,
            // Declarations, comments, processing instructions and doctypes carry no content
            _ => {}
        }
    }

    if let Some(open) = state.open.last() {
        return Err(Error::MalformedInput(format!(
            "unexpected end of document, <{open}> is not closed"
        )));
    }
    if state.events.is_empty() {
        return Err(Error::MalformedInput("document has no root element".to_string()));
    }

    log::debug!("parsed {} markup events", state.events.len());
    Ok(state.events)
}

#[derive(Default)]
struct ParseState {
    events: Vec<Event>,
    // Names of the currently open elements, innermost last
    open: Vec<String>,
    // Set once the root element has been closed
    root_closed: bool,
    // Character data not yet emitted; chunks within one run are joined
    text: String,
}

impl ParseState {
    fn push_text(&mut self, chunk: &str) -> Result<()> {
        if !self.open.is_empty() {
            self.text.push_str(chunk);
            return Ok(());
        }
        // Only whitespace may surround the root element
        if chunk.chars().all(char::is_whitespace) {
            Ok(())
        } else if self.root_closed {
            Err(Error::MalformedInput("junk after document element".to_string()))
        } else {
            Err(Error::MalformedInput("text before the root element".to_string()))
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.events.push(Event::Text(text));
        }
    }
}

fn read_attributes(start: &BytesStart) -> Result<Attributes> {
    let mut attributes = Attributes::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::MalformedInput(format!("invalid attribute: {e}")))?;
        let key = utf8(attr.key.as_ref())?;
        let raw = utf8(&attr.value)?;
        let value = unescape(raw)
            .map_err(|e| Error::MalformedInput(format!("attribute {key}: {e}")))?;
        attributes.push(key, value);
    }
    Ok(attributes)
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    str::from_utf8(bytes).map_err(|e| Error::MalformedInput(format!("invalid UTF-8: {e}")))
}
