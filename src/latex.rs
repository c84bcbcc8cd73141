use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::event::{Attributes, Event};
use crate::style::{ListKind, StyleTable};

/// Fixed document wrapper written before the first event.
pub const PREAMBLE: &str = "\\documentclass{article}\n\\begin{document}\n";
/// Fixed document wrapper written after the last event.
pub const POSTAMBLE: &str = "\\end{document}\n";

// Element names
const HEADING: &str = "text:h";
const LIST: &str = "text:list";
const PARAGRAPH: &str = "text:p";
const SPAN: &str = "text:span";
const SOFT_PAGE_BREAK: &str = "text:soft-page-break";
const LIST_STYLE: &str = "text:list-style";
const LEVEL_STYLE_BULLET: &str = "text:list-level-style-bullet";
const LEVEL_STYLE_NUMBER: &str = "text:list-level-style-number";

// Attribute names
const OUTLINE_LEVEL: &str = "text:outline-level";
const LIST_STYLE_NAME: &str = "text:style-name";
const STYLE_NAME: &str = "style:name";
const LEVEL: &str = "text:level";

/// What the next run of character data is formatted as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    #[default]
    None,
    Section,
    Subsection,
    Subsubsection,
    ListItem,
}

impl Command {
    fn from_outline_level(level: Option<&str>) -> Self {
        match level.and_then(|l| l.trim().parse::<u32>().ok()) {
            Some(2) => Command::Subsection,
            Some(3) => Command::Subsubsection,
            _ => Command::Section,
        }
    }
}

/// Whether text is currently emitted inside a list body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Default,
    List,
}

/// Formatting context threaded through every event handler of one conversion.
#[derive(Debug, Default)]
pub struct ConversionState {
    pending_command: Command,
    environment: Environment,
    // Kinds of the currently open lists, innermost last
    lists: Vec<ListKind>,
    // Name of the list-style declaration being read, if any
    open_style_name: Option<String>,
}

impl ConversionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_command(&self) -> Command {
        self.pending_command
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn list_depth(&self) -> usize {
        self.lists.len()
    }

    /// Kind of the innermost open list.
    pub fn active_list_kind(&self) -> Option<ListKind> {
        self.lists.last().copied()
    }

    pub fn open_style_name(&self) -> Option<&str> {
        self.open_style_name.as_deref()
    }
}

/// Convert a complete event stream to a LaTeX document written to `sink`.
///
/// The sink is handed back once the closing wrapper has been written and flushed.
pub fn write_latex<W: Write>(events: &[Event], mut sink: W) -> Result<W> {
    let mut styles = StyleTable::new();
    let mut state = ConversionState::new();

    sink.write_all(PREAMBLE.as_bytes()).map_err(Error::Sink)?;
    for event in events {
        process_event(event, &mut state, &mut styles, &mut sink).map_err(Error::Sink)?;
    }
    sink.write_all(POSTAMBLE.as_bytes()).map_err(Error::Sink)?;
    sink.flush().map_err(Error::Sink)?;

    log::debug!(
        "converted {} events, {} list styles declared",
        events.len(),
        styles.len()
    );
    Ok(sink)
}

/// Apply a single event to the conversion state, writing any resulting LaTeX to `out`.
pub fn process_event<W: Write>(
    event: &Event,
    state: &mut ConversionState,
    styles: &mut StyleTable,
    out: &mut W,
) -> io::Result<()> {
    match event {
        Event::Open { name, attributes } => start(name, attributes, state, styles, out),
        Event::Text(text) => characters(text, state, out),
        Event::Close { name } => end(name, state, out),
    }
}

fn start<W: Write>(
    name: &str,
    attributes: &Attributes,
    state: &mut ConversionState,
    styles: &mut StyleTable,
    out: &mut W,
) -> io::Result<()> {
    match name {
        HEADING => {
            let level = attributes.get(OUTLINE_LEVEL);
            if level.is_none() {
                log::debug!("heading without {OUTLINE_LEVEL}, treating it as a section");
            }
            state.pending_command = Command::from_outline_level(level);
        }
        LIST => {
            let kind = styles.lookup(attributes.get(LIST_STYLE_NAME));
            writeln!(out, "\\begin{{{}}}", kind.environment())?;
            state.environment = Environment::List;
            state.lists.push(kind);
        }
        PARAGRAPH | SPAN => {
            state.pending_command = match state.environment {
                Environment::List => Command::ListItem,
                Environment::Default => Command::None,
            };
        }
        SOFT_PAGE_BREAK => {}
        LIST_STYLE => match attributes.get(STYLE_NAME) {
            Some(style) => {
                styles.declare(style);
                state.open_style_name = Some(style.to_string());
            }
            None => log::debug!("{LIST_STYLE} without {STYLE_NAME} ignored"),
        },
        LEVEL_STYLE_BULLET | LEVEL_STYLE_NUMBER if attributes.get(LEVEL) == Some("1") => {
            let kind = if name == LEVEL_STYLE_NUMBER {
                ListKind::Number
            } else {
                ListKind::Bullet
            };
            match state.open_style_name.as_deref() {
                Some(style) => styles.set_kind(style, kind),
                None => log::warn!("<{name}> outside of a list style declaration ignored"),
            }
        }
        _ => state.pending_command = Command::None,
    }
    Ok(())
}

fn characters<W: Write>(text: &str, state: &ConversionState, out: &mut W) -> io::Result<()> {
    match state.pending_command {
        Command::Section => wrap(out, "\\section{", text, "}\n"),
        Command::Subsection => wrap(out, "\\subsection{", text, "}\n"),
        Command::Subsubsection => wrap(out, "\\subsubsection{", text, "}\n"),
        Command::ListItem => wrap(out, "\\item ", text, "\n"),
        Command::None => out.write_all(text.as_bytes()),
    }
}

fn end<W: Write>(name: &str, state: &mut ConversionState, out: &mut W) -> io::Result<()> {
    match name {
        LIST => {
            let Some(kind) = state.lists.pop() else {
                log::warn!("</{LIST}> without an open list ignored");
                return Ok(());
            };
            write!(out, "\\end{{{}}}\n\n", kind.environment())?;
            if state.lists.is_empty() {
                state.environment = Environment::Default;
            }
        }
        PARAGRAPH if state.environment == Environment::Default => out.write_all(b"\n\n")?,
        LIST_STYLE => state.open_style_name = None,
        _ => {}
    }
    Ok(())
}

// Text goes out as raw bytes between the markup, never through a format string
fn wrap<W: Write>(out: &mut W, before: &str, text: &str, after: &str) -> io::Result<()> {
    out.write_all(before.as_bytes())?;
    out.write_all(text.as_bytes())?;
    out.write_all(after.as_bytes())
}
