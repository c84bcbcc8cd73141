/// Attribute list of an element, in document order.
///
/// Keys are qualified names exactly as written in the source (`text:style-name`),
/// values are already unescaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Value of the first attribute named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A single markup event of the content stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Element opened (self-closing elements produce an `Open` followed by a `Close`).
    Open { name: String, attributes: Attributes },
    /// Character data between tags.
    Text(String),
    /// Element closed.
    Close { name: String },
}

impl Event {
    pub fn open(name: impl Into<String>, attributes: Attributes) -> Self {
        Event::Open {
            name: name.into(),
            attributes,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Event::Text(text.into())
    }

    pub fn close(name: impl Into<String>) -> Self {
        Event::Close { name: name.into() }
    }
}
