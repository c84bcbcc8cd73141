use std::collections::HashMap;

/// Visual kind of a list, selecting the LaTeX environment it is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListKind {
    #[default]
    Bullet,
    Number,
}

impl ListKind {
    /// LaTeX environment name for this kind of list.
    pub fn environment(self) -> &'static str {
        match self {
            ListKind::Bullet => "itemize",
            ListKind::Number => "enumerate",
        }
    }
}

/// Named list styles declared by the document, resolved to their list kind.
///
/// Entries start out unresolved and read as [`ListKind::Bullet`] until a
/// level-one bullet or number style of the declaration settles them.
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    styles: HashMap<String, Option<ListKind>>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` with an unresolved kind. Existing entries are left untouched.
    pub fn declare(&mut self, name: &str) {
        if !self.styles.contains_key(name) {
            self.styles.insert(name.to_string(), None);
        }
    }

    /// Set the kind of `name`, creating the entry if needed.
    pub fn set_kind(&mut self, name: &str, kind: ListKind) {
        self.styles.insert(name.to_string(), Some(kind));
    }

    /// Resolved kind of `name`; unknown, unresolved and absent names read as bullets.
    pub fn lookup(&self, name: Option<&str>) -> ListKind {
        name.and_then(|name| self.styles.get(name).copied().flatten())
            .unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
