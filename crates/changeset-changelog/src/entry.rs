use serde::Serialize;

/// Changelog section for one released package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogEntry {
    pub title: String,
    pub body: String,
}

impl ChangelogEntry {
    #[must_use]
    pub fn new(new_version: &str, body: impl Into<String>) -> Self {
        Self {
            title: format!("## {new_version}"),
            body: body.into(),
        }
    }

    /// Title and body joined the way they are written to a changelog file.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        if self.body.is_empty() {
            format!("{}\n", self.title)
        } else {
            format!("{}\n\n{}", self.title, self.body)
        }
    }
}
