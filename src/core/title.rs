//! Window title handling

/// Window title made of a fixed base and the current document name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTitle {
    base: String,
    document: Option<String>,
}

impl WindowTitle {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            document: None,
        }
    }

    /// Replace the document part of the title
    pub fn set_document(&mut self, name: impl Into<String>) {
        self.document = Some(name.into());
    }

    /// Full title text
    pub fn text(&self) -> String {
        match &self.document {
            Some(name) => format!("{}-{}", self.base, name),
            None => self.base.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_without_document() {
        assert_eq!(WindowTitle::new("Markdown Editor").text(), "Markdown Editor");
    }

    #[test]
    fn test_document_name_is_replaced_not_appended() {
        let mut title = WindowTitle::new("Markdown Editor");
        title.set_document("a.md");
        title.set_document("b.md");
        assert_eq!(title.text(), "Markdown Editor-b.md");
    }
}
