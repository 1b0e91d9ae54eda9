/// Display mode of a document, as recorded in its metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocMode {
    Page,
    Edgeless,
}

/// Handle to the in-memory document being exported.
///
/// This crate never renders or mutates the document itself; it only reads the
/// title (as a suggested filename) and the display mode (to pick the PDF
/// pathway). Everything else stays with the collaborators.
#[derive(Debug, Clone)]
pub struct Doc {
    title: String,
    mode: DocMode,
}

impl Doc {
    pub fn new(title: impl Into<String>, mode: DocMode) -> Self {
        Self {
            title: title.into(),
            mode,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mode(&self) -> DocMode {
        self.mode
    }
}
