use thiserror::Error;

/// Failures raised by the delegated export pathways.
///
/// The dispatcher performs no translation: whatever a transformer, the file
/// save bridge, or the export manager reports is carried through unmodified.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Transformer error: {0}")]
    Transformer(String),

    #[error("File save error: {0}")]
    FileSave(String),

    #[error("Export manager error: {0}")]
    ExportManager(String),
}
