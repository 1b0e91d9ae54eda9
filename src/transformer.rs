use async_trait::async_trait;

use crate::{doc::Doc, error::ExportError};

/// Standalone document transformer (HTML or Markdown serialization).
///
/// Transformers work directly on the document handle and need no host
/// service; the dispatcher holds one instance per target format.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocTransformer: Send + Sync {
    async fn export_doc(&self, doc: &Doc) -> Result<(), ExportError>;
}
