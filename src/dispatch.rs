//! Format-to-pathway dispatch.

use std::sync::Arc;

use crate::{
    doc::{Doc, DocMode},
    error::ExportError,
    format::ExportFormat,
    host::{DesktopBridge, EditorView},
    transformer::DocTransformer,
};

/// Selects the export pathway for a requested format and awaits the
/// delegated call.
///
/// HTML and Markdown go to their standalone transformers. PDF prefers the
/// native save dialog when a desktop bridge is attached and the document is
/// in page mode; PDF otherwise, and PNG always, go through the host editor's
/// export manager. When a pathway needs the page service and none is mounted
/// the dispatch is a silent no-op.
pub struct ExportDispatcher {
    view: Arc<dyn EditorView>,
    desktop: Option<Arc<dyn DesktopBridge>>,
    html: Arc<dyn DocTransformer>,
    markdown: Arc<dyn DocTransformer>,
}

impl ExportDispatcher {
    pub fn new(
        view: Arc<dyn EditorView>,
        desktop: Option<Arc<dyn DesktopBridge>>,
        html: Arc<dyn DocTransformer>,
        markdown: Arc<dyn DocTransformer>,
    ) -> Self {
        Self {
            view,
            desktop,
            html,
            markdown,
        }
    }

    /// Runs one export. Collaborator errors propagate unmodified.
    pub async fn dispatch(&self, doc: &Doc, format: ExportFormat) -> Result<(), ExportError> {
        // Looked up once per dispatch; absence is "nothing to do", not a failure.
        let page_service = self.view.page_service();

        match format {
            ExportFormat::Html => self.html.export_doc(doc).await,
            ExportFormat::Markdown => self.markdown.export_doc(doc).await,
            ExportFormat::Pdf => {
                if doc.mode() == DocMode::Page {
                    if let Some(bridge) = &self.desktop {
                        return bridge.save_pdf_as(doc.title()).await;
                    }
                }
                match page_service {
                    Some(service) => service.export_manager().export_pdf().await,
                    None => Ok(()),
                }
            }
            ExportFormat::Png => match page_service {
                Some(service) => service.export_manager().export_png().await,
                None => Ok(()),
            },
        }
    }
}
