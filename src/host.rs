//! Seams to the host editor and the desktop platform.
//!
//! The original design looked these services up through globally mounted
//! state; here they are injected explicitly. A missing service is modelled as
//! `None` and is never an error: exports that need one simply do nothing.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ExportError;

/// The currently mounted editor view, queried for its page-root capability.
#[cfg_attr(test, mockall::automock)]
pub trait EditorView: Send + Sync {
    /// Returns the page-root service, or `None` when no view is mounted or
    /// the mounted view does not carry the capability.
    fn page_service(&self) -> Option<Arc<dyn PageService>>;
}

/// Page-root service of the host editor.
#[cfg_attr(test, mockall::automock)]
pub trait PageService: Send + Sync {
    fn export_manager(&self) -> Arc<dyn ExportManager>;
}

/// Host-editor service that renders the currently loaded document to bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExportManager: Send + Sync {
    async fn export_pdf(&self) -> Result<(), ExportError>;

    async fn export_png(&self) -> Result<(), ExportError>;
}

/// Desktop-platform bridge for the native save dialog.
///
/// Only available under the desktop host; its presence is the desktop-host
/// signal the dispatcher branches on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DesktopBridge: Send + Sync {
    /// Opens a save dialog seeded with `suggested_name`; the editor renders
    /// and writes the PDF bytes out of band.
    async fn save_pdf_as(&self, suggested_name: &str) -> Result<(), ExportError>;
}
