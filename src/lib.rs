//! Document export glue for a block-editor host.
//!
//! Given a document handle and a requested format ([`ExportFormat`]), the
//! [`ExportDispatcher`] picks a pathway — standalone HTML/Markdown
//! transformers, the desktop save dialog, or the host editor's export
//! manager — and the [`PageExportHandler`] wraps each run with a loading
//! indicator and a single success or error notification. All real work
//! (rendering, format conversion, file writing) stays with the injected
//! collaborators.

pub mod dispatch;
pub mod doc;
pub mod error;
pub mod format;
pub mod host;
pub mod i18n;
pub mod loading;
pub mod notification;
pub mod page_export_handler;
pub mod transformer;

pub use dispatch::ExportDispatcher;
pub use doc::{Doc, DocMode};
pub use error::ExportError;
pub use format::ExportFormat;
pub use page_export_handler::PageExportHandler;
