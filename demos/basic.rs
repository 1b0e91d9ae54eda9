use std::sync::Arc;

use async_trait::async_trait;
use page_export_rs::{
    Doc, DocMode, ExportDispatcher, ExportError, ExportFormat, PageExportHandler,
    host::{EditorView, ExportManager, PageService},
    i18n::EnglishStrings,
    loading::GlobalLoadingQueue,
    notification::{Notification, NotificationSink},
    transformer::DocTransformer,
};

struct PrintingManager;

#[async_trait]
impl ExportManager for PrintingManager {
    async fn export_pdf(&self) -> Result<(), ExportError> {
        println!("[export-manager] rendering current document to PDF");
        Ok(())
    }

    async fn export_png(&self) -> Result<(), ExportError> {
        println!("[export-manager] rendering current document to PNG");
        Ok(())
    }
}

struct DemoService;

impl PageService for DemoService {
    fn export_manager(&self) -> Arc<dyn ExportManager> {
        Arc::new(PrintingManager)
    }
}

struct DemoView;

impl EditorView for DemoView {
    fn page_service(&self) -> Option<Arc<dyn PageService>> {
        Some(Arc::new(DemoService))
    }
}

struct PrintingTransformer(&'static str);

#[async_trait]
impl DocTransformer for PrintingTransformer {
    async fn export_doc(&self, doc: &Doc) -> Result<(), ExportError> {
        println!("[{}-transformer] serializing \"{}\"", self.0, doc.title());
        Ok(())
    }
}

struct JsonSink;

impl NotificationSink for JsonSink {
    fn push(&self, notification: Notification) {
        match serde_json::to_string(&notification) {
            Ok(json) => println!("[notification] {json}"),
            Err(e) => eprintln!("[notification] unserializable record: {e}"),
        }
    }
}

#[tokio::main]
async fn main() {
    let dispatcher = ExportDispatcher::new(
        Arc::new(DemoView),
        None, // not running under the desktop host
        Arc::new(PrintingTransformer("html")),
        Arc::new(PrintingTransformer("markdown")),
    );

    let handler = Arc::new(PageExportHandler::new(
        Doc::new("Meeting notes", DocMode::Page),
        dispatcher,
        Arc::new(GlobalLoadingQueue::new()),
        Arc::new(JsonSink),
        Arc::new(EnglishStrings),
    ));

    let on_click = Arc::clone(&handler).into_callback();
    for format in ExportFormat::ALL {
        println!("--- exporting as {format} ---");
        on_click(format).await;
    }
}
