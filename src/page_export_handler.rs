//! Notification lifecycle around a dispatched export.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::error;

use crate::{
    dispatch::ExportDispatcher,
    doc::Doc,
    format::ExportFormat,
    i18n::ExportStrings,
    loading::{LoadingGuard, LoadingRegistry, LoadingToken},
    notification::{Notification, NotificationSink},
};

/// Future minted by the bound export callback; always resolves, never errors.
pub type ExportCallbackFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Wraps the dispatcher with the loading indicator and terminal notification
/// every invocation must produce.
///
/// Bound to one document; suitable for handing to a UI control through
/// [`PageExportHandler::into_callback`]. Concurrent invocations are
/// independent: each owns its own loading token, and nothing deduplicates or
/// serializes them.
pub struct PageExportHandler {
    doc: Doc,
    dispatcher: ExportDispatcher,
    loading: Arc<dyn LoadingRegistry>,
    notifications: Arc<dyn NotificationSink>,
    strings: Arc<dyn ExportStrings>,
}

impl PageExportHandler {
    pub fn new(
        doc: Doc,
        dispatcher: ExportDispatcher,
        loading: Arc<dyn LoadingRegistry>,
        notifications: Arc<dyn NotificationSink>,
        strings: Arc<dyn ExportStrings>,
    ) -> Self {
        Self {
            doc,
            dispatcher,
            loading,
            notifications,
            strings,
        }
    }

    /// Runs one export: shows the loading indicator, dispatches, and ends
    /// with exactly one success or error notification.
    ///
    /// Dispatch failures are logged and reported through the sink, never
    /// returned. The loading token resolves on every exit path, including an
    /// unwind out of the sink itself.
    pub async fn handle(&self, format: ExportFormat) {
        let token = LoadingToken::fresh();
        let _loading = LoadingGuard::arm(Arc::clone(&self.loading), token);

        match self.dispatcher.dispatch(&self.doc, format).await {
            Ok(()) => {
                self.notifications.push(Notification::success(
                    self.strings.success_title(),
                    self.strings.success_message(),
                ));
            }
            Err(err) => {
                error!(%err, %format, %token, "document export failed");
                self.notifications.push(Notification::error(
                    self.strings.error_title(),
                    self.strings.error_message(),
                ));
            }
        }
    }

    /// Binds the handler to a UI control's action slot: each call mints an
    /// independent future running one full export lifecycle.
    pub fn into_callback(self: Arc<Self>) -> impl Fn(ExportFormat) -> ExportCallbackFuture {
        move |format| {
            let handler = Arc::clone(&self);
            Box::pin(async move { handler.handle(format).await })
        }
    }
}
