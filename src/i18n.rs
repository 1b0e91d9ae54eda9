/// Localization lookup for the four fixed export notification strings.
pub trait ExportStrings: Send + Sync {
    fn success_title(&self) -> String;

    fn success_message(&self) -> String;

    fn error_title(&self) -> String;

    fn error_message(&self) -> String;
}

/// Built-in English strings, used when the host ships no translations.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishStrings;

impl ExportStrings for EnglishStrings {
    fn success_title(&self) -> String {
        "Export success".into()
    }

    fn success_message(&self) -> String {
        "Your document has been exported.".into()
    }

    fn error_title(&self) -> String {
        "Export failed".into()
    }

    fn error_message(&self) -> String {
        "The document could not be exported. Please try again later.".into()
    }
}
