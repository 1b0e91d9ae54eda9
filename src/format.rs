use std::str::FromStr;

use serde::Deserialize;

/// The closed set of formats a document can be exported to.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Html,
    Png,
    Markdown,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Png => write!(f, "png"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "html" => Ok(ExportFormat::Html),
            "png" => Ok(ExportFormat::Png),
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            _ => Err(format!("Invalid export format: {}", s)),
        }
    }
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Pdf,
        ExportFormat::Html,
        ExportFormat::Png,
        ExportFormat::Markdown,
    ];
}
