use std::fs;
use std::path::{Path, PathBuf};

use status_logging::status_debug;

use crate::decode::{decode_text, DecodeError};
use crate::extract::{HtmlPlainTextExtractor, PlainTextExtractor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// Decide from the file extension, then by sniffing the content.
    #[default]
    Auto,
    Text,
    Html,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub name: String,
    pub encoding: String,
    /// Resolved format; never `Auto`.
    pub format: DocumentFormat,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: DecodeError,
    },
}

/// Turns raw document bytes into the plain text the metrics run on.
pub struct DocumentLoader {
    extractor: Box<dyn PlainTextExtractor>,
    encoding: Option<String>,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new(Box::new(HtmlPlainTextExtractor), None)
    }
}

impl DocumentLoader {
    pub fn new(extractor: Box<dyn PlainTextExtractor>, encoding: Option<String>) -> Self {
        Self {
            extractor,
            encoding,
        }
    }

    pub fn load_path(
        &self,
        path: &Path,
        format: DocumentFormat,
    ) -> Result<LoadedDocument, LoadError> {
        let bytes = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let format = match format {
            DocumentFormat::Auto => format_from_extension(path).unwrap_or(DocumentFormat::Auto),
            explicit => explicit,
        };
        self.load_bytes(&path.display().to_string(), &bytes, format)
    }

    pub fn load_bytes(
        &self,
        name: &str,
        bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<LoadedDocument, LoadError> {
        let decoded =
            decode_text(bytes, self.encoding.as_deref()).map_err(|source| LoadError::Decode {
                name: name.to_string(),
                source,
            })?;

        let format = match format {
            DocumentFormat::Auto if looks_like_html(&decoded.text) => DocumentFormat::Html,
            DocumentFormat::Auto => DocumentFormat::Text,
            explicit => explicit,
        };
        let text = match format {
            DocumentFormat::Html => self.extractor.extract(&decoded.text),
            _ => decoded.text,
        };

        status_debug!(
            "Loaded {} encoding={} format={:?} bytes={}",
            name,
            decoded.encoding_label,
            format,
            bytes.len()
        );

        Ok(LoadedDocument {
            name: name.to_string(),
            encoding: decoded.encoding_label,
            format,
            text,
        })
    }
}

fn format_from_extension(path: &Path) -> Option<DocumentFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "html" | "htm" | "xhtml" => Some(DocumentFormat::Html),
        "txt" | "text" | "md" | "markdown" => Some(DocumentFormat::Text),
        _ => None,
    }
}

/// Cheap sniff for markup: a leading tag and at least one closing tag.
pub fn looks_like_html(content: &str) -> bool {
    let head = content.trim_start();
    if !head.starts_with('<') {
        return false;
    }
    let lower = head.get(..64).unwrap_or(head).to_ascii_lowercase();
    lower.starts_with("<!doctype html") || lower.starts_with("<html") || head.contains("</")
}
