//! Document engine: IO around the metrics core (decoding, plain-text extraction, reports).
mod decode;
mod extract;
mod load;
mod report;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use extract::{HtmlPlainTextExtractor, PlainTextExtractor};
pub use load::{looks_like_html, DocumentFormat, DocumentLoader, LoadError, LoadedDocument};
pub use report::{
    ensure_report_dir, report_filename, write_atomically, write_report, MetricsReport,
    ReportError,
};
