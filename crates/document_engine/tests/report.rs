use std::fs;

use document_engine::{
    ensure_report_dir, report_filename, write_atomically, write_report, DocumentFormat,
    DocumentLoader, MetricsReport,
};
use pretty_assertions::assert_eq;
use readability_core::DocumentMetrics;
use tempfile::TempDir;

fn sample_report(document: &str) -> MetricsReport {
    MetricsReport {
        document: document.to_string(),
        encoding: "UTF-8".to_string(),
        generated_utc: "2024-01-01T00:00:00+00:00".to_string(),
        character_limit: Some(10_000),
        over_limit: false,
        metrics: DocumentMetrics::from_text("The cat sat. The dog ran."),
    }
}

fn assert_report_name(document: &str, stem: &str) {
    let name = report_filename(document);
    let prefix = format!("{stem}--");
    assert!(name.starts_with(&prefix), "unexpected report name: {name}");
    assert!(name.ends_with(".metrics.json"), "unexpected report name: {name}");
    let hash = &name[prefix.len()..name.len() - ".metrics.json".len()];
    assert_eq!(hash.len(), 8);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn filename_uses_stem_and_is_safe() {
    assert_report_name("notes/draft.html", "draft");
    assert_report_name("<stdin>", "stdin");
    assert_report_name("a:b*?c", "a_b_c");
    assert_report_name("???", "document");
}

#[test]
fn filename_is_deterministic() {
    assert_eq!(report_filename("notes/draft.html"), report_filename("notes/draft.html"));
}

#[test]
fn same_stem_in_different_places_gets_distinct_reports() {
    let names = [
        report_filename("a/notes.txt"),
        report_filename("b/notes.txt"),
        report_filename("b/notes.html"),
    ];
    assert_ne!(names[0], names[1]);
    assert_ne!(names[1], names[2]);
    assert_ne!(names[0], names[2]);
}

#[test]
fn reports_for_same_stem_do_not_overwrite_each_other() {
    let temp = TempDir::new().unwrap();
    let first = write_report(temp.path(), &sample_report("a/notes.txt")).unwrap();
    let second = write_report(temp.path(), &sample_report("b/notes.html")).unwrap();

    assert_ne!(first, second);
    assert!(first.exists());
    assert!(second.exists());
}

#[test]
fn creates_missing_report_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("reports");
    assert!(!new_dir.exists());
    ensure_report_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();

    let first = write_atomically(temp.path(), "out.json", b"hello").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = write_atomically(temp.path(), "out.json", b"world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn no_partial_file_when_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let result = write_atomically(&file_path, "out.json", b"data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("out.json").exists());
}

#[test]
fn report_is_flat_json() {
    let temp = TempDir::new().unwrap();
    let path = write_report(temp.path(), &sample_report("chapter one.txt")).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        report_filename("chapter one.txt")
    );
    assert!(report_filename("chapter one.txt").starts_with("chapter one--"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        written,
        serde_json::json!({
            "document": "chapter one.txt",
            "encoding": "UTF-8",
            "generated_utc": "2024-01-01T00:00:00+00:00",
            "character_limit": 10000,
            "over_limit": false,
            "characters": 25,
            "words": 6,
            "reading_time": "1 min",
            "reading_level": "Beginner",
        })
    );
}

#[test]
fn loader_reads_html_files_by_extension() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("page.html");
    fs::write(&path, "Intro <b>text</b> without a leading tag.").unwrap();

    let doc = DocumentLoader::default()
        .load_path(&path, DocumentFormat::Auto)
        .unwrap();
    assert_eq!(doc.format, DocumentFormat::Html);
    assert_eq!(doc.text, "Intro text without a leading tag.");
}

#[test]
fn loader_reports_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = DocumentLoader::default()
        .load_path(&temp.path().join("missing.txt"), DocumentFormat::Auto)
        .unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
}
