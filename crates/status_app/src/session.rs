use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use document_engine::{
    write_report, DocumentFormat, DocumentLoader, LoadedDocument, MetricsReport,
};
use status_core::{update, AppState, Effect, Msg};
use status_logging::{status_error, status_info, status_warn};

/// Analyses documents and renders one status line per document.
pub struct Session {
    loader: DocumentLoader,
    character_limit: Option<usize>,
    report_dir: Option<PathBuf>,
}

impl Session {
    pub fn new(
        loader: DocumentLoader,
        character_limit: Option<usize>,
        report_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            loader,
            character_limit,
            report_dir,
        }
    }

    pub fn loader(&self) -> &DocumentLoader {
        &self.loader
    }

    pub fn initial_state(&self) -> AppState {
        AppState::with_character_limit(self.character_limit)
    }

    /// Feeds `doc` into `state`, handles effects, and writes a report if configured.
    pub fn apply(&self, state: AppState, doc: &LoadedDocument) -> Result<AppState> {
        let (state, effects) = update(state, Msg::ContentChanged(doc.text.clone()));
        for effect in effects {
            match effect {
                Effect::LimitExceeded { characters, limit } => {
                    status_warn!(
                        "{}: {} characters exceeds the limit of {}",
                        doc.name,
                        characters,
                        limit
                    );
                }
                Effect::LimitRestored => {
                    status_info!("{}: back within the character limit", doc.name);
                }
            }
        }

        if let Some(dir) = &self.report_dir {
            let view = state.view();
            let report = MetricsReport {
                document: doc.name.clone(),
                encoding: doc.encoding.clone(),
                generated_utc: Utc::now().to_rfc3339(),
                character_limit: view.status.character_limit,
                over_limit: view.status.over_limit,
                metrics: *state.metrics(),
            };
            let path = write_report(dir, &report)
                .with_context(|| format!("writing report for {}", doc.name))?;
            status_info!("Wrote report {:?}", path);
        }

        Ok(state)
    }

    /// One-shot analysis of a single document; returns its status line.
    pub fn analyse(&self, doc: &LoadedDocument) -> Result<String> {
        let state = self.apply(self.initial_state(), doc)?;
        Ok(state.view().status.status_line())
    }

    /// Prints `line`, prefixed with the document name when `labelled`.
    pub fn print(
        out: &mut impl Write,
        doc: &LoadedDocument,
        line: &str,
        labelled: bool,
    ) -> Result<()> {
        if labelled {
            writeln!(out, "{}: {}", doc.name, line)?;
        } else {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Analyses each file in turn; a failing file is logged and skipped.
    /// Returns the number of failures.
    pub fn run_files(
        &self,
        files: &[PathBuf],
        format: DocumentFormat,
        out: &mut impl Write,
    ) -> usize {
        let labelled = files.len() > 1;
        let mut failures = 0;
        for path in files {
            let result = self
                .loader
                .load_path(path, format)
                .map_err(anyhow::Error::from)
                .and_then(|doc| {
                    let line = self.analyse(&doc)?;
                    Self::print(&mut *out, &doc, &line, labelled)
                });
            if let Err(err) = result {
                failures += 1;
                status_error!("{}: {:#}", path.display(), err);
            }
        }
        failures
    }
}
